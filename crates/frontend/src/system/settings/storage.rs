use contracts::shared::credentials::Credentials;
use web_sys::window;

const OPENAI_KEY: &str = "openai_key";
const SERP_KEY: &str = "serp_key";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(storage: &web_sys::Storage, key: &str) -> String {
    storage.get_item(key).ok().flatten().unwrap_or_default()
}

/// Read both keys from localStorage. Missing keys load as empty strings.
pub fn load_credentials() -> Credentials {
    match get_local_storage() {
        Some(storage) => Credentials::new(
            get_item(&storage, OPENAI_KEY),
            get_item(&storage, SERP_KEY),
        ),
        None => {
            log::warn!("localStorage unavailable, starting without credentials");
            Credentials::default()
        }
    }
}

/// Persist both keys to localStorage.
pub fn save_credentials(credentials: &Credentials) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage non disponibile")?;
    storage
        .set_item(OPENAI_KEY, &credentials.openai_key)
        .map_err(|e| format!("Impossibile salvare la chiave OpenAI: {:?}", e))?;
    storage
        .set_item(SERP_KEY, &credentials.serp_key)
        .map_err(|e| format!("Impossibile salvare la chiave SerpAPI: {:?}", e))?;
    log::info!("Credentials saved");
    Ok(())
}
