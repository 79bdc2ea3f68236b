use contracts::shared::credentials::Credentials;
use leptos::prelude::*;

use super::storage;

/// Credentials shared by every page that calls the AI-backed endpoints.
///
/// Loaded once at start-up; written back only by [`save`].
#[derive(Clone, Copy)]
pub struct CredentialsContext(pub RwSignal<Credentials>);

impl CredentialsContext {
    pub fn get(&self) -> Credentials {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Credentials {
        self.0.get_untracked()
    }

    /// Persist `credentials` and publish them to the component tree.
    pub fn save(&self, credentials: Credentials) -> Result<(), String> {
        storage::save_credentials(&credentials)?;
        self.0.set(credentials);
        Ok(())
    }
}

/// Load the stored credentials and provide them as context.
pub fn provide_credentials() -> CredentialsContext {
    let ctx = CredentialsContext(RwSignal::new(storage::load_credentials()));
    provide_context(ctx);
    ctx
}

/// Hook to access the credentials
pub fn use_credentials() -> CredentialsContext {
    use_context::<CredentialsContext>().expect("provide_credentials was not called")
}
