//! Client commands shared by the directory and detail pages.
//!
//! Each command validates locally first; a validation failure never reaches the backend.

use contracts::domain::a001_client::aggregate::{
    AutoGenerateRequest, Client, ClientForm, ClientProfileDraft, ClientSummary,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::credentials::Credentials;

use super::api::ClientApi;

pub const CREATE_FAILED: &str = "Impossibile creare cliente (probabile duplicato).";
pub const SAVE_FAILED: &str = "Impossibile salvare le modifiche al cliente.";
pub const DELETE_FAILED: &str = "Impossibile eliminare il cliente.";
pub const LOAD_LIST_FAILED: &str = "Errore nel caricamento clienti";
pub const AUTO_GENERATE_FAILED: &str =
    "Generazione automatica non riuscita: controlla le chiavi API nelle Impostazioni.";
pub const MISSING_URL: &str = "Inserisci l'URL del sito del cliente.";
pub const MISSING_OPENAI: &str = "OpenAI key mancante: configurala nelle Impostazioni.";

pub async fn list_clients<A: ClientApi + ?Sized>(api: &A) -> Result<Vec<ClientSummary>, ApiError> {
    api.list_clients()
        .await
        .map_err(|e| e.with_context(LOAD_LIST_FAILED))
}

/// Create a client from the form. A blank name is rejected without a request.
pub async fn create_client<A: ClientApi + ?Sized>(api: &A, form: &ClientForm) -> Result<(), ApiError> {
    let dto = form.validate()?;
    api.create_client(&dto)
        .await
        .map_err(|e| e.with_context(CREATE_FAILED))?;
    log::info!("Client created: {}", dto.name);
    Ok(())
}

/// Ask the backend to infer a profile from the client's website.
pub async fn auto_generate_profile<A: ClientApi + ?Sized>(
    api: &A,
    url: &str,
    credentials: &Credentials,
) -> Result<ClientProfileDraft, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::validation(MISSING_URL));
    }
    if !credentials.has_openai() {
        return Err(ApiError::validation(MISSING_OPENAI));
    }
    let req = AutoGenerateRequest {
        url: url.to_string(),
        openai_api_key: credentials.openai_key.trim().to_string(),
    };
    api.auto_generate(&req)
        .await
        .map_err(|e| e.with_context(AUTO_GENERATE_FAILED))
}

pub async fn load_client<A: ClientApi + ?Sized>(api: &A, id: &str) -> Result<Client, ApiError> {
    api.get_client(id).await
}

/// Save the edited profile and return the client as it should now be displayed.
pub async fn save_client<A: ClientApi + ?Sized>(
    api: &A,
    current: &Client,
    form: &ClientForm,
) -> Result<Client, ApiError> {
    let dto = form.validate()?;
    api.update_client(&current.id, &dto).await.map_err(|e| match e {
        // the backend's own detail wins over the generic message
        ApiError::Http { .. } => e,
        other => other.with_context(SAVE_FAILED),
    })?;
    let mut updated = current.clone();
    updated.apply_dto(&dto);
    Ok(updated)
}

pub async fn delete_client<A: ClientApi + ?Sized>(api: &A, id: &str) -> Result<(), ApiError> {
    api.delete_client(id)
        .await
        .map_err(|e| e.with_context(DELETE_FAILED))?;
    log::info!("Client deleted: {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{Call, FakeBackend};
    use futures::executor::block_on;

    fn form(name: &str) -> ClientForm {
        ClientForm {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_then_list_contains_client() {
        let backend = FakeBackend::new();
        block_on(create_client(&backend, &form("Acme"))).unwrap();
        let clients = block_on(list_clients(&backend)).unwrap();
        assert!(clients.iter().any(|c| c.name == "Acme"));
    }

    #[test]
    fn test_blank_name_issues_no_request() {
        let backend = FakeBackend::new();
        let err = block_on(create_client(&backend, &form("   "))).unwrap_err();
        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_duplicate_surfaces_generic_message() {
        let backend = FakeBackend::new();
        block_on(create_client(&backend, &form("Acme"))).unwrap();
        let err = block_on(create_client(&backend, &form("Acme"))).unwrap_err();
        assert!(err.to_string().starts_with(CREATE_FAILED));
    }

    #[test]
    fn test_auto_generate_requires_openai_key() {
        let backend = FakeBackend::new();
        let err = block_on(auto_generate_profile(
            &backend,
            "https://acme.it",
            &Credentials::new("", "serp"),
        ))
        .unwrap_err();
        assert_eq!(err, ApiError::validation(MISSING_OPENAI));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_auto_generate_sends_url_and_key() {
        let backend = FakeBackend::new();
        let draft = block_on(auto_generate_profile(
            &backend,
            " https://acme.it ",
            &Credentials::new("sk-test", ""),
        ))
        .unwrap();
        assert_eq!(draft.url.as_deref(), Some("https://acme.it"));
        assert_eq!(
            backend.calls(),
            vec![Call::AutoGenerate {
                url: "https://acme.it".into(),
                openai_api_key: "sk-test".into()
            }]
        );
    }

    #[test]
    fn test_auto_generate_failure_points_to_settings() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Http {
            status: 401,
            message: "invalid api key".into(),
        });
        let err = block_on(auto_generate_profile(
            &backend,
            "https://acme.it",
            &Credentials::new("sk-bad", ""),
        ))
        .unwrap_err();
        assert!(err.to_string().starts_with(AUTO_GENERATE_FAILED));
    }

    #[test]
    fn test_save_applies_form_to_client() {
        let backend = FakeBackend::new();
        let id = backend.seed_client("Acme");
        let client = block_on(load_client(&backend, &id)).unwrap();
        let mut edit = ClientForm::from(&client);
        edit.sector = "Ferramenta".into();
        let saved = block_on(save_client(&backend, &client, &edit)).unwrap();
        assert_eq!(saved.sector.as_deref(), Some("Ferramenta"));
        assert_eq!(saved.id, client.id);
        let reloaded = block_on(load_client(&backend, &id)).unwrap();
        assert_eq!(reloaded.sector.as_deref(), Some("Ferramenta"));
    }

    #[test]
    fn test_save_keeps_backend_detail() {
        let backend = FakeBackend::new();
        let id = backend.seed_client("Acme");
        let client = block_on(load_client(&backend, &id)).unwrap();
        backend.fail_next(ApiError::Http {
            status: 400,
            message: "Nome già in uso".into(),
        });
        let err = block_on(save_client(&backend, &client, &ClientForm::from(&client))).unwrap_err();
        assert_eq!(err.to_string(), "Nome già in uso");
    }

    #[test]
    fn test_missing_client_is_not_found() {
        let backend = FakeBackend::new();
        assert_eq!(block_on(load_client(&backend, "nope")), Err(ApiError::NotFound));
    }

    #[test]
    fn test_delete_removes_client() {
        let backend = FakeBackend::new();
        let id = backend.seed_client("Acme");
        block_on(delete_client(&backend, &id)).unwrap();
        assert!(block_on(list_clients(&backend)).unwrap().is_empty());
    }
}
