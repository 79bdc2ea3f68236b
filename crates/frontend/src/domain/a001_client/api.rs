use async_trait::async_trait;
use contracts::domain::a001_client::aggregate::{
    AutoGenerateRequest, Client, ClientDto, ClientProfileDraft, ClientSummary,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::path_segment;
use crate::shared::http::{HttpBackend, Verb};

/// Client endpoints of the backend.
#[async_trait(?Send)]
pub trait ClientApi {
    async fn list_clients(&self) -> Result<Vec<ClientSummary>, ApiError>;
    async fn get_client(&self, id: &str) -> Result<Client, ApiError>;
    async fn create_client(&self, dto: &ClientDto) -> Result<(), ApiError>;
    async fn update_client(&self, id: &str, dto: &ClientDto) -> Result<(), ApiError>;
    async fn delete_client(&self, id: &str) -> Result<(), ApiError>;
    async fn auto_generate(&self, req: &AutoGenerateRequest)
        -> Result<ClientProfileDraft, ApiError>;
}

#[async_trait(?Send)]
impl ClientApi for HttpBackend {
    async fn list_clients(&self) -> Result<Vec<ClientSummary>, ApiError> {
        self.get_json("/api/clients", "Errore caricamento clienti").await
    }

    async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        let path = format!("/api/clients/{}", path_segment(id));
        self.get_json(&path, "Errore caricamento cliente").await
    }

    async fn create_client(&self, dto: &ClientDto) -> Result<(), ApiError> {
        self.send_json_ack(Verb::Post, "/api/clients", dto, "Errore creazione cliente")
            .await
    }

    async fn update_client(&self, id: &str, dto: &ClientDto) -> Result<(), ApiError> {
        let path = format!("/api/clients/{}", path_segment(id));
        self.send_json_ack(Verb::Put, &path, dto, "Errore salvataggio cliente")
            .await
    }

    async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/clients/{}", path_segment(id));
        self.delete(&path, "Errore eliminazione cliente").await
    }

    async fn auto_generate(
        &self,
        req: &AutoGenerateRequest,
    ) -> Result<ClientProfileDraft, ApiError> {
        self.send_json(
            Verb::Post,
            "/api/clients/auto-generate",
            req,
            "Errore generazione profilo",
        )
        .await
    }
}
