use async_trait::async_trait;
use contracts::domain::a002_keyword::aggregate::{
    AddKeywordRequest, BulkKeywordsRequest, BulkKeywordsResponse, KeywordStatus,
    UpdateKeywordStatusRequest,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::path_segment;
use crate::shared::http::{HttpBackend, Verb};

/// Keyword endpoints, all scoped to one client.
#[async_trait(?Send)]
pub trait KeywordApi {
    async fn add_keyword(&self, client_id: &str, keyword: &str) -> Result<(), ApiError>;
    async fn delete_keyword(&self, client_id: &str, keyword_id: &str) -> Result<(), ApiError>;
    async fn update_keyword_status(
        &self,
        client_id: &str,
        keyword_id: &str,
        status: KeywordStatus,
    ) -> Result<(), ApiError>;
    async fn clear_keywords(&self, client_id: &str) -> Result<(), ApiError>;
    async fn bulk_add_keywords(
        &self,
        client_id: &str,
        keywords: &[String],
    ) -> Result<BulkKeywordsResponse, ApiError>;
}

fn keywords_path(client_id: &str) -> String {
    format!("/api/clients/{}/keywords", path_segment(client_id))
}

fn keyword_path(client_id: &str, keyword_id: &str) -> String {
    format!("{}/{}", keywords_path(client_id), path_segment(keyword_id))
}

#[async_trait(?Send)]
impl KeywordApi for HttpBackend {
    async fn add_keyword(&self, client_id: &str, keyword: &str) -> Result<(), ApiError> {
        let body = AddKeywordRequest {
            keyword: keyword.to_string(),
        };
        self.send_json_ack(
            Verb::Post,
            &keywords_path(client_id),
            &body,
            "Errore aggiunta keyword",
        )
        .await
    }

    async fn delete_keyword(&self, client_id: &str, keyword_id: &str) -> Result<(), ApiError> {
        self.delete(&keyword_path(client_id, keyword_id), "Errore eliminazione keyword")
            .await
    }

    async fn update_keyword_status(
        &self,
        client_id: &str,
        keyword_id: &str,
        status: KeywordStatus,
    ) -> Result<(), ApiError> {
        let body = UpdateKeywordStatusRequest { status };
        self.send_json_ack(
            Verb::Patch,
            &keyword_path(client_id, keyword_id),
            &body,
            "Errore aggiornamento stato keyword",
        )
        .await
    }

    async fn clear_keywords(&self, client_id: &str) -> Result<(), ApiError> {
        self.delete(&keywords_path(client_id), "Errore svuotamento keyword")
            .await
    }

    async fn bulk_add_keywords(
        &self,
        client_id: &str,
        keywords: &[String],
    ) -> Result<BulkKeywordsResponse, ApiError> {
        let body = BulkKeywordsRequest {
            keywords: keywords.to_vec(),
        };
        self.send_json(
            Verb::Post,
            &format!("{}/bulk", keywords_path(client_id)),
            &body,
            "Errore importazione keyword",
        )
        .await
    }
}
