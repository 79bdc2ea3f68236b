use async_trait::async_trait;
use contracts::domain::a003_brief::aggregate::BriefSummary;
use contracts::shared::api_error::ApiError;

use crate::shared::http::HttpBackend;

/// Saved briefs, read-only.
#[async_trait(?Send)]
pub trait BriefApi {
    async fn list_briefs(&self) -> Result<Vec<BriefSummary>, ApiError>;
}

#[async_trait(?Send)]
impl BriefApi for HttpBackend {
    async fn list_briefs(&self) -> Result<Vec<BriefSummary>, ApiError> {
        self.get_json("/api/seo/briefs", "Errore caricamento brief").await
    }
}
