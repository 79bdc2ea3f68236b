use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_seo_analysis::{AnalyseRequest, AnalyseResponse};

use crate::shared::http::{HttpBackend, Verb};

pub const ANALYSIS_FAILED: &str = "Errore durante l'analisi SEO.";

#[async_trait(?Send)]
pub trait SeoAnalysisApi {
    /// Long-running: SERP fetch, competitor scraping and brief generation.
    async fn analyse(&self, req: &AnalyseRequest) -> Result<AnalyseResponse, ApiError>;
}

#[async_trait(?Send)]
impl SeoAnalysisApi for HttpBackend {
    async fn analyse(&self, req: &AnalyseRequest) -> Result<AnalyseResponse, ApiError> {
        self.send_json(Verb::Post, "/api/seo/analyse", req, ANALYSIS_FAILED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_error_body_falls_back_to_analysis_message() {
        let err = ApiError::from_response(502, "Bad Gateway", ANALYSIS_FAILED);
        assert_eq!(err.to_string(), ANALYSIS_FAILED);
    }
}
