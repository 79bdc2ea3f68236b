use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u502_article_writer::{GenerateArticleRequest, GenerateArticleResponse};

use crate::shared::http::{HttpBackend, Verb};

pub const GENERATION_FAILED: &str = "Errore durante la generazione dell'articolo.";

#[async_trait(?Send)]
pub trait ArticleWriterApi {
    async fn generate_article(
        &self,
        req: &GenerateArticleRequest,
    ) -> Result<GenerateArticleResponse, ApiError>;
}

#[async_trait(?Send)]
impl ArticleWriterApi for HttpBackend {
    async fn generate_article(
        &self,
        req: &GenerateArticleRequest,
    ) -> Result<GenerateArticleResponse, ApiError> {
        self.send_json(Verb::Post, "/api/writer/generate", req, GENERATION_FAILED)
            .await
    }
}
