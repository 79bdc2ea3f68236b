pub mod request;
pub mod response;

pub use request::{ArticleLength, BriefSource, Creativity, GenerateArticleRequest, WriterForm};
pub use response::GenerateArticleResponse;

use crate::usecases::common::UseCaseMetadata;

/// File name offered when the generated article is downloaded.
pub const ARTICLE_FILE_NAME: &str = "articolo-seo.md";

/// Content type of the downloaded article.
pub const ARTICLE_CONTENT_TYPE: &str = "text/markdown";

pub struct ArticleWriter;

impl UseCaseMetadata for ArticleWriter {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "article_writer"
    }

    fn display_name() -> &'static str {
        "Redattore articoli"
    }

    fn description() -> &'static str {
        "Trasforma un brief SEO in un articolo completo."
    }
}
