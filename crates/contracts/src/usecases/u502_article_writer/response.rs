use serde::{Deserialize, Serialize};

/// Result of `POST /api/writer/generate`: the article as markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateArticleResponse {
    pub article: String,
}
