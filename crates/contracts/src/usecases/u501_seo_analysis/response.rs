use serde::{Deserialize, Serialize};

/// Result of `POST /api/seo/analyse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyseResponse {
    pub brief_output: String,
    #[serde(default)]
    pub competitors_analysed: u32,
}
