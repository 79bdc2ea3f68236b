use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;
use crate::shared::credentials::Credentials;

/// Competitor counts offered by the form.
pub const COMPETITOR_CHOICES: [u8; 6] = [3, 4, 5, 6, 8, 10];

pub const DEFAULT_COMPETITORS: u8 = 6;

/// Target market. The wire value is the locale label the backend maps to a SERP locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Market {
    #[default]
    #[serde(rename = "🇮🇹 Italia")]
    Italy,
    #[serde(rename = "🇺🇸 USA (English)")]
    Usa,
    #[serde(rename = "🇬🇧 UK")]
    Uk,
    #[serde(rename = "🇪🇸 Spagna")]
    Spain,
    #[serde(rename = "🇫🇷 Francia")]
    France,
    #[serde(rename = "🇩🇪 Germania")]
    Germany,
}

impl Market {
    pub fn label(&self) -> &'static str {
        match self {
            Market::Italy => "🇮🇹 Italia",
            Market::Usa => "🇺🇸 USA (English)",
            Market::Uk => "🇬🇧 UK",
            Market::Spain => "🇪🇸 Spagna",
            Market::France => "🇫🇷 Francia",
            Market::Germany => "🇩🇪 Germania",
        }
    }

    pub fn all() -> Vec<Market> {
        vec![
            Market::Italy,
            Market::Usa,
            Market::Uk,
            Market::Spain,
            Market::France,
            Market::Germany,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.label() == label)
    }
}

/// Search intent of the target keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchIntent {
    #[default]
    #[serde(rename = "Informativo")]
    Informational,
    #[serde(rename = "Commerciale")]
    Commercial,
    #[serde(rename = "Navigazionale")]
    Navigational,
}

impl SearchIntent {
    pub fn label(&self) -> &'static str {
        match self {
            SearchIntent::Informational => "Informativo",
            SearchIntent::Commercial => "Commerciale",
            SearchIntent::Navigational => "Navigazionale",
        }
    }

    pub fn all() -> Vec<SearchIntent> {
        vec![
            SearchIntent::Informational,
            SearchIntent::Commercial,
            SearchIntent::Navigational,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|i| i.label() == label)
    }
}

/// Values collected by the analysis form.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisForm {
    pub keyword: String,
    pub client_id: Option<String>,
    pub market: Market,
    pub intent: SearchIntent,
    pub max_competitors: u8,
    pub include_schema: bool,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            client_id: None,
            market: Market::default(),
            intent: SearchIntent::default(),
            max_competitors: DEFAULT_COMPETITORS,
            include_schema: true,
        }
    }
}

impl AnalysisForm {
    /// Validate and build the request.
    ///
    /// Checks run in a fixed order (keyword, OpenAI key, SerpAPI key) and the first
    /// failure is reported.
    pub fn to_request(&self, credentials: &Credentials) -> Result<AnalyseRequest, ApiError> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(ApiError::validation("Inserisci la keyword principale."));
        }
        if !credentials.has_openai() {
            return Err(ApiError::validation(
                "OpenAI key mancante: configurala nelle Impostazioni.",
            ));
        }
        if !credentials.has_serp() {
            return Err(ApiError::validation(
                "SerpAPI key mancante: configurala nelle Impostazioni.",
            ));
        }
        let max_competitors = if COMPETITOR_CHOICES.contains(&self.max_competitors) {
            self.max_competitors
        } else {
            DEFAULT_COMPETITORS
        };
        Ok(AnalyseRequest {
            keyword: keyword.to_string(),
            client_id: self.client_id.clone().filter(|id| !id.is_empty()),
            market: self.market,
            intent: self.intent,
            max_competitors,
            include_schema: self.include_schema,
            openai_api_key: credentials.openai_key.trim().to_string(),
            serp_api_key: credentials.serp_key.trim().to_string(),
            save_brief: true,
        })
    }
}

/// Body of `POST /api/seo/analyse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyseRequest {
    pub keyword: String,
    pub client_id: Option<String>,
    pub market: Market,
    pub intent: SearchIntent,
    pub max_competitors: u8,
    pub include_schema: bool,
    pub openai_api_key: String,
    pub serp_api_key: String,
    pub save_brief: bool,
}
