use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;
use crate::shared::credentials::Credentials;

/// Target length preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArticleLength {
    #[serde(rename = "Standard")]
    Standard,
    #[default]
    #[serde(rename = "Long form")]
    LongForm,
    #[serde(rename = "Authority guide")]
    AuthorityGuide,
}

impl ArticleLength {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleLength::Standard => "Standard",
            ArticleLength::LongForm => "Long form",
            ArticleLength::AuthorityGuide => "Authority guide",
        }
    }

    pub fn all() -> Vec<ArticleLength> {
        vec![
            ArticleLength::Standard,
            ArticleLength::LongForm,
            ArticleLength::AuthorityGuide,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.label() == label)
    }
}

/// Sampling creativity in `[0, 1]`, on a 0.05 grid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Creativity(f64);

impl Creativity {
    pub const STEP: f64 = 0.05;
    pub const DEFAULT: f64 = 0.35;

    /// Clamp into range and snap to the nearest step. NaN becomes the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        let clamped = value.clamp(0.0, 1.0);
        let steps = (clamped / Self::STEP).round();
        // round to 2 decimals so 0.35 stays 0.35 and not 0.35000000000000003
        Self(((steps * Self::STEP) * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Creativity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Where the brief comes from: a saved brief or text pasted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BriefSource {
    Saved(String),
    Freeform(String),
}

/// Values collected by the writer form.
///
/// A saved brief and freeform text are mutually exclusive: selecting a saved brief
/// clears the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriterForm {
    pub brief_id: Option<String>,
    pub brief_text: String,
    pub brand_name: String,
    pub target_page_url: String,
    pub length: ArticleLength,
    pub creativity: Creativity,
}

impl WriterForm {
    /// Select a saved brief (`None` or empty id goes back to freeform text).
    pub fn select_brief(&mut self, brief_id: Option<String>) {
        self.brief_id = brief_id.filter(|id| !id.is_empty());
        if self.brief_id.is_some() {
            self.brief_text.clear();
        }
    }

    pub fn brief_source(&self) -> Option<BriefSource> {
        if let Some(id) = &self.brief_id {
            return Some(BriefSource::Saved(id.clone()));
        }
        let text = self.brief_text.trim();
        if text.is_empty() {
            None
        } else {
            Some(BriefSource::Freeform(text.to_string()))
        }
    }

    /// Validate (brief first, then OpenAI key) and build the request.
    pub fn to_request(&self, credentials: &Credentials) -> Result<GenerateArticleRequest, ApiError> {
        let source = self.brief_source().ok_or_else(|| {
            ApiError::validation("Seleziona un brief salvato o incolla il testo del brief.")
        })?;
        if !credentials.has_openai() {
            return Err(ApiError::validation(
                "OpenAI key mancante: configurala nelle Impostazioni.",
            ));
        }
        let (brief_id, brief_text) = match source {
            BriefSource::Saved(id) => (Some(id), None),
            BriefSource::Freeform(text) => (None, Some(text)),
        };
        Ok(GenerateArticleRequest {
            brief_id,
            brief_text,
            brand_name: self.brand_name.trim().to_string(),
            target_page_url: self.target_page_url.trim().to_string(),
            length: self.length,
            creativity: self.creativity,
            openai_api_key: credentials.openai_key.trim().to_string(),
        })
    }
}

/// Body of `POST /api/writer/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateArticleRequest {
    pub brief_id: Option<String>,
    pub brief_text: Option<String>,
    pub brand_name: String,
    pub target_page_url: String,
    pub length: ArticleLength,
    pub creativity: Creativity,
    pub openai_api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("sk-1", "")
    }

    #[test]
    fn test_neither_brief_nor_text_is_rejected() {
        let form = WriterForm {
            brief_text: "   ".into(),
            ..Default::default()
        };
        let err = form.to_request(&creds()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Seleziona un brief salvato o incolla il testo del brief."
        );
    }

    #[test]
    fn test_brief_checked_before_credential() {
        let err = WriterForm::default()
            .to_request(&Credentials::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Seleziona un brief"));
    }

    #[test]
    fn test_missing_openai_key() {
        let form = WriterForm {
            brief_text: "H1: guida".into(),
            ..Default::default()
        };
        let err = form.to_request(&Credentials::default()).unwrap_err();
        assert!(err.to_string().starts_with("OpenAI key mancante"));
    }

    #[test]
    fn test_selecting_saved_brief_clears_text() {
        let mut form = WriterForm {
            brief_text: "testo incollato".into(),
            ..Default::default()
        };
        form.select_brief(Some("b7".into()));
        assert!(form.brief_text.is_empty());
        let req = form.to_request(&creds()).unwrap();
        assert_eq!(req.brief_id.as_deref(), Some("b7"));
        assert_eq!(req.brief_text, None);

        form.select_brief(Some(String::new()));
        assert_eq!(form.brief_id, None);
    }

    #[test]
    fn test_freeform_request_wire_shape() {
        let form = WriterForm {
            brief_text: " brief ".into(),
            brand_name: "Rossi Impianti".into(),
            length: ArticleLength::AuthorityGuide,
            creativity: Creativity::new(0.5),
            ..Default::default()
        };
        let json = serde_json::to_value(form.to_request(&creds()).unwrap()).unwrap();
        assert!(json["brief_id"].is_null());
        assert_eq!(json["brief_text"], "brief");
        assert_eq!(json["length"], "Authority guide");
        assert_eq!(json["creativity"], 0.5);
        assert_eq!(json["openai_api_key"], "sk-1");
    }

    #[test]
    fn test_creativity_clamps_and_snaps() {
        assert_eq!(Creativity::default().value(), 0.35);
        assert_eq!(Creativity::new(0.36).value(), 0.35);
        assert_eq!(Creativity::new(0.38).value(), 0.4);
        assert_eq!(Creativity::new(-1.0).value(), 0.0);
        assert_eq!(Creativity::new(7.0).value(), 1.0);
        assert_eq!(Creativity::new(f64::NAN).value(), 0.35);
    }

    #[test]
    fn test_default_length_is_long_form() {
        assert_eq!(ArticleLength::default(), ArticleLength::LongForm);
        for l in ArticleLength::all() {
            assert_eq!(ArticleLength::from_label(l.label()), Some(l));
        }
    }
}
