use serde::{Deserialize, Serialize};

use crate::domain::a002_keyword::aggregate::Keyword;
use crate::domain::a003_brief::aggregate::BriefSummary;
use crate::shared::api_error::ApiError;
use crate::shared::serde_utils::{blank_to_none, null_as_default};

// ============================================================================
// Read models
// ============================================================================

/// Row of the client directory (`GET /api/clients`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Full client profile with its keyword and brief collections (`GET /api/clients/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub tone_of_voice: Option<String>,
    #[serde(default)]
    pub usp: Option<String>,
    #[serde(default)]
    pub products_services: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub geo: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, alias = "keywords", deserialize_with = "null_as_default")]
    pub keyword_history: Vec<Keyword>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub briefs: Vec<BriefSummary>,
}

impl Client {
    /// Overwrite the profile attributes with a saved payload, keeping id and collections.
    pub fn apply_dto(&mut self, dto: &ClientDto) {
        self.name = dto.name.clone();
        self.url = dto.url.clone();
        self.sector = dto.sector.clone();
        self.brand_name = dto.brand_name.clone();
        self.tone_of_voice = dto.tone_of_voice.clone();
        self.usp = dto.usp.clone();
        self.products_services = dto.products_services.clone();
        self.target_audience = dto.target_audience.clone();
        self.geo = dto.geo.clone();
        self.notes = dto.notes.clone();
    }
}

// ============================================================================
// Write models
// ============================================================================

/// Full profile payload for `POST /api/clients` and `PUT /api/clients/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    pub name: String,
    pub url: Option<String>,
    pub sector: Option<String>,
    pub brand_name: Option<String>,
    pub tone_of_voice: Option<String>,
    pub usp: Option<String>,
    pub products_services: Option<String>,
    pub target_audience: Option<String>,
    pub geo: Option<String>,
    pub notes: Option<String>,
}

/// Editable profile as the forms hold it: every field is plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub url: String,
    pub sector: String,
    pub brand_name: String,
    pub tone_of_voice: String,
    pub usp: String,
    pub products_services: String,
    pub target_audience: String,
    pub geo: String,
    pub notes: String,
}

impl ClientForm {
    /// Check the form and build the wire payload.
    ///
    /// The name is the only required field.
    pub fn validate(&self) -> Result<ClientDto, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Il nome del cliente è obbligatorio."));
        }
        Ok(ClientDto {
            name: name.to_string(),
            url: blank_to_none(&self.url),
            sector: blank_to_none(&self.sector),
            brand_name: blank_to_none(&self.brand_name),
            tone_of_voice: blank_to_none(&self.tone_of_voice),
            usp: blank_to_none(&self.usp),
            products_services: blank_to_none(&self.products_services),
            target_audience: blank_to_none(&self.target_audience),
            geo: blank_to_none(&self.geo),
            notes: blank_to_none(&self.notes),
        })
    }

    /// Merge an auto-generated draft into the form.
    ///
    /// Fields the draft leaves empty keep their current value and the URL typed by the
    /// user is never replaced.
    pub fn apply_draft(&mut self, draft: &ClientProfileDraft) {
        fn merge(target: &mut String, value: &Option<String>) {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *target = v.to_string();
            }
        }
        merge(&mut self.name, &draft.name);
        merge(&mut self.sector, &draft.sector);
        merge(&mut self.brand_name, &draft.brand_name);
        merge(&mut self.tone_of_voice, &draft.tone_of_voice);
        merge(&mut self.usp, &draft.usp);
        merge(&mut self.products_services, &draft.products_services);
        merge(&mut self.target_audience, &draft.target_audience);
        merge(&mut self.geo, &draft.geo);
        merge(&mut self.notes, &draft.notes);
        if self.url.trim().is_empty() {
            merge(&mut self.url, &draft.url);
        }
    }
}

impl From<&Client> for ClientForm {
    fn from(c: &Client) -> Self {
        Self {
            name: c.name.clone(),
            url: c.url.clone().unwrap_or_default(),
            sector: c.sector.clone().unwrap_or_default(),
            brand_name: c.brand_name.clone().unwrap_or_default(),
            tone_of_voice: c.tone_of_voice.clone().unwrap_or_default(),
            usp: c.usp.clone().unwrap_or_default(),
            products_services: c.products_services.clone().unwrap_or_default(),
            target_audience: c.target_audience.clone().unwrap_or_default(),
            geo: c.geo.clone().unwrap_or_default(),
            notes: c.notes.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Auto-generation
// ============================================================================

/// Payload of `POST /api/clients/auto-generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoGenerateRequest {
    pub url: String,
    pub openai_api_key: String,
}

/// Partial profile inferred by the backend from the client's website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfileDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub tone_of_voice: Option<String>,
    #[serde(default)]
    pub usp: Option<String>,
    #[serde(default)]
    pub products_services: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub geo: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// ============================================================================
// Tone of voice
// ============================================================================

/// Tone-of-voice presets offered by the profile form.
///
/// Stored on the wire as the Italian label; a stored value outside this list is kept
/// as-is and shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneOfVoice {
    Professional,
    Friendly,
    Authoritative,
    Technical,
    Inspirational,
}

impl ToneOfVoice {
    pub fn label(&self) -> &'static str {
        match self {
            ToneOfVoice::Professional => "Professionale",
            ToneOfVoice::Friendly => "Amichevole",
            ToneOfVoice::Authoritative => "Autorevole",
            ToneOfVoice::Technical => "Tecnico",
            ToneOfVoice::Inspirational => "Ispirazionale",
        }
    }

    pub fn all() -> Vec<ToneOfVoice> {
        vec![
            ToneOfVoice::Professional,
            ToneOfVoice::Friendly,
            ToneOfVoice::Authoritative,
            ToneOfVoice::Technical,
            ToneOfVoice::Inspirational,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }
}
