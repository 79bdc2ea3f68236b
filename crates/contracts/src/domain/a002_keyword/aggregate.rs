use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// Editorial pipeline stage of a keyword.
///
/// The order below is the usual progression, but any status may be set directly:
/// moving a published keyword back to backlog is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordStatus {
    #[default]
    Backlog,
    Planned,
    BriefDone,
    Written,
    Published,
}

impl KeywordStatus {
    pub const ALL: [KeywordStatus; 5] = [
        KeywordStatus::Backlog,
        KeywordStatus::Planned,
        KeywordStatus::BriefDone,
        KeywordStatus::Written,
        KeywordStatus::Published,
    ];

    /// Wire code, e.g. `brief_done`
    pub fn code(&self) -> &'static str {
        match self {
            KeywordStatus::Backlog => "backlog",
            KeywordStatus::Planned => "planned",
            KeywordStatus::BriefDone => "brief_done",
            KeywordStatus::Written => "written",
            KeywordStatus::Published => "published",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KeywordStatus::Backlog => "Backlog",
            KeywordStatus::Planned => "Pianificata",
            KeywordStatus::BriefDone => "Brief pronto",
            KeywordStatus::Written => "Scritta",
            KeywordStatus::Published => "Pubblicata",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Position in `ALL`, used for per-status counters.
    pub fn index(&self) -> usize {
        match self {
            KeywordStatus::Backlog => 0,
            KeywordStatus::Planned => 1,
            KeywordStatus::BriefDone => 2,
            KeywordStatus::Written => 3,
            KeywordStatus::Published => 4,
        }
    }
}

/// Keyword tracked for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: String,
    pub keyword: String,
    /// Absent or `null` on the wire means `Backlog`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: KeywordStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/clients/{id}/keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddKeywordRequest {
    pub keyword: String,
}

/// Body of `PATCH /api/clients/{id}/keywords/{kwId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateKeywordStatusRequest {
    pub status: KeywordStatus,
}

/// Body of `POST /api/clients/{id}/keywords/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkKeywordsRequest {
    pub keywords: Vec<String>,
}

/// Outcome of a bulk import: how many were inserted and how many were already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkKeywordsResponse {
    #[serde(default)]
    pub added: usize,
    #[serde(default)]
    pub skipped: usize,
}
