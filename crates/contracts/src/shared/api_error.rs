use serde::Deserialize;
use thiserror::Error;

/// Message shown for any transport-level failure (backend unreachable, CORS, DNS...).
pub const NETWORK_ERROR_MESSAGE: &str = "Errore di rete: impossibile contattare il backend.";

/// Error of a single frontend -> backend interaction.
///
/// Every variant is terminal for the action that produced it: nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A client-side check failed; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The request never produced an HTTP response.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 404 on a single-resource fetch.
    #[error("Risorsa non trovata")]
    NotFound,

    /// The response body did not match the expected shape.
    #[error("Risposta non valida dal backend: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Build an `Http` error from a non-success response body.
    ///
    /// The backend reports failures as `{"detail": ...}` where `detail` is either a plain
    /// string or a list of `{"msg": ...}` validation entries. Anything else falls back to
    /// `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| fallback.to_string());
        Self::Http { status, message }
    }

    /// Replace the message of an `Http`/`Network`/`Decode` error with a fixed one while
    /// keeping backend-provided details. Validation errors pass through untouched.
    pub fn with_context(self, generic: &str) -> Self {
        match self {
            Self::Validation(_) => self,
            Self::Http { status, message } if message == generic => Self::Http { status, message },
            Self::Http { status, message } => Self::Http {
                status,
                message: format!("{generic} ({message})"),
            },
            other => Self::Http {
                status: 0,
                message: format!("{generic} ({other})"),
            },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .map(str::to_string),
        _ => None,
    }
}
