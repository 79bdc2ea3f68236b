use serde::{Deserialize, Serialize};

/// Third-party API keys supplied by the user.
///
/// Kept only in the browser; they travel to the backend solely as explicit fields of the
/// requests that need them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub openai_key: String,
    pub serp_key: String,
}

impl Credentials {
    pub fn new(openai_key: impl Into<String>, serp_key: impl Into<String>) -> Self {
        Self {
            openai_key: openai_key.into(),
            serp_key: serp_key.into(),
        }
    }

    pub fn has_openai(&self) -> bool {
        !self.openai_key.trim().is_empty()
    }

    pub fn has_serp(&self) -> bool {
        !self.serp_key.trim().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.has_openai() && self.has_serp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keys_count_as_missing() {
        let c = Credentials::new("  ", "serp");
        assert!(!c.has_openai());
        assert!(c.has_serp());
        assert!(!c.is_complete());
        assert!(Credentials::new("sk-1", "serp").is_complete());
    }
}
