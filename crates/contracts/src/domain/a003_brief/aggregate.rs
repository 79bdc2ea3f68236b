use serde::{Deserialize, Serialize};

/// Generated editorial brief.
///
/// Created by the backend during an SEO analysis and never edited afterwards.
/// Listings may omit the body, hence `content` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefSummary {
    pub id: String,
    pub keyword: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default, alias = "brief_output")]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BriefSummary {
    /// Label used by the brief picker: `keyword · market · date`.
    pub fn picker_label(&self, format_date: impl Fn(&str) -> String) -> String {
        let mut label = format!("{} · {}", self.keyword, self.market);
        if let Some(created) = self.created_at.as_deref() {
            label.push_str(" · ");
            label.push_str(&format_date(created));
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_listing_without_body() {
        let b: BriefSummary = serde_json::from_str(
            r#"{"id":"b1","keyword":"impianti elettrici","market":"🇮🇹 Italia","intent":"Informativo","created_at":"2024-03-15T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(b.content, None);
        assert_eq!(b.client_id, None);
    }

    #[test]
    fn test_picker_label() {
        let b = BriefSummary {
            id: "b1".into(),
            keyword: "seo".into(),
            market: "🇬🇧 UK".into(),
            intent: "Commerciale".into(),
            client_id: None,
            content: None,
            created_at: Some("2024-03-15".into()),
        };
        assert_eq!(b.picker_label(|d| format!("<{d}>")), "seo · 🇬🇧 UK · <2024-03-15>");
    }
}
