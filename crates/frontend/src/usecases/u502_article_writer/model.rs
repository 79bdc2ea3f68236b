use contracts::domain::a003_brief::aggregate::BriefSummary;
use contracts::shared::api_error::ApiError;
use contracts::shared::credentials::Credentials;
use contracts::usecases::u502_article_writer::WriterForm;

use super::api::ArticleWriterApi;
use crate::domain::a003_brief::api::BriefApi;

pub const LOAD_BRIEFS_FAILED: &str = "Impossibile caricare i brief salvati.";

pub async fn load_briefs<A: BriefApi + ?Sized>(api: &A) -> Result<Vec<BriefSummary>, ApiError> {
    api.list_briefs()
        .await
        .map_err(|e| e.with_context(LOAD_BRIEFS_FAILED))
}

/// Validate the form, then ask the backend for the article. Returns the markdown text.
pub async fn generate_article<A: ArticleWriterApi + ?Sized>(
    api: &A,
    form: &WriterForm,
    credentials: &Credentials,
) -> Result<String, ApiError> {
    let req = form.to_request(credentials)?;
    log::info!(
        "Generating article ({}, creativity {:.2})",
        req.length.label(),
        req.creativity.value()
    );
    Ok(api.generate_article(&req).await?.article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{Call, FakeBackend};
    use futures::executor::block_on;

    #[test]
    fn test_neither_brief_nor_text_issues_no_request() {
        let backend = FakeBackend::new();
        let err = block_on(generate_article(
            &backend,
            &WriterForm::default(),
            &Credentials::new("sk-test", ""),
        ))
        .unwrap_err();
        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_saved_brief_is_sent_by_id() {
        let backend = FakeBackend::new();
        let mut form = WriterForm {
            brief_text: "testo incollato".into(),
            ..Default::default()
        };
        form.select_brief(Some("b1".into()));
        let article =
            block_on(generate_article(&backend, &form, &Credentials::new("sk-test", ""))).unwrap();
        assert!(!article.is_empty());

        let calls = backend.calls();
        let Some(Call::GenerateArticle(req)) = calls.first() else {
            panic!("expected a generate call, got {calls:?}");
        };
        assert_eq!(req.brief_id.as_deref(), Some("b1"));
        assert_eq!(req.brief_text, None);
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Http {
            status: 502,
            message: "OpenAI timeout".into(),
        });
        let form = WriterForm {
            brief_text: "# Brief".into(),
            ..Default::default()
        };
        let err =
            block_on(generate_article(&backend, &form, &Credentials::new("sk-test", ""))).unwrap_err();
        assert_eq!(err.to_string(), "OpenAI timeout");
    }

    #[test]
    fn test_load_briefs() {
        let backend = FakeBackend::new();
        backend.seed_brief("b1", "impianti elettrici");
        let briefs = block_on(load_briefs(&backend)).unwrap();
        assert_eq!(briefs.len(), 1);
        assert_eq!(briefs[0].keyword, "impianti elettrici");
    }
}
