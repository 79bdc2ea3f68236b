use contracts::shared::api_error::ApiError;
use contracts::shared::credentials::Credentials;
use contracts::usecases::u501_seo_analysis::{AnalyseResponse, AnalysisForm};

use super::api::SeoAnalysisApi;

/// Validate the form against the stored credentials, then start the analysis.
pub async fn run_analysis<A: SeoAnalysisApi + ?Sized>(
    api: &A,
    form: &AnalysisForm,
    credentials: &Credentials,
) -> Result<AnalyseResponse, ApiError> {
    let req = form.to_request(credentials)?;
    log::info!(
        "Starting SEO analysis for '{}' ({} competitors)",
        req.keyword,
        req.max_competitors
    );
    api.analyse(&req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{Call, FakeBackend};
    use contracts::usecases::u501_seo_analysis::{Market, SearchIntent};
    use futures::executor::block_on;

    fn form(keyword: &str) -> AnalysisForm {
        AnalysisForm {
            keyword: keyword.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_serp_key_issues_no_request() {
        let backend = FakeBackend::new();
        let err = block_on(run_analysis(
            &backend,
            &form("impianti elettrici"),
            &Credentials::new("sk-test", ""),
        ))
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("SerpAPI"));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_blank_keyword_issues_no_request() {
        let backend = FakeBackend::new();
        let err = block_on(run_analysis(&backend, &form("  "), &Credentials::new("a", "b")))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_request_carries_form_and_keys() {
        let backend = FakeBackend::new();
        let mut f = form("fotovoltaico milano");
        f.market = Market::Germany;
        f.intent = SearchIntent::Commercial;
        f.max_competitors = 4;
        f.client_id = Some("c1".into());
        let result =
            block_on(run_analysis(&backend, &f, &Credentials::new("sk-test", "serp-test"))).unwrap();
        assert_eq!(result.competitors_analysed, 4);

        let calls = backend.calls();
        let Some(Call::Analyse(req)) = calls.first() else {
            panic!("expected an analyse call, got {calls:?}");
        };
        assert_eq!(req.keyword, "fotovoltaico milano");
        assert_eq!(req.client_id.as_deref(), Some("c1"));
        assert_eq!(req.openai_api_key, "sk-test");
        assert_eq!(req.serp_api_key, "serp-test");
        assert!(req.save_brief);
    }
}
