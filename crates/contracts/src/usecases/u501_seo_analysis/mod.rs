pub mod request;
pub mod response;

pub use request::{AnalyseRequest, AnalysisForm, Market, SearchIntent, COMPETITOR_CHOICES};
pub use response::AnalyseResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SeoAnalysis;

impl UseCaseMetadata for SeoAnalysis {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "seo_analysis"
    }

    fn display_name() -> &'static str {
        "Analisi SEO"
    }

    fn description() -> &'static str {
        "Genera un brief editoriale analizzando SERP e competitor."
    }
}
