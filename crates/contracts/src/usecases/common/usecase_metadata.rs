/// Identification of a UseCase, shared by its page header and the sidebar.
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "seo_analysis"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI, e.g. "Analisi SEO"
    fn display_name() -> &'static str;

    /// One-line description shown under the page title
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_seo_analysis"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
