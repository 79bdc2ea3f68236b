use crate::domain::a001_client::ui::details::ClientDetails;
use crate::domain::a001_client::ui::list::ClientsListPage;
use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::settings::ui::SettingsPage;
use crate::system::status::StatusPage;
use crate::usecases::u501_seo_analysis::SeoAnalysisPage;
use crate::usecases::u502_article_writer::ArticleWriterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// `/clients/:id`: the detail page is rebuilt whenever the id changes.
#[component]
fn ClientDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    move || view! { <ClientDetails id=id.get() /> }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <h2>"Pagina non trovata"</h2>
                <A href="/clients">"Torna ai clienti"</A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=StatusPage />
                    <Route path=path!("/clients") view=ClientsListPage />
                    <Route path=path!("/clients/:id") view=ClientDetailsRoute />
                    <Route path=path!("/seo") view=SeoAnalysisPage />
                    <Route path=path!("/writer") view=ArticleWriterPage />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
