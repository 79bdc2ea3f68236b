use contracts::domain::a001_client::aggregate::ClientSummary;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_seo_analysis::request::DEFAULT_COMPETITORS;
use contracts::usecases::u501_seo_analysis::{
    AnalyseResponse, AnalysisForm, Market, SearchIntent, SeoAnalysis, COMPETITOR_CHOICES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::run_analysis;
use crate::domain::a001_client::model::list_clients;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::{Alert, PageHeader};
use crate::shared::http::use_backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::settings::context::use_credentials;
use crate::system::settings::ui::MissingCredentialsBanner;

#[component]
pub fn SeoAnalysisPage() -> impl IntoView {
    let backend = StoredValue::new(use_backend());
    let credentials = use_credentials();

    let keyword = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let market = RwSignal::new(Market::default().label().to_string());
    let intent = RwSignal::new(SearchIntent::default().label().to_string());
    let competitors = RwSignal::new(DEFAULT_COMPETITORS.to_string());
    let include_schema = RwSignal::new(true);

    let clients = RwSignal::new(Vec::<ClientSummary>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (result, set_result) = signal::<Option<AnalyseResponse>>(None);
    let (copied, set_copied) = signal(false);

    // Client list for the optional association
    Effect::new(move |_| {
        let backend = backend.get_value();
        spawn_local(async move {
            match list_clients(&backend).await {
                Ok(data) => clients.set(data),
                Err(e) => log::warn!("Client list unavailable: {}", e),
            }
        });
    });

    let collect_form = move || AnalysisForm {
        keyword: keyword.get_untracked(),
        client_id: Some(client_id.get_untracked()).filter(|id| !id.is_empty()),
        market: Market::from_label(&market.get_untracked()).unwrap_or_default(),
        intent: SearchIntent::from_label(&intent.get_untracked()).unwrap_or_default(),
        max_competitors: competitors
            .get_untracked()
            .parse()
            .unwrap_or(DEFAULT_COMPETITORS),
        include_schema: include_schema.get_untracked(),
    };

    let handle_submit = move |_| {
        set_error.set(None);
        set_result.set(None);
        let form = collect_form();
        let creds = credentials.get_untracked();
        let backend = backend.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match run_analysis(&backend, &form, &creds).await {
                Ok(response) => set_result.set(Some(response)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let handle_copy = move |_| {
        if let Some(r) = result.get_untracked() {
            copy_to_clipboard_with_callback(&r.brief_output, move || {
                set_copied.set(true);
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    set_copied.set(false);
                });
            });
        }
    };

    view! {
        <PageFrame page_id="u501_seo_analysis--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <PageHeader title=SeoAnalysis::display_name() subtitle=SeoAnalysis::description()>
                    {()}
                </PageHeader>
            </div>

            <div class="page__content">
                <MissingCredentialsBanner needs_serp=true />
                <Alert message=error />

                <Card attr:style="max-width: 760px;">
                    <div class="form__group">
                        <Label>"Keyword principale *"</Label>
                        <Input value=keyword placeholder="Es. impianti fotovoltaici milano" />
                    </div>

                    <div class="form__group">
                        <Label>"Cliente (opzionale)"</Label>
                        <Select value=client_id>
                            <option value="">"Nessun cliente"</option>
                            <For
                                each=move || clients.get()
                                key=|c| c.id.clone()
                                children=|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                            />
                        </Select>
                    </div>

                    <Flex gap=FlexGap::Medium>
                        <div class="form__group" style="flex: 1;">
                            <Label>"Mercato"</Label>
                            <Select value=market>
                                {Market::all()
                                    .into_iter()
                                    .map(|m| view! { <option value=m.label()>{m.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="form__group" style="flex: 1;">
                            <Label>"Intento di ricerca"</Label>
                            <Select value=intent>
                                {SearchIntent::all()
                                    .into_iter()
                                    .map(|i| view! { <option value=i.label()>{i.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="form__group" style="flex: 1;">
                            <Label>"Competitor da analizzare"</Label>
                            <Select value=competitors>
                                {COMPETITOR_CHOICES
                                    .into_iter()
                                    .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                    </Flex>

                    <div class="form__group">
                        <Checkbox checked=include_schema label="Estrai dati strutturati (schema.org) dai competitor" />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("search")}
                        {move || if loading.get() { " Analisi in corso…" } else { " Avvia analisi" }}
                    </Button>

                    <Show when=move || loading.get()>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center attr:style="margin-top: 12px;">
                            <Spinner />
                            <span>"Recupero SERP, analisi dei competitor e stesura del brief. Può richiedere qualche minuto."</span>
                        </Flex>
                    </Show>
                </Card>

                {move || result.get().map(|r| view! {
                    <Card attr:style="margin-top: 16px;">
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3>"Brief SEO"</h3>
                            <Space>
                                <Badge>{format!("{} competitor analizzati", r.competitors_analysed)}</Badge>
                                <Button appearance=ButtonAppearance::Secondary on_click=handle_copy>
                                    {icon("copy")}
                                    {move || if copied.get() { " Copiato!" } else { " Copia" }}
                                </Button>
                            </Space>
                        </Flex>
                        <pre class="result__text" style="white-space: pre-wrap;">{r.brief_output.clone()}</pre>
                    </Card>
                })}
            </div>
        </PageFrame>
    }
}
