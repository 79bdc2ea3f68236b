use contracts::domain::a003_brief::aggregate::BriefSummary;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_article_writer::{
    ArticleLength, ArticleWriter, Creativity, WriterForm, ARTICLE_CONTENT_TYPE, ARTICLE_FILE_NAME,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::{generate_article, load_briefs};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::{Alert, PageHeader};
use crate::shared::date_utils::format_date;
use crate::shared::export::download_text;
use crate::shared::http::use_backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::settings::context::use_credentials;
use crate::system::settings::ui::MissingCredentialsBanner;

#[component]
pub fn ArticleWriterPage() -> impl IntoView {
    let backend = StoredValue::new(use_backend());
    let credentials = use_credentials();

    let form = RwSignal::new(WriterForm::default());
    let briefs = RwSignal::new(Vec::<BriefSummary>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (article, set_article) = signal::<Option<String>>(None);
    let (copied, set_copied) = signal(false);

    Effect::new(move |_| {
        let backend = backend.get_value();
        spawn_local(async move {
            match load_briefs(&backend).await {
                Ok(data) => briefs.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let handle_submit = move |_| {
        set_error.set(None);
        set_article.set(None);
        let current = form.get_untracked();
        let creds = credentials.get_untracked();
        let backend = backend.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match generate_article(&backend, &current, &creds).await {
                Ok(text) => set_article.set(Some(text)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let handle_copy = move |_| {
        if let Some(text) = article.get_untracked() {
            copy_to_clipboard_with_callback(&text, move || {
                set_copied.set(true);
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    set_copied.set(false);
                });
            });
        }
    };

    let handle_download = move |_| {
        if let Some(text) = article.get_untracked() {
            if let Err(e) = download_text(&text, ARTICLE_FILE_NAME, ARTICLE_CONTENT_TYPE) {
                set_error.set(Some(e));
            }
        }
    };

    let has_saved_brief = move || form.with(|f| f.brief_id.is_some());

    view! {
        <PageFrame page_id="u502_article_writer--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <PageHeader title=ArticleWriter::display_name() subtitle=ArticleWriter::description()>
                    {()}
                </PageHeader>
            </div>

            <div class="page__content">
                <MissingCredentialsBanner />

                <Card attr:style="max-width: 760px;">
                    <div class="form__group">
                        <Label>"Brief salvato (opzionale)"</Label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.brief_id.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let id = event_target_value(&ev);
                                form.update(|f| f.select_brief(Some(id)));
                            }
                        >
                            <option value="">"Oppure incolla il testo qui sotto"</option>
                            <For
                                each=move || briefs.get()
                                key=|b| b.id.clone()
                                children=|b| {
                                    let label = b.picker_label(format_date);
                                    view! { <option value=b.id.clone()>{label}</option> }
                                }
                            />
                        </select>
                    </div>

                    <Show when=move || !has_saved_brief()>
                        <div class="form__group">
                            <Label>"Brief SEO (testo)"</Label>
                            <textarea
                                class="form__textarea"
                                rows="10"
                                style="font-family: monospace;"
                                placeholder="Incolla qui il brief generato dall'Analisi SEO…"
                                prop:value=move || form.with(|f| f.brief_text.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.brief_text = v);
                                }
                            />
                        </div>
                    </Show>

                    <Flex gap=FlexGap::Medium>
                        <div class="form__group" style="flex: 1;">
                            <Label>"Brand name (opzionale)"</Label>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Es. Rossi Impianti"
                                prop:value=move || form.with(|f| f.brand_name.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.brand_name = v);
                                }
                            />
                        </div>
                        <div class="form__group" style="flex: 1;">
                            <Label>"URL CTA (opzionale)"</Label>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="https://www.cliente.it/contatti"
                                prop:value=move || form.with(|f| f.target_page_url.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| f.target_page_url = v);
                                }
                            />
                        </div>
                    </Flex>

                    <Flex gap=FlexGap::Large align=FlexAlign::Center>
                        <label class="form__label">
                            "Lunghezza: "
                            <select
                                class="form__select"
                                prop:value=move || form.with(|f| f.length.label().to_string())
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    if let Some(length) = ArticleLength::from_label(&v) {
                                        form.update(|f| f.length = length);
                                    }
                                }
                            >
                                {ArticleLength::all()
                                    .into_iter()
                                    .map(|l| view! { <option value=l.label()>{l.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form__label">
                            {move || format!("Creatività: {:.2} ", form.with(|f| f.creativity.value()))}
                            <input
                                type="range"
                                min="0"
                                max="1"
                                step=Creativity::STEP.to_string()
                                prop:value=move || form.with(|f| f.creativity.value().to_string())
                                on:input=move |ev| {
                                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                        form.update(|f| f.creativity = Creativity::new(v));
                                    }
                                }
                            />
                        </label>
                    </Flex>

                    <Alert message=error />

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Generazione in corso…" } else { "Genera articolo" }}
                    </Button>

                    <Show when=move || loading.get()>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center attr:style="margin-top: 12px;">
                            <Spinner />
                            <span>"L'articolo è in scrittura. Può richiedere 30-60 secondi."</span>
                        </Flex>
                    </Show>
                </Card>

                {move || article.get().map(|text| view! {
                    <Card attr:style="margin-top: 16px;">
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3>"Articolo generato"</h3>
                            <Space>
                                <Button appearance=ButtonAppearance::Secondary on_click=handle_copy>
                                    {icon("copy")}
                                    {move || if copied.get() { " Copiato!" } else { " Copia" }}
                                </Button>
                                <Button appearance=ButtonAppearance::Secondary on_click=handle_download>
                                    {icon("download")}
                                    " Scarica .md"
                                </Button>
                            </Space>
                        </Flex>
                        <pre class="result__text" style="white-space: pre-wrap;">{text}</pre>
                    </Card>
                })}
            </div>
        </PageFrame>
    }
}
