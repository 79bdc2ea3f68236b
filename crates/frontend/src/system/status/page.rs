use leptos::prelude::*;
use thaw::*;

use super::api::fetch_backend_status;
use crate::shared::components::{Alert, PageHeader};
use crate::shared::http::use_backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Home page: which backend the app talks to and what it answers.
#[component]
pub fn StatusPage() -> impl IntoView {
    let backend = use_backend();
    let base = backend.base().to_string();

    let (status, set_status) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let refresh = StoredValue::new(move || {
        let backend = backend.clone();
        set_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_backend_status(&backend).await {
                Ok(body) => set_status.set(Some(body)),
                Err(e) => {
                    set_status.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    refresh.with_value(|f| f());

    view! {
        <PageFrame page_id="status--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <PageHeader title="Lumi SEO Suite" subtitle=format!("Backend: {}", base)>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh.with_value(|f| f())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("activity")}
                        " Verifica"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <Alert message=error />
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
                {move || status.get().map(|body| view! {
                    <Card>
                        <pre class="status__body">{body}</pre>
                    </Card>
                })}
            </div>
        </PageFrame>
    }
}
