use contracts::shared::credentials::Credentials;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{Alert, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::settings::context::use_credentials;

/// How long the save button shows its confirmation.
const SAVED_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let credentials = use_credentials();
    let current = credentials.get_untracked();

    let openai_key = RwSignal::new(current.openai_key);
    let serp_key = RwSignal::new(current.serp_key);
    let (saved, set_saved) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_save = move |_| {
        set_error.set(None);
        let draft = Credentials::new(openai_key.get_untracked(), serp_key.get_untracked());
        match credentials.save(draft) {
            Ok(()) => {
                set_saved.set(true);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SAVED_FEEDBACK_MS).await;
                    set_saved.set(false);
                });
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <PageHeader
                    title="Impostazioni"
                    subtitle="Le chiavi API restano nel browser e vengono inviate al backend solo con le richieste che le usano."
                >
                    {()}
                </PageHeader>
            </div>

            <div class="page__content">
                <Alert message=error />
                <Card attr:style="max-width: 560px;">
                    <div class="form__group">
                        <Label>"OpenAI API key"</Label>
                        <Input value=openai_key input_type=InputType::Password placeholder="sk-..." />
                    </div>

                    <div class="form__group">
                        <Label>"SerpAPI key"</Label>
                        <Input value=serp_key input_type=InputType::Password placeholder="SerpAPI key" />
                    </div>

                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        {move || if saved.get() { "Salvato!" } else { "Salva chiavi" }}
                    </Button>
                </Card>
            </div>
        </PageFrame>
    }
}
