//! Client Details - View Component

use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::view_model::{ClientDetailsVm, LoadState};
use crate::domain::a001_client::ui::profile_form::ClientProfileFields;
use crate::domain::a002_keyword::ui::KeywordsPanel;
use crate::domain::a003_brief::ui::BriefsTable;
use crate::shared::components::{Alert, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::http::use_backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[component]
pub fn ClientDetails(#[prop(into)] id: String) -> impl IntoView {
    let vm = ClientDetailsVm::new(use_backend(), id.clone());
    vm.load();

    let navigate = use_navigate();
    Effect::new(move |_| {
        if vm.deleted.get() {
            navigate("/clients", NavigateOptions::default());
        }
    });

    let on_keywords_changed = Callback::new(move |_: ()| vm.load());
    let client_name =
        Signal::derive(move || vm.client.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default()));
    let briefs = Signal::derive(move || {
        vm.client
            .with(|c| c.as_ref().map(|c| c.briefs.clone()).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="a001_client--detail" category=PAGE_CAT_DETAIL>
            {move || match vm.load_state.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::NotFound => view! {
                    <div class="page__content">
                        <h2>"Cliente non trovato"</h2>
                        <A href="/clients">{icon("arrow-left")}" Torna ai clienti"</A>
                    </div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="page__content">
                        <Alert message=Signal::derive(move || Some(message.clone())) />
                        <A href="/clients">{icon("arrow-left")}" Torna ai clienti"</A>
                    </div>
                }.into_any(),
                LoadState::Loaded => {
                    let id = id.clone();
                    view! {
                        <div class="page__header">
                            <PageHeader
                                title=client_name
                                subtitle=Signal::derive(move || vm.client.with(|c| c.as_ref().and_then(|c| c.sector.clone())))
                            >
                                <DetailActions vm=vm />
                            </PageHeader>
                        </div>
                        <div class="page__content" style="display: grid; gap: var(--spacing-md);">
                            <Alert message=vm.error />
                            {move || if vm.editing.get() {
                                view! {
                                    <Card>
                                        <ClientProfileFields form=vm.form />
                                    </Card>
                                }.into_any()
                            } else {
                                view! { <ProfileSummary client=vm.client /> }.into_any()
                            }}
                            <KeywordsPanel
                                backend=vm.backend
                                client_id=id
                                client_name=client_name
                                keywords=vm.keywords
                                on_changed=on_keywords_changed
                            />
                            <BriefsTable briefs=briefs />
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}

#[component]
fn DetailActions(vm: ClientDetailsVm) -> impl IntoView {
    view! {
        <Space>
            <Show
                when=move || vm.editing.get()
                fallback=move || view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.start_edit()>
                        "Modifica"
                    </Button>
                }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save()
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Salvataggio…" } else { "Salva" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                    "Annulla"
                </Button>
            </Show>

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| vm.delete()
                disabled=Signal::derive(move || vm.deleting.get())
            >
                {icon("trash")}
                {move || if vm.confirm_delete.get() { " Conferma eliminazione" } else { " Elimina" }}
            </Button>
            <Show when=move || vm.confirm_delete.get()>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.disarm_delete()>
                    "Annulla"
                </Button>
            </Show>
        </Space>
    }
}

#[component]
fn ProfileSummary(client: RwSignal<Option<Client>>) -> impl IntoView {
    let row = move |label: &'static str, value: fn(&Client) -> Option<String>| {
        view! {
            <div class="profile__row">
                <span class="profile__label">{label}</span>
                <span class="profile__value">
                    {move || client.with(|c| c.as_ref().and_then(value)).unwrap_or_else(|| "-".to_string())}
                </span>
            </div>
        }
    };

    view! {
        <Card>
            <div class="profile" style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px 24px;">
                {row("Sito web", |c| c.url.clone())}
                {row("Brand", |c| c.brand_name.clone())}
                {row("Tono di voce", |c| c.tone_of_voice.clone())}
                {row("Area geografica", |c| c.geo.clone())}
                {row("USP", |c| c.usp.clone())}
                {row("Prodotti e servizi", |c| c.products_services.clone())}
                {row("Target", |c| c.target_audience.clone())}
                {row("Note", |c| c.notes.clone())}
                {row("Aggiornato il", |c| c.updated_at.as_deref().map(format_datetime))}
            </div>
        </Card>
    }
}
