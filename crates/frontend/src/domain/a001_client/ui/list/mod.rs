mod state;

use contracts::domain::a001_client::aggregate::ClientForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use super::profile_form::ClientProfileFields;
use crate::domain::a001_client::model;
use crate::shared::components::{Alert, PageHeader};
use crate::shared::date_utils::format_date_opt;
use crate::shared::http::use_backend;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::settings::context::use_credentials;
use state::create_state;

#[component]
pub fn ClientsListPage() -> impl IntoView {
    let backend = StoredValue::new(use_backend());
    let credentials = use_credentials();
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let (show_create_form, set_show_create_form) = signal(false);
    let form = RwSignal::new(ClientForm::default());
    let (creating, set_creating) = signal(false);
    let (generating, set_generating) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let backend = backend.get_value();
        spawn_local(async move {
            match model::list_clients(&backend).await {
                Ok(data) => state.update(|s| {
                    s.all = data;
                    s.is_loaded = true;
                }),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.search_query = query);
    });

    let handle_create = move |_| {
        set_form_error.set(None);
        let current = form.get_untracked();
        let backend = backend.get_value();
        set_creating.set(true);
        spawn_local(async move {
            match model::create_client(&backend, &current).await {
                Ok(()) => {
                    form.set(ClientForm::default());
                    set_show_create_form.set(false);
                    load_data();
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
            set_creating.set(false);
        });
    };

    let handle_auto_generate = move |_| {
        set_form_error.set(None);
        let url = form.with_untracked(|f| f.url.clone());
        let creds = credentials.get_untracked();
        let backend = backend.get_value();
        set_generating.set(true);
        spawn_local(async move {
            match model::auto_generate_profile(&backend, &url, &creds).await {
                Ok(draft) => form.update(|f| f.apply_draft(&draft)),
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
            set_generating.set(false);
        });
    };

    let url_value = move || form.with(|f| f.url.clone());
    let busy = Signal::derive(move || creating.get() || generating.get());

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Clienti" subtitle="Anagrafica dei clienti e delle loro keyword">
                    <Badge>
                        {move || state.with(|s| format!("{} / {}", s.visible().len(), s.all.len()))}
                    </Badge>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.update(|v| *v = !*v)
                    >
                        {icon("plus")}
                        {move || if show_create_form.get() { " Chiudi" } else { " Nuovo cliente" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Caricamento…" } else { "Aggiorna" }}
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <Alert message=error />

                <Show when=move || show_create_form.get()>
                    <Card attr:style="margin-bottom: 16px;">
                        <h3>"Nuovo cliente"</h3>
                        <Alert message=form_error />

                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group" style="flex: 1;">
                                <label class="form__label" for="new_client_url">"Sito web"</label>
                                <input
                                    type="text"
                                    id="new_client_url"
                                    class="form__input"
                                    placeholder="https://www.cliente.it"
                                    prop:value=url_value
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        form.update(|f| f.url = v);
                                    }
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=handle_auto_generate
                                disabled=busy
                            >
                                {icon("sparkles")}
                                {move || if generating.get() { " Analisi del sito…" } else { " Compila con AI" }}
                            </Button>
                        </Flex>

                        <ClientProfileFields form=form hide_url=true />

                        <Space>
                            <Button appearance=ButtonAppearance::Primary on_click=handle_create disabled=busy>
                                {move || if creating.get() { "Creazione…" } else { "Crea cliente" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    form.set(ClientForm::default());
                                    set_form_error.set(None);
                                    set_show_create_form.set(false);
                                }
                            >
                                "Annulla"
                            </Button>
                        </Space>
                    </Card>
                </Show>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {icon("search")}
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search_signal placeholder="Cerca per nome o settore..." />
                        </div>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"Settore"</TableHeaderCell>
                                <TableHeaderCell>"Sito"</TableHeaderCell>
                                <TableHeaderCell>"Creato il"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible())
                                key=|c| c.id.clone()
                                children=move |client| {
                                    let href = format!("/clients/{}", client.id);
                                    let created = format_date_opt(client.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=href>
                                                        <span style="font-weight: 500;">{client.name.clone()}</span>
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {client.sector.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {client.url.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.visible().is_empty())>
                        <div class="table__empty">"Nessun cliente trovato."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
