use contracts::domain::a002_keyword::aggregate::KeywordStatus;
use contracts::domain::a002_keyword::collection::{KeywordCollection, StatusFilter};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_keyword::model::{self, AddOutcome};
use crate::shared::components::{Alert, AlertKind};
use crate::shared::date_utils::format_date_opt;
use crate::shared::export::export_to_csv;
use crate::shared::file_reader::{read_file_as_text, reset_input, selected_file};
use crate::shared::http::HttpBackend;
use crate::shared::icons::icon;

/// Enter in the keyword input adds it, unless a request is already in flight.
fn submits_on_key(key: &str, busy: bool) -> bool {
    key == "Enter" && !busy
}

/// Keyword table of one client with add, import, export, filter and clear.
#[component]
pub fn KeywordsPanel(
    backend: StoredValue<HttpBackend>,
    #[prop(into)] client_id: String,
    #[prop(into)] client_name: Signal<String>,
    keywords: RwSignal<KeywordCollection>,
    /// Reload the client after the server changed the collection.
    on_changed: Callback<()>,
) -> impl IntoView {
    let client_id = StoredValue::new(client_id);
    let new_keyword = RwSignal::new(String::new());
    let filter_code = RwSignal::new(StatusFilter::All.code().to_string());
    let filter = Signal::derive(move || StatusFilter::from_code(&filter_code.get()));
    let counts = Memo::new(move |_| keywords.with(|c| c.counts()));

    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (info, set_info) = signal::<Option<String>>(None);
    let confirm_clear = RwSignal::new(false);

    let reset_messages = move || {
        set_error.set(None);
        set_info.set(None);
    };

    let handle_add = move || {
        reset_messages();
        let input = new_keyword.get_untracked();
        let backend = backend.get_value();
        let id = client_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            match model::add_keyword(&backend, &id, &input).await {
                Ok(AddOutcome::Added) => {
                    new_keyword.set(String::new());
                    on_changed.run(());
                }
                Ok(AddOutcome::Ignored) => {}
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    let handle_delete = move |keyword_id: String| {
        reset_messages();
        let backend = backend.get_value();
        let id = client_id.get_value();
        spawn_local(async move {
            if let Err(e) = model::delete_keyword(&backend, &keywords, &id, &keyword_id).await {
                set_error.set(Some(e.to_string()));
            }
        });
    };

    let handle_status = move |keyword_id: String, code: String| {
        let Some(status) = KeywordStatus::from_code(&code) else {
            return;
        };
        reset_messages();
        let backend = backend.get_value();
        let id = client_id.get_value();
        spawn_local(async move {
            if let Err(e) =
                model::change_status(&backend, &keywords, &id, &keyword_id, status).await
            {
                set_error.set(Some(e.to_string()));
            }
        });
    };

    let handle_clear = move |_| {
        if !confirm_clear.get_untracked() {
            confirm_clear.set(true);
            return;
        }
        reset_messages();
        let backend = backend.get_value();
        let id = client_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            match model::clear_keywords(&backend, &keywords, &id).await {
                Ok(()) => set_info.set(Some("Tutte le keyword sono state eliminate.".to_string())),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            confirm_clear.set(false);
            set_busy.set(false);
        });
    };

    let handle_import = move |ev: ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        reset_input(&ev);
        reset_messages();
        let backend = backend.get_value();
        let id = client_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            let outcome = match read_file_as_text(&file).await {
                Ok(text) => model::import_keywords(&backend, &id, &text)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) => {
                    set_info.set(Some(model::import_summary(&result)));
                    on_changed.run(());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    let handle_export = move |_| {
        reset_messages();
        let rows = keywords.with_untracked(|c| c.filtered(filter.get_untracked()));
        let file_name = model::export_file_name(&client_name.get_untracked());
        if let Err(e) = export_to_csv(&rows, &file_name) {
            set_error.set(Some(e));
        }
    };

    let filter_label = move |f: StatusFilter| {
        let n = counts.get().for_filter(f);
        match f {
            StatusFilter::All => format!("Tutte ({})", n),
            StatusFilter::Only(s) => format!("{} ({})", s.display_name(), n),
        }
    };

    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3>"Keyword"</h3>
                <Badge>{move || counts.get().total.to_string()}</Badge>
            </Flex>

            <Alert message=error />
            <Alert message=info kind=AlertKind::Success />

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1; max-width: 360px;" on:keydown=move |ev: ev::KeyboardEvent| {
                    if submits_on_key(&ev.key(), busy.get_untracked()) {
                        handle_add();
                    }
                }>
                    <Input value=new_keyword placeholder="Nuova keyword" />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_add()
                    disabled=Signal::derive(move || busy.get())
                >
                    {icon("plus")}
                    " Aggiungi"
                </Button>

                <label class="btn btn-secondary" style="cursor: pointer;">
                    {icon("upload")}
                    " Importa CSV"
                    <input
                        type="file"
                        accept=".csv,.txt,text/csv,text/plain"
                        style="display: none;"
                        on:change=handle_import
                        prop:disabled=move || busy.get()
                    />
                </label>

                <Button appearance=ButtonAppearance::Secondary on_click=handle_export>
                    {icon("download")}
                    " Esporta"
                </Button>

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=handle_clear
                    disabled=Signal::derive(move || busy.get() || counts.get().total == 0)
                >
                    {icon("trash")}
                    {move || if confirm_clear.get() { " Conferma eliminazione di tutte" } else { " Svuota" }}
                </Button>
                <Show when=move || confirm_clear.get()>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| confirm_clear.set(false)>
                        "Annulla"
                    </Button>
                </Show>
            </Flex>

            <div class="filter-panel" style="margin-top: 12px;">
                <label class="form__label">"Stato"</label>
                <Select value=filter_code>
                    <option value=StatusFilter::All.code()>{move || filter_label(StatusFilter::All)}</option>
                    {KeywordStatus::ALL
                        .into_iter()
                        .map(|s| {
                            let f = StatusFilter::Only(s);
                            view! { <option value=s.code()>{move || filter_label(f)}</option> }
                        })
                        .collect_view()}
                </Select>
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Keyword"</TableHeaderCell>
                        <TableHeaderCell>"Stato"</TableHeaderCell>
                        <TableHeaderCell>"Aggiunta il"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || keywords.with(|c| c.filtered(filter.get()))
                        key=|k| k.id.clone()
                        children=move |keyword| {
                            let id_for_status = keyword.id.clone();
                            let id_for_value = keyword.id.clone();
                            let id_for_delete = keyword.id.clone();
                            let current_code = move || {
                                keywords.with(|c| {
                                    c.get(&id_for_value)
                                        .map(|k| k.status.code())
                                        .unwrap_or(KeywordStatus::default().code())
                                })
                            };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{keyword.keyword.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <select
                                            class="form__select"
                                            prop:value=current_code
                                            on:change=move |ev| {
                                                handle_status(id_for_status.clone(), event_target_value(&ev))
                                            }
                                        >
                                            {KeywordStatus::ALL
                                                .into_iter()
                                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                                .collect_view()}
                                        </select>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_date_opt(keyword.created_at.as_deref())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id_for_delete.clone())
                                            attr:title="Elimina keyword"
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || counts.get().for_filter(filter.get()) == 0>
                <div class="table__empty">"Nessuna keyword."</div>
            </Show>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_adds_only_when_idle() {
        assert!(submits_on_key("Enter", false));
        assert!(!submits_on_key("Enter", true));
        assert!(!submits_on_key("a", false));
    }
}
