use contracts::domain::a001_client::aggregate::{ClientForm, ToneOfVoice};
use leptos::prelude::*;

/// One text field of the profile form bound to `form` through `get`/`set`.
#[component]
fn ProfileField(
    form: RwSignal<ClientForm>,
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    get: fn(&ClientForm) -> String,
    set: fn(&mut ClientForm, String),
) -> impl IntoView {
    let value = move || form.with(|f| get(f));
    let on_input = move |ev| {
        let v = event_target_value(&ev);
        form.update(|f| set(f, v));
    };
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            {if multiline {
                view! {
                    <textarea id=id class="form__textarea" rows="3" placeholder=placeholder
                        prop:value=value on:input=on_input />
                }.into_any()
            } else {
                view! {
                    <input type="text" id=id class="form__input" placeholder=placeholder
                        prop:value=value on:input=on_input />
                }.into_any()
            }}
        </div>
    }
}

/// Tone of voice picker. A stored value outside the presets stays selectable.
#[component]
fn ToneOfVoiceField(form: RwSignal<ClientForm>) -> impl IntoView {
    let current = move || form.with(|f| f.tone_of_voice.clone());
    let custom = move || {
        let tone = current();
        (!tone.trim().is_empty() && ToneOfVoice::from_label(&tone).is_none()).then_some(tone)
    };
    view! {
        <div class="form__group">
            <label class="form__label" for="tone_of_voice">"Tono di voce"</label>
            <select
                id="tone_of_voice"
                class="form__select"
                prop:value=current
                on:change=move |ev| {
                    let v = event_target_value(&ev);
                    form.update(|f| f.tone_of_voice = v);
                }
            >
                <option value="">"Non specificato"</option>
                {ToneOfVoice::all()
                    .into_iter()
                    .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                    .collect_view()}
                {move || custom().map(|tone| view! { <option value=tone.clone()>{tone.clone()}</option> })}
            </select>
        </div>
    }
}

/// Editable profile fields shared by the creation form and the detail edit mode.
#[component]
pub fn ClientProfileFields(
    form: RwSignal<ClientForm>,
    /// The creation form shows the URL next to the auto-generate button instead.
    #[prop(optional)]
    hide_url: bool,
) -> impl IntoView {
    view! {
        <div class="client-profile-form" style="display: grid; grid-template-columns: 1fr 1fr; gap: var(--spacing-md);">
            <ProfileField form=form id="name" label="Nome cliente *" placeholder="Es. Rossi Impianti"
                get=|f| f.name.clone() set=|f, v| f.name = v />
            {(!hide_url).then(|| view! {
                <ProfileField form=form id="url" label="Sito web" placeholder="https://..."
                    get=|f| f.url.clone() set=|f, v| f.url = v />
            })}
            <ProfileField form=form id="sector" label="Settore"
                get=|f| f.sector.clone() set=|f, v| f.sector = v />
            <ProfileField form=form id="brand_name" label="Brand"
                get=|f| f.brand_name.clone() set=|f, v| f.brand_name = v />
            <ToneOfVoiceField form=form />
            <ProfileField form=form id="geo" label="Area geografica" placeholder="Es. Milano e provincia"
                get=|f| f.geo.clone() set=|f, v| f.geo = v />
            <ProfileField form=form id="usp" label="USP" multiline=true
                get=|f| f.usp.clone() set=|f, v| f.usp = v />
            <ProfileField form=form id="products_services" label="Prodotti e servizi" multiline=true
                get=|f| f.products_services.clone() set=|f, v| f.products_services = v />
            <ProfileField form=form id="target_audience" label="Target" multiline=true
                get=|f| f.target_audience.clone() set=|f, v| f.target_audience = v />
            <ProfileField form=form id="notes" label="Note" multiline=true
                get=|f| f.notes.clone() set=|f, v| f.notes = v />
        </div>
    }
}
