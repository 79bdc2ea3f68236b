//! Top bar: sidebar toggle, product name and a shortcut to the settings.

use crate::shared::icons::icon;
use crate::system::settings::context::use_credentials;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader(left_open: RwSignal<bool>) -> impl IntoView {
    let credentials = use_credentials();

    let toggle_sidebar = move |_| left_open.update(|open| *open = !*open);
    let keys_configured = move || credentials.get().is_complete();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if left_open.get() { "Nascondi navigazione" } else { "Mostra navigazione" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Lumi SEO Suite"</span>
            </div>

            <div class="top-header__actions">
                <A href="/settings" attr:class="top-header__icon-btn" attr:title="Impostazioni">
                    {icon("settings")}
                    <span class:top-header__dot--warning=move || !keys_configured()></span>
                </A>
            </div>
        </div>
    }
}
