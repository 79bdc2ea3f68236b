use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::settings::context::use_credentials;

/// Warning shown by pages that need API keys the user has not configured yet.
#[component]
pub fn MissingCredentialsBanner(
    /// Whether the page also needs the SerpAPI key.
    #[prop(optional)]
    needs_serp: bool,
) -> impl IntoView {
    let credentials = use_credentials();
    let missing = move || {
        let c = credentials.get();
        let mut names = Vec::new();
        if !c.has_openai() {
            names.push("OpenAI");
        }
        if needs_serp && !c.has_serp() {
            names.push("SerpAPI");
        }
        names
    };

    view! {
        <Show when=move || !missing().is_empty()>
            <div
                class="alert alert--warning"
                style="padding: 12px; margin-bottom: 16px; background: var(--color-warning-50); border: 1px solid var(--color-warning-100); border-radius: 8px;"
            >
                {icon("alert")}
                <span>{move || format!(" Chiavi mancanti: {}. ", missing().join(", "))}</span>
                <A href="/settings">"Configurale nelle Impostazioni"</A>
            </div>
        </Show>
    }
}
