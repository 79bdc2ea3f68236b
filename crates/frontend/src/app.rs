use crate::routes::routes::AppRoutes;
use crate::shared::http::{provide_backend, HttpBackend};
use crate::system::settings::context::provide_credentials;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Keys are read from localStorage once; pages observe the shared signal.
    provide_credentials();
    provide_backend(HttpBackend::from_env());

    view! {
        <AppRoutes />
    }
}
