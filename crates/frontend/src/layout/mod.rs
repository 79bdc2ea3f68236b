pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader left_open=left_open />

            <div class="app-body">
                <left::Left open=left_open>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
