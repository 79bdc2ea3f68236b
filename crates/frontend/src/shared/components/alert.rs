use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Warning,
}

impl AlertKind {
    fn palette(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AlertKind::Error => (
                "var(--color-error-50)",
                "var(--color-error-100)",
                "var(--color-error)",
            ),
            AlertKind::Success => (
                "var(--color-success-50)",
                "var(--color-success-100)",
                "var(--color-success)",
            ),
            AlertKind::Warning => (
                "var(--color-warning-50)",
                "var(--color-warning-100)",
                "var(--color-warning)",
            ),
        }
    }
}

/// Inline message box. Renders nothing while `message` is `None`.
#[component]
pub fn Alert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] kind: Option<AlertKind>,
) -> impl IntoView {
    let (bg, border, color) = kind.unwrap_or(AlertKind::Error).palette();
    move || {
        message.get().map(|text| {
            view! {
                <div
                    class="alert"
                    role="alert"
                    style=format!(
                        "padding: 12px; margin-bottom: 16px; background: {}; border: 1px solid {}; border-radius: 8px;",
                        bg,
                        border,
                    )
                >
                    <span style=format!("color: {};", color)>{text}</span>
                </div>
            }
        })
    }
}
