//! Sidebar navigation with collapsible groups.

use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_seo_analysis::SeoAnalysis;
use contracts::usecases::u502_article_writer::ArticleWriter;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "work",
            label: "Lavoro",
            icon: "sparkles",
            items: vec![
                ("/clients", "Clienti", "clients"),
                ("/seo", SeoAnalysis::display_name(), "search"),
                ("/writer", ArticleWriter::display_name(), "writer"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "Sistema",
            icon: "settings",
            items: vec![
                ("/", "Stato backend", "activity"),
                ("/settings", "Impostazioni", "settings"),
            ],
        },
    ]
}

/// Whether the current `path` belongs to the menu entry `href`.
///
/// `/` only matches itself; other entries also match their sub-routes
/// (`/clients/c1` keeps "Clienti" highlighted).
fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href
        || path
            .strip_prefix(href)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let gid_click = group.id.to_string();
                let gid_exp = group.id.to_string();
                let gid_show = group.id.to_string();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(href, label, icon_name)| {
                                    view! {
                                        <A href=href attr:class="app-sidebar__link">
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, href))
                                                style:padding-left="10px"
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/clients", "/"));
    }

    #[test]
    fn test_detail_route_keeps_parent_active() {
        assert!(is_active("/clients", "/clients"));
        assert!(is_active("/clients/c1", "/clients"));
        assert!(!is_active("/clientsx", "/clients"));
        assert!(!is_active("/seo", "/clients"));
    }

    #[test]
    fn test_every_route_is_listed_once() {
        let hrefs: Vec<_> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(href, _, _)| href))
            .collect();
        let mut unique = hrefs.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(hrefs.len(), unique.len());
        assert_eq!(hrefs.len(), 5);
    }
}
