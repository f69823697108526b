//! Dashboard: favorites, content library, recently visited and the admin panel.

use designkit_core::{ContentCardData, Permission, PermissionGroup, ProjectId};
use designkit_ui::{
    use_auth, use_content_favorites, use_project_favorites, use_recently_visited,
    Badge, BadgeVariant, Button, ButtonVariant, PermissionGate,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::catalog::{self, PROJECTS};
use crate::components::{ContentCard, NavHeader};

/// Recently visited entries shown on the dashboard.
const RECENT_SHOWN: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    use_effect(move || {
        if !auth.is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });

    rsx! {
        NavHeader {}
        main { class: "dashboard",
            ProjectFavoritesPanel {}
            ContentLibrary {}
            RecentlyVisitedPanel {}
            PermissionGate {
                permissions: vec![Permission::ManageUsers],
                fallback: rsx! {
                    section { class: "panel panel-muted",
                        p { "The admin panel needs the manage_users permission." }
                    }
                },
                AdminPanel {}
            }
        }
    }
}

#[component]
fn ProjectFavoritesPanel() -> Element {
    let favorites = use_project_favorites();

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Projects" }
            ul { class: "project-list",
                for (id, name) in PROJECTS.iter().copied() {
                    ProjectRow {
                        key: "{id}",
                        id: ProjectId::new(id),
                        name,
                        is_favorite: favorites.is_favorite(&ProjectId::new(id)),
                        on_toggle: move |pid: ProjectId| favorites.toggle(pid),
                    }
                }
            }
            p { class: "panel-footnote",
                "Favorites: "
                {favorites.ids().iter().map(|id| catalog::project_name(id).to_string()).collect::<Vec<_>>().join(", ")}
            }
        }
    }
}

#[component]
fn ProjectRow(
    id: ProjectId,
    name: &'static str,
    is_favorite: bool,
    on_toggle: EventHandler<ProjectId>,
) -> Element {
    let star = if is_favorite { "\u{2605}" } else { "\u{2606}" };
    let toggled = id.clone();

    rsx! {
        li { class: "project-row",
            span { class: "project-name", "{name}" }
            // Assigned projects only; managers and admins see everything
            PermissionGate {
                project_id: id.clone(),
                fallback: rsx! { Badge { variant: BadgeVariant::Warning, "no access" } },
                Badge { variant: BadgeVariant::Success, "access" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_toggle.call(toggled.clone()),
                "{star}"
            }
        }
    }
}

#[component]
fn ContentLibrary() -> Element {
    let favorites = use_content_favorites();
    let recent = use_recently_visited();
    let mut opened = use_signal(|| None::<ContentCardData>);

    let open = move |card: ContentCardData| {
        recent.add(card.clone());
        opened.set(Some(card));
    };

    let toggle = move |card: ContentCardData| favorites.toggle(&card);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Library" }
            div { class: "content-grid",
                for card in catalog::library() {
                    ContentCard {
                        key: "{card.id}",
                        is_favorite: favorites.is_favorite(&card.id),
                        card: card.clone(),
                        on_open: open,
                        on_toggle_favorite: toggle,
                    }
                }
            }
            if let Some(card) = opened() {
                div { class: "content-preview",
                    h3 { "{card.title}" }
                    if let Some(description) = &card.description {
                        p { "{description}" }
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| opened.set(None),
                        "Close"
                    }
                }
            }
            h3 { class: "panel-subtitle", "Favorite content" }
            ul { class: "favorite-content",
                for item in favorites.items() {
                    li { key: "{item.id}",
                        span { "{item.title}" }
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: {
                                let id = item.id.clone();
                                move |_| favorites.remove(&id)
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentlyVisitedPanel() -> Element {
    let recent = use_recently_visited();
    let items: Vec<_> = recent.items().into_iter().take(RECENT_SHOWN).collect();

    rsx! {
        section { class: "panel",
            header { class: "panel-header",
                h2 { class: "panel-title", "Recently visited" }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: items.is_empty(),
                    onclick: move |_| recent.clear(),
                    "Clear"
                }
            }
            if items.is_empty() {
                p { class: "panel-muted", "Nothing visited yet." }
            }
            ol { class: "recent-list",
                for item in items {
                    li { key: "{item.content.id}",
                        span { "{item.content.title}" }
                        span { class: "recent-time", {item.visited_at.format("%H:%M").to_string()} }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminPanel() -> Element {
    let auth = use_auth();
    let user = auth.user();

    rsx! {
        section { class: "panel panel-admin",
            h2 { class: "panel-title", "Admin" }
            if let Some(user) = user {
                p { "Signed in as {user.email}" }
                ul { class: "permission-list",
                    for permission in user.effective_permissions() {
                        li { key: "{permission}", Badge { "{permission}" } }
                    }
                }
            }
            PermissionGate {
                groups: vec![PermissionGroup::Internal],
                fallback: rsx! { p { class: "panel-muted", "Internal tools are hidden for external groups." } },
                p { "Internal tools are available." }
            }
        }
    }
}
