//! Content card with a favorite toggle.

use designkit_core::ContentCardData;
use designkit_ui::{Badge, BadgeVariant, Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn ContentCard(
    card: ContentCardData,
    is_favorite: bool,
    on_open: EventHandler<ContentCardData>,
    on_toggle_favorite: EventHandler<ContentCardData>,
) -> Element {
    let star = if is_favorite { "\u{2605}" } else { "\u{2606}" };
    let open_card = card.clone();
    let fav_card = card.clone();

    rsx! {
        article { class: "content-card",
            header { class: "content-card-header",
                h3 { class: "content-card-title", "{card.title}" }
                if let Some(category) = &card.category {
                    Badge { variant: BadgeVariant::Info, "{category}" }
                }
            }
            if let Some(description) = &card.description {
                p { class: "content-card-description", "{description}" }
            }
            footer { class: "content-card-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_open.call(open_card.clone()),
                    "Open"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "favorite-toggle",
                    onclick: move |_| on_toggle_favorite.call(fav_card.clone()),
                    "{star}"
                }
            }
        }
    }
}
