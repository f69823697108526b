//! Top bar with the signed-in user and a sign-out button.

use designkit_ui::{use_auth, Badge, BadgeVariant, Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NavHeader() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let sign_out = move |_| {
        auth.logout();
        navigator.replace(Route::Login {});
    };

    rsx! {
        header { class: "nav-header",
            span { class: "nav-title", "designkit" }
            if let Some(user) = auth.user() {
                div { class: "nav-user",
                    span { class: "nav-user-name", "{user.display_name}" }
                    Badge { variant: BadgeVariant::Neutral, "{user.permission_level}" }
                    Badge { variant: BadgeVariant::Info, "{user.permission_group}" }
                    Button { variant: ButtonVariant::Link, onclick: sign_out, "Sign out" }
                }
            }
        }
    }
}
