use designkit_core::DesignKit;
use designkit_ui::{use_auth_provider, use_design_kit_provider, LoadingProvider};
use dioxus::prelude::*;

use crate::pages::{Dashboard, Login};
use crate::theme::GLOBAL_STYLES;
use crate::Startup;

/// Application routes.
///
/// - `/` - Sign-in form with the demo accounts listed
/// - `/dashboard` - Favorites, content library and the gated admin panel
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Root application component.
///
/// Provides global styles, the kit, the auth session, the loading overlay and routing.
#[component]
pub fn App() -> Element {
    let kit = use_design_kit_provider(|| open_kit(crate::startup()));
    use_auth_provider(kit.authenticator());

    rsx! {
        style { {GLOBAL_STYLES} }
        LoadingProvider {
            Router::<Route> {}
        }
    }
}

/// Open the persistent kit, falling back to an in-memory one if the
/// database cannot be opened.
fn open_kit(startup: Startup) -> DesignKit {
    if startup.ephemeral {
        return DesignKit::ephemeral(startup.config);
    }
    match DesignKit::open(startup.config.clone()) {
        Ok(kit) => kit,
        Err(e) => {
            tracing::error!("Failed to open preference store, using memory: {}", e);
            DesignKit::ephemeral(startup.config)
        }
    }
}
