//! Loading Provider and Overlay
//!
//! `LoadingProvider` owns one [`LoadingState`] for its subtree and mounts a
//! full-viewport [`LoadingOverlay`] that mirrors it. Descendants reach the
//! state through [`use_loading`].
//!
//! ```rust,ignore
//! rsx! {
//!     LoadingProvider {
//!         SaveButton {}
//!     }
//! }
//!
//! #[component]
//! fn SaveButton() -> Element {
//!     let loading = use_loading();
//!     rsx! {
//!         Button {
//!             onclick: move |_| loading.show("Saving..."),
//!             "Save"
//!         }
//!     }
//! }
//! ```

use designkit_core::{KitError, KitResult, LoadingState};
use dioxus::prelude::*;

/// Handle injected by [`LoadingProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingContext {
    state: Signal<LoadingState>,
}

impl LoadingContext {
    /// Show the overlay. Replaces any message already shown.
    pub fn show_loading(&self, message: Option<String>) {
        let mut state = self.state;
        state.write().show(message);
    }

    pub fn show(&self, message: impl Into<String>) {
        self.show_loading(Some(message.into()));
    }

    pub fn hide_loading(&self) {
        let mut state = self.state;
        state.write().hide();
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().visible
    }

    pub fn state(&self) -> LoadingState {
        self.state.read().clone()
    }
}

/// The loading handle from the nearest [`LoadingProvider`].
///
/// # Panics
///
/// Panics during render when called outside a `LoadingProvider`; that is a
/// wiring mistake, not a runtime condition.
pub fn use_loading() -> LoadingContext {
    match try_use_loading() {
        Ok(ctx) => ctx,
        Err(e) => panic!("use_loading must be called inside a LoadingProvider ({})", e),
    }
}

/// Like [`use_loading`], but reports a missing provider as an error.
pub fn try_use_loading() -> KitResult<LoadingContext> {
    try_use_context::<LoadingContext>().ok_or(KitError::MissingProvider("LoadingProvider"))
}

#[component]
pub fn LoadingProvider(children: Element) -> Element {
    let state = use_signal(LoadingState::default);
    use_context_provider(|| LoadingContext { state });

    rsx! {
        {children}
        LoadingOverlay {}
    }
}

/// Full-viewport overlay. Renders nothing while hidden.
#[component]
pub fn LoadingOverlay() -> Element {
    let loading = use_loading();
    let state = loading.state();

    if !state.visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "loading-overlay",
            role: "status",
            "aria-live": "polite",
            div { class: "loading-spinner" }
            if let Some(message) = state.message {
                p { class: "loading-message", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Option<LoadingState>> = const { RefCell::new(None) };
        static MISSING: RefCell<Option<bool>> = const { RefCell::new(None) };
        static ORPHAN_PANIC: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    #[component]
    fn ShowTwice() -> Element {
        let loading = use_loading();
        use_hook(move || {
            loading.show("A");
            loading.show("B");
        });
        SEEN.with(|s| *s.borrow_mut() = Some(loading.state.peek().clone()));
        rsx! {}
    }

    #[component]
    fn ProviderHarness() -> Element {
        rsx! {
            LoadingProvider { ShowTwice {} }
        }
    }

    // Renders are wrapped in catch_unwind by the VirtualDom, so the panic is
    // caught here and its message recorded.
    #[component]
    fn Orphan() -> Element {
        let outcome = std::panic::catch_unwind(use_loading);
        let message = match outcome {
            Ok(_) => String::new(),
            Err(payload) => payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
                .unwrap_or_default(),
        };
        ORPHAN_PANIC.with(|p| *p.borrow_mut() = Some(message));
        rsx! {}
    }

    #[component]
    fn OrphanTry() -> Element {
        let result = try_use_loading();
        MISSING.with(|m| *m.borrow_mut() = Some(matches!(result, Err(KitError::MissingProvider(_)))));
        rsx! {}
    }

    #[test]
    fn latest_message_wins() {
        let mut dom = VirtualDom::new(ProviderHarness);
        dom.rebuild_in_place();
        let seen = SEEN.with(|s| s.borrow().clone()).unwrap();
        assert!(seen.visible);
        assert_eq!(seen.message.as_deref(), Some("B"));
    }

    #[test]
    fn use_loading_outside_provider_panics() {
        let mut dom = VirtualDom::new(Orphan);
        dom.rebuild_in_place();
        let message = ORPHAN_PANIC.with(|p| p.borrow().clone()).unwrap();
        assert!(message.contains("LoadingProvider"), "panic message: {message:?}");
    }

    #[test]
    fn try_use_loading_reports_missing_provider() {
        let mut dom = VirtualDom::new(OrphanTry);
        dom.rebuild_in_place();
        assert_eq!(MISSING.with(|m| *m.borrow()), Some(true));
    }
}
