//! Hooks over the persisted preference collections.

mod favorites;
mod recent;
mod watch;

pub use favorites::*;
pub use recent::*;
pub use watch::*;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::time::Duration;

    use designkit_core::{DesignKit, KitConfig};
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::prelude::*;

    use crate::context::use_design_kit_provider;

    thread_local! {
        static KIT: RefCell<Option<DesignKit>> = const { RefCell::new(None) };
    }

    /// An in-memory kit that [`provide_installed_kit`] hands to the tree.
    pub fn install_kit() -> DesignKit {
        let kit = DesignKit::ephemeral(KitConfig::default());
        KIT.with(|k| *k.borrow_mut() = Some(kit.clone()));
        kit
    }

    pub fn provide_installed_kit() -> DesignKit {
        use_design_kit_provider(|| {
            KIT.with(|k| k.borrow().clone())
                .unwrap_or_else(|| DesignKit::ephemeral(KitConfig::default()))
        })
    }

    /// Poll spawned listeners and re-render until `done` holds or the rounds run out.
    pub async fn settle(dom: &mut VirtualDom, done: impl Fn() -> bool) {
        for _ in 0..10 {
            if done() {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }
}
