//! Recently visited content hook.

use designkit_core::{
    ContentCardData, RecentContents, RecentlyVisited, RecentlyVisitedContent, RECENTLY_VISITED_KEY,
};
use dioxus::prelude::*;

use super::watch::use_store_watch;
use crate::context::use_design_kit;

#[derive(Clone, Copy, PartialEq)]
pub struct UseRecentlyVisited {
    items: Signal<Vec<RecentlyVisitedContent>>,
    source: Signal<RecentlyVisited>,
}

impl UseRecentlyVisited {
    /// Reactive snapshot, most recent first.
    pub fn items(&self) -> Vec<RecentlyVisitedContent> {
        self.items.read().clone()
    }

    /// Record a visit. Storage failures are logged, never surfaced.
    pub fn add(&self, card: ContentCardData) {
        self.source.peek().add(card);
    }

    /// Lazy view straight from the store, optionally truncated.
    pub fn contents(&self, limit: Option<usize>) -> RecentContents {
        self.source.peek().contents(limit)
    }

    pub fn clear(&self) {
        if let Err(e) = self.source.peek().clear() {
            tracing::error!(error = %e, "failed to clear recently visited contents");
        }
    }
}

pub fn use_recently_visited() -> UseRecentlyVisited {
    let kit = use_design_kit();
    let source = use_signal(|| kit.recently_visited());
    let mut items = use_signal(|| source.peek().load());

    use_store_watch(kit.store(), RECENTLY_VISITED_KEY, move || {
        items.set(source.peek().contents(None).to_vec());
    });

    UseRecentlyVisited { items, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::test_support::{install_kit, provide_installed_kit, settle};
    use std::cell::RefCell;

    thread_local! {
        static SNAPSHOTS: RefCell<Vec<Vec<String>>> = const { RefCell::new(Vec::new()) };
        static HANDLE: RefCell<Option<UseRecentlyVisited>> = const { RefCell::new(None) };
    }

    fn latest() -> Vec<String> {
        SNAPSHOTS.with(|s| s.borrow().last().cloned().unwrap_or_default())
    }

    #[component]
    fn History() -> Element {
        provide_installed_kit();
        let recent = use_recently_visited();
        HANDLE.with(|h| *h.borrow_mut() = Some(recent));
        SNAPSHOTS.with(|s| {
            s.borrow_mut()
                .push(recent.items().into_iter().map(|v| v.content.id).collect())
        });
        rsx! {}
    }

    #[tokio::test]
    async fn add_then_clear_reaches_items() {
        install_kit();
        let mut dom = VirtualDom::new(History);
        dom.rebuild_in_place();
        assert!(latest().is_empty());

        let recent = HANDLE.with(|h| *h.borrow()).unwrap();
        dom.in_runtime(|| {
            recent.add(ContentCardData::new("a", "Alpha"));
            recent.add(ContentCardData::new("b", "Beta"));
        });
        settle(&mut dom, || latest() == ["b", "a"]).await;
        assert_eq!(latest(), ["b", "a"]);

        dom.in_runtime(|| recent.clear());
        settle(&mut dom, || latest().is_empty()).await;
        assert!(latest().is_empty());
    }

    #[tokio::test]
    async fn mount_reads_existing_history() {
        let kit = install_kit();
        kit.recently_visited().add(ContentCardData::new("old", "Old"));

        let mut dom = VirtualDom::new(History);
        dom.rebuild_in_place();

        assert_eq!(latest(), ["old"]);
    }
}
