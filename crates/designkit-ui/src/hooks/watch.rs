//! Store change listener shared by the persisted-collection hooks.

use designkit_core::{PreferenceStore, StoreEvent};
use dioxus::prelude::*;
use tokio::sync::broadcast::{self, error::RecvError};

/// Run `on_change` for every event on `key` until the store goes away.
///
/// A lagged receiver may have missed writes to `key`, so it reloads too.
pub async fn watch_key<F>(mut events: broadcast::Receiver<StoreEvent>, key: &str, mut on_change: F)
where
    F: FnMut(),
{
    loop {
        match events.recv().await {
            Ok(event) if event.key == key => on_change(),
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(key, skipped, "store listener lagged, reloading");
                on_change();
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Re-run `reload` whenever `key` changes in `store`, for the lifetime of
/// the calling component.
///
/// The receiver is taken synchronously on first render so no write between
/// hydration and the listener starting is missed. The listener task belongs
/// to the component's scope and stops when it unmounts.
pub fn use_store_watch<F>(store: &PreferenceStore, key: &'static str, reload: F)
where
    F: FnMut() + 'static,
{
    let store = store.clone();
    use_hook(move || {
        let events = store.events();
        spawn(async move {
            watch_key(events, key, reload).await;
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn watch_key_filters_and_stops_on_close() {
        let store = PreferenceStore::in_memory();
        let events = store.events();
        store.set("mine", "1").unwrap();
        store.set("other", "1").unwrap();
        store.remove("mine").unwrap();
        drop(store);

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_c = hits.clone();
        watch_key(events, "mine", move || {
            hits_c.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
