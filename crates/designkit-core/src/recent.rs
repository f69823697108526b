//! Recently visited content, most recent first.
//!
//! The list is deduplicated by content id and capped; visiting an item
//! again moves it to the front with a fresh timestamp. Write failures are
//! logged and swallowed so a broken store never breaks navigation.

use chrono::{DateTime, Utc};

use crate::error::KitResult;
use crate::storage::PreferenceStore;
use crate::types::{ContentCardData, RecentlyVisitedContent};

/// Storage key for the visit list
pub const RECENTLY_VISITED_KEY: &str = "recently-visited-contents-v3";

/// Maximum number of visits kept
pub const MAX_RECENTLY_VISITED: usize = 20;

#[derive(Debug, Clone)]
pub struct RecentlyVisited {
    store: PreferenceStore,
    capacity: usize,
}

impl RecentlyVisited {
    pub fn new(store: PreferenceStore) -> Self {
        Self::with_capacity(store, MAX_RECENTLY_VISITED)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(store: PreferenceStore, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Hydrate for a fresh view: an absent or unreadable list becomes an
    /// empty one, and that empty list is persisted.
    pub fn load(&self) -> Vec<RecentlyVisitedContent> {
        let mut items: Vec<RecentlyVisitedContent> =
            self.store.load_or_seed(RECENTLY_VISITED_KEY, Vec::new);
        normalize(&mut items, self.capacity);
        items
    }

    /// Record a visit stamped with the current time.
    pub fn add(&self, item: ContentCardData) {
        self.add_at(item, Utc::now());
    }

    /// Record a visit with an explicit timestamp.
    pub fn add_at(&self, item: ContentCardData, visited_at: DateTime<Utc>) {
        let mut items = read_entries(&self.store);
        items.retain(|existing| existing.id() != item.id);
        items.insert(0, RecentlyVisitedContent::new(item, visited_at));
        items.truncate(self.capacity);

        if let Err(e) = self.store.set_json(RECENTLY_VISITED_KEY, &items) {
            tracing::error!(error = %e, "failed to persist recently visited contents");
        }
    }

    /// Lazy view over the stored list, optionally truncated.
    ///
    /// Nothing is read until the view is iterated, and every iteration
    /// re-reads the store.
    pub fn contents(&self, limit: Option<usize>) -> RecentContents {
        RecentContents {
            store: self.store.clone(),
            capacity: self.capacity,
            limit,
        }
    }

    /// Delete the stored list outright.
    pub fn clear(&self) -> KitResult<()> {
        self.store.remove(RECENTLY_VISITED_KEY)?;
        Ok(())
    }
}

/// Restartable view returned by [`RecentlyVisited::contents`].
#[derive(Debug, Clone)]
pub struct RecentContents {
    store: PreferenceStore,
    capacity: usize,
    limit: Option<usize>,
}

impl RecentContents {
    pub fn iter(&self) -> std::vec::IntoIter<RecentlyVisitedContent> {
        self.to_vec().into_iter()
    }

    pub fn to_vec(&self) -> Vec<RecentlyVisitedContent> {
        let mut items = read_entries(&self.store);
        normalize(&mut items, self.capacity);
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}

impl IntoIterator for &RecentContents {
    type Item = RecentlyVisitedContent;
    type IntoIter = std::vec::IntoIter<RecentlyVisitedContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read without seeding. Unreadable data reads as empty.
fn read_entries(store: &PreferenceStore) -> Vec<RecentlyVisitedContent> {
    match store.get_json::<Vec<RecentlyVisitedContent>>(RECENTLY_VISITED_KEY) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "recently visited contents unreadable, treating as empty");
            Vec::new()
        }
    }
}

/// Drop later duplicates and anything past capacity.
fn normalize(items: &mut Vec<RecentlyVisitedContent>, capacity: usize) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.id().to_string()));
    items.truncate(capacity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn card(n: usize) -> ContentCardData {
        ContentCardData::new(format!("c{}", n), format!("Card {}", n))
    }

    fn ids(items: &[RecentlyVisitedContent]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn revisit_moves_to_front_with_new_timestamp() {
        let recent = RecentlyVisited::new(PreferenceStore::in_memory());
        let t0 = Utc::now();
        recent.add_at(card(1), t0);
        recent.add_at(card(2), t0 + Duration::seconds(1));
        recent.add_at(card(1), t0 + Duration::seconds(2));

        let items = recent.contents(None).to_vec();
        assert_eq!(ids(&items), vec!["c1", "c2"]);
        assert_eq!(items[0].visited_at, t0 + Duration::seconds(2));
    }

    #[test]
    fn twenty_first_item_evicts_oldest() {
        let recent = RecentlyVisited::new(PreferenceStore::in_memory());
        for n in 1..=21 {
            recent.add(card(n));
        }
        let items = recent.contents(None).to_vec();
        assert_eq!(items.len(), MAX_RECENTLY_VISITED);
        assert_eq!(items[0].id(), "c21");
        assert_eq!(items[19].id(), "c2");
        assert!(!items.iter().any(|i| i.id() == "c1"));
    }

    #[test]
    fn limited_view_returns_most_recent() {
        let recent = RecentlyVisited::new(PreferenceStore::in_memory());
        for n in 1..=5 {
            recent.add(card(n));
        }
        assert_eq!(ids(&recent.contents(Some(3)).to_vec()), vec!["c5", "c4", "c3"]);
    }

    #[test]
    fn view_rereads_store_each_iteration() {
        let recent = RecentlyVisited::new(PreferenceStore::in_memory());
        let view = recent.contents(None);
        assert_eq!(view.iter().count(), 0);

        recent.add(card(1));
        assert_eq!(view.iter().count(), 1);
        recent.add(card(2));
        let collected: Vec<_> = (&view).into_iter().collect();
        assert_eq!(ids(&collected), vec!["c2", "c1"]);
    }

    #[test]
    fn clear_removes_key() {
        let store = PreferenceStore::in_memory();
        let recent = RecentlyVisited::new(store.clone());
        recent.add(card(1));
        recent.clear().unwrap();
        assert_eq!(store.get(RECENTLY_VISITED_KEY).unwrap(), None);
        assert!(recent.contents(None).to_vec().is_empty());
    }

    #[test]
    fn corrupt_store_reads_empty_and_add_recovers() {
        let store = PreferenceStore::in_memory();
        store.set(RECENTLY_VISITED_KEY, "garbage").unwrap();
        let recent = RecentlyVisited::new(store.clone());

        assert!(recent.contents(None).to_vec().is_empty());
        recent.add(card(7));
        assert_eq!(ids(&recent.contents(None).to_vec()), vec!["c7"]);
    }

    #[test]
    fn load_persists_empty_list_when_missing() {
        let store = PreferenceStore::in_memory();
        let recent = RecentlyVisited::new(store.clone());
        assert!(recent.load().is_empty());
        assert_eq!(store.get(RECENTLY_VISITED_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn custom_capacity_is_respected() {
        let recent = RecentlyVisited::with_capacity(PreferenceStore::in_memory(), 2);
        for n in 1..=4 {
            recent.add(card(n));
        }
        assert_eq!(ids(&recent.load()), vec!["c4", "c3"]);
        assert_eq!(RecentlyVisited::with_capacity(PreferenceStore::in_memory(), 0).capacity(), 1);
    }
}
