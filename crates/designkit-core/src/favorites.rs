//! Persisted favorites: project ids and content items.
//!
//! Both collections hydrate from the [`PreferenceStore`] on construction,
//! reseeding (and persisting) a default when the stored value is missing or
//! corrupt. Mutations write the whole collection back.

use chrono::Utc;

use crate::error::KitResult;
use crate::storage::PreferenceStore;
use crate::types::{ContentCardData, ContentFavorite, ProjectId};

/// Storage key for favorite project ids
pub const PROJECT_FAVORITES_KEY: &str = "project-favorites";

/// Storage key for favorite content records
pub const CONTENT_FAVORITES_KEY: &str = "content-favorites";

/// Projects starred for a first-time user
pub const DEFAULT_PROJECT_FAVORITES: &[&str] = &["getting-started", "design-tokens"];

/// Favorite project ids. Unique; kept in the order they were added.
#[derive(Debug, Clone)]
pub struct ProjectFavorites {
    store: PreferenceStore,
    seed: Vec<ProjectId>,
}

impl ProjectFavorites {
    /// Use [`DEFAULT_PROJECT_FAVORITES`] as the seed.
    pub fn new(store: PreferenceStore) -> Self {
        Self::with_seed(
            store,
            DEFAULT_PROJECT_FAVORITES.iter().map(|s| ProjectId::new(*s)).collect(),
        )
    }

    pub fn with_seed(store: PreferenceStore, seed: Vec<ProjectId>) -> Self {
        Self { store, seed }
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Current ids, hydrating (and reseeding if needed) from the store.
    pub fn load(&self) -> Vec<ProjectId> {
        let seed = &self.seed;
        let mut ids: Vec<ProjectId> = self.store.load_or_seed(PROJECT_FAVORITES_KEY, || seed.clone());
        dedup_in_order(&mut ids, |id| id.clone());
        ids
    }

    pub fn is_favorite(&self, id: &ProjectId) -> bool {
        self.load().contains(id)
    }

    /// Returns `false` if it was already a favorite.
    pub fn add(&self, id: ProjectId) -> KitResult<bool> {
        let mut ids = self.load();
        if ids.contains(&id) {
            return Ok(false);
        }
        ids.push(id);
        self.store.set_json(PROJECT_FAVORITES_KEY, &ids)?;
        Ok(true)
    }

    /// Returns `false` if it was not a favorite.
    pub fn remove(&self, id: &ProjectId) -> KitResult<bool> {
        let mut ids = self.load();
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.store.set_json(PROJECT_FAVORITES_KEY, &ids)?;
        Ok(true)
    }

    /// Flip membership; returns whether `id` is a favorite afterwards.
    pub fn toggle(&self, id: ProjectId) -> KitResult<bool> {
        if self.remove(&id)? {
            Ok(false)
        } else {
            self.add(id)
        }
    }

    /// Store an empty list (not the seed).
    pub fn clear(&self) -> KitResult<()> {
        self.store.set_json(PROJECT_FAVORITES_KEY, &Vec::<ProjectId>::new())
    }
}

/// Favorite content records, unique by id, in insertion order.
#[derive(Debug, Clone)]
pub struct ContentFavorites {
    store: PreferenceStore,
}

impl ContentFavorites {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn load(&self) -> Vec<ContentFavorite> {
        let mut items: Vec<ContentFavorite> = self.store.load_or_seed(CONTENT_FAVORITES_KEY, Vec::new);
        dedup_in_order(&mut items, |f| f.id.clone());
        items
    }

    pub fn is_favorite(&self, content_id: &str) -> bool {
        self.load().iter().any(|f| f.id == content_id)
    }

    /// Returns `false` if an item with the same id is already stored.
    pub fn add(&self, favorite: ContentFavorite) -> KitResult<bool> {
        let mut items = self.load();
        if items.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        items.push(favorite);
        self.store.set_json(CONTENT_FAVORITES_KEY, &items)?;
        Ok(true)
    }

    pub fn remove(&self, content_id: &str) -> KitResult<bool> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|f| f.id != content_id);
        if items.len() == before {
            return Ok(false);
        }
        self.store.set_json(CONTENT_FAVORITES_KEY, &items)?;
        Ok(true)
    }

    /// Flip membership for a card; returns whether it is a favorite afterwards.
    pub fn toggle(&self, card: &ContentCardData) -> KitResult<bool> {
        if self.remove(&card.id)? {
            Ok(false)
        } else {
            self.add(ContentFavorite::from_card(card, Utc::now()))
        }
    }
}

/// Keep the first occurrence of each key.
fn dedup_in_order<T, K, F>(items: &mut Vec<T>, key: F)
where
    K: Eq + std::hash::Hash,
    F: Fn(&T) -> K,
{
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(key(item)));
}
