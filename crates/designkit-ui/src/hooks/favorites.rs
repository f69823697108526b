//! Favorites hooks.
//!
//! Each hook instance hydrates from the shared store on mount and then
//! follows every write to its key, so two components starring the same
//! project stay in step without polling.

use designkit_core::{
    ContentCardData, ContentFavorite, ContentFavorites, ProjectFavorites, ProjectId,
    CONTENT_FAVORITES_KEY, PROJECT_FAVORITES_KEY,
};
use dioxus::prelude::*;

use super::watch::use_store_watch;
use crate::context::use_design_kit;

/// Favorite project ids for the current component.
#[derive(Clone, Copy, PartialEq)]
pub struct UseProjectFavorites {
    ids: Signal<Vec<ProjectId>>,
    source: Signal<ProjectFavorites>,
}

impl UseProjectFavorites {
    pub fn ids(&self) -> Vec<ProjectId> {
        self.ids.read().clone()
    }

    pub fn is_favorite(&self, id: &ProjectId) -> bool {
        self.ids.read().contains(id)
    }

    /// Flip a project in or out of the favorites.
    pub fn toggle(&self, id: ProjectId) {
        let source = self.source.peek().clone();
        if let Err(e) = source.toggle(id.clone()) {
            tracing::error!(project = %id, error = %e, "failed to toggle project favorite");
            return;
        }
        let mut ids = self.ids;
        ids.set(source.load());
    }
}

pub fn use_project_favorites() -> UseProjectFavorites {
    let kit = use_design_kit();
    let source = use_signal(|| kit.project_favorites());
    let mut ids = use_signal(|| source.peek().load());

    use_store_watch(kit.store(), PROJECT_FAVORITES_KEY, move || {
        let fresh = source.peek().load();
        if *ids.peek() != fresh {
            ids.set(fresh);
        }
    });

    UseProjectFavorites { ids, source }
}

/// Favorite content records for the current component.
#[derive(Clone, Copy, PartialEq)]
pub struct UseContentFavorites {
    items: Signal<Vec<ContentFavorite>>,
    source: Signal<ContentFavorites>,
}

impl UseContentFavorites {
    pub fn items(&self) -> Vec<ContentFavorite> {
        self.items.read().clone()
    }

    pub fn is_favorite(&self, content_id: &str) -> bool {
        self.items.read().iter().any(|f| f.id == content_id)
    }

    pub fn toggle(&self, card: &ContentCardData) {
        let source = self.source.peek().clone();
        if let Err(e) = source.toggle(card) {
            tracing::error!(content = %card.id, error = %e, "failed to toggle content favorite");
            return;
        }
        let mut items = self.items;
        items.set(source.load());
    }

    pub fn remove(&self, content_id: &str) {
        let source = self.source.peek().clone();
        match source.remove(content_id) {
            Ok(_) => {
                let mut items = self.items;
                items.set(source.load());
            }
            Err(e) => {
                tracing::error!(content = %content_id, error = %e, "failed to remove content favorite")
            }
        }
    }
}

pub fn use_content_favorites() -> UseContentFavorites {
    let kit = use_design_kit();
    let source = use_signal(|| kit.content_favorites());
    let mut items = use_signal(|| source.peek().load());

    use_store_watch(kit.store(), CONTENT_FAVORITES_KEY, move || {
        let fresh = source.peek().load();
        if *items.peek() != fresh {
            items.set(fresh);
        }
    });

    UseContentFavorites { items, source }
}
