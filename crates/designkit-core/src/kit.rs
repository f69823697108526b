//! Entry point tying configuration, storage and the preference collections together.

use crate::auth::MockAuthenticator;
use crate::config::KitConfig;
use crate::error::KitResult;
use crate::favorites::{ContentFavorites, ProjectFavorites};
use crate::recent::RecentlyVisited;
use crate::storage::PreferenceStore;

/// Opened preference store plus the collections built on it.
///
/// Clones share the same store, so a write through one handle is seen by
/// observers registered through any other.
#[derive(Debug, Clone)]
pub struct DesignKit {
    config: KitConfig,
    store: PreferenceStore,
}

impl DesignKit {
    /// Open the redb store under `config.data_dir`.
    pub fn open(config: KitConfig) -> KitResult<Self> {
        let store = PreferenceStore::open(config.db_path())?;
        tracing::info!(data_dir = %config.data_dir.display(), "designkit preferences opened");
        Ok(Self { config, store })
    }

    /// In-memory store with the given configuration.
    pub fn ephemeral(config: KitConfig) -> Self {
        Self {
            config,
            store: PreferenceStore::in_memory(),
        }
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn project_favorites(&self) -> ProjectFavorites {
        ProjectFavorites::with_seed(self.store.clone(), self.config.project_favorites_seed.clone())
    }

    pub fn content_favorites(&self) -> ContentFavorites {
        ContentFavorites::new(self.store.clone())
    }

    pub fn recently_visited(&self) -> RecentlyVisited {
        RecentlyVisited::with_capacity(self.store.clone(), self.config.recent_capacity)
    }

    pub fn authenticator(&self) -> MockAuthenticator {
        MockAuthenticator::new(self.config.login_delay)
    }
}
