//! Runtime configuration shared by the desktop app and the CLI.

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::mock::DEFAULT_LOGIN_DELAY;
use crate::favorites::DEFAULT_PROJECT_FAVORITES;
use crate::recent::MAX_RECENTLY_VISITED;
use crate::types::ProjectId;

/// File name of the preference database inside the data directory
pub const DB_FILE_NAME: &str = "preferences.redb";

#[derive(Debug, Clone, PartialEq)]
pub struct KitConfig {
    pub data_dir: PathBuf,
    pub recent_capacity: usize,
    pub project_favorites_seed: Vec<ProjectId>,
    pub login_delay: Duration,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            recent_capacity: MAX_RECENTLY_VISITED,
            project_favorites_seed: DEFAULT_PROJECT_FAVORITES
                .iter()
                .map(|s| ProjectId::new(*s))
                .collect(),
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}

impl KitConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

/// Platform data directory joined with `designkit`, or `./designkit`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("designkit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = KitConfig::default();
        assert_eq!(config.recent_capacity, 20);
        assert_eq!(config.project_favorites_seed.len(), 2);
        assert_eq!(config.login_delay, Duration::from_millis(300));
        assert!(config.data_dir.ends_with("designkit"));
    }

    #[test]
    fn db_path_is_inside_data_dir() {
        let config = KitConfig::default().with_data_dir("/tmp/dk");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/dk/preferences.redb"));
    }
}
