//! designkit core library
//!
//! Headless half of the designkit component library: the client-side
//! capability and preference cache that the Dioxus components sit on.
//!
//! ## Overview
//!
//! - **Permission gating**: [`AccessRule`] evaluated against an
//!   [`AccessContext`] (normally an [`AuthSession`]) decides whether a gated
//!   subtree renders or falls back.
//! - **Persisted preferences**: favorites and recently visited content live
//!   in a [`PreferenceStore`] (redb on disk, or memory) that notifies
//!   observers on every write.
//! - **Loading state**: [`LoadingState`] backs the single loading overlay.
//!
//! ## Quick Start
//!
//! ```
//! use designkit_core::{AccessRule, AuthSession, PermissionLevel, PermissionGroup, User};
//! use designkit_core::{ContentCardData, PreferenceStore, RecentlyVisited};
//!
//! let user = User::new("ed@x.io", "Ed", PermissionLevel::Editor, PermissionGroup::Partner);
//! let session = AuthSession::signed_in(user);
//! let rule = AccessRule::authenticated().at_levels([PermissionLevel::Editor]);
//! assert!(rule.evaluate(&session).is_render());
//!
//! let recent = RecentlyVisited::new(PreferenceStore::in_memory());
//! recent.add(ContentCardData::new("tokens", "Design tokens"));
//! assert_eq!(recent.contents(Some(1)).to_vec()[0].content.id, "tokens");
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod favorites;
pub mod gate;
pub mod kit;
pub mod loading;
pub mod logging;
pub mod recent;
pub mod storage;
pub mod types;

// Re-exports
pub use auth::{AccessContext, AuthSession, MockAuthenticator};
pub use config::KitConfig;
pub use error::{KitError, KitResult};
pub use favorites::{
    ContentFavorites, ProjectFavorites, CONTENT_FAVORITES_KEY, PROJECT_FAVORITES_KEY,
};
pub use gate::{AccessRule, GateDecision, RuleCategory};
pub use kit::DesignKit;
pub use loading::LoadingState;
pub use recent::{RecentContents, RecentlyVisited, MAX_RECENTLY_VISITED, RECENTLY_VISITED_KEY};
pub use storage::{PreferenceStore, StoreBackend, StoreChange, StoreEvent, Subscription};
pub use types::*;
