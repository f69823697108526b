//! designkit UI Components
//!
//! Dioxus components and hooks layered over `designkit-core`.
//!
//! ## What's here
//!
//! - **Styled controls**: [`Button`], [`Badge`], [`Input`], all resolved
//!   through one [`variant::VariantTable`] per control
//! - **[`PermissionGate`]**: renders children or a fallback from an access rule
//! - **[`LoadingProvider`]** / [`use_loading`]: one overlay, last message wins
//! - **Preference hooks**: [`use_project_favorites`], [`use_content_favorites`],
//!   [`use_recently_visited`], kept in sync through store change events
//! - **Context handles**: [`use_design_kit_provider`], [`use_auth_provider`]

pub mod components;
pub mod context;
pub mod hooks;
pub mod variant;

pub use components::*;
pub use context::*;
pub use hooks::*;
pub use variant::{ResolvedStyle, StyleAttrs, Variant, VariantTable};
