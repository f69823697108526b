//! Core types for designkit

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod content;
pub mod user;

pub use content::{ContentCardData, ContentFavorite, RecentlyVisitedContent};
pub use user::{Permission, PermissionGroup, PermissionLevel, User};

/// Unique identifier for a user account
///
/// Uses ULID so ids sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Ulid);

impl UserId {
    /// Create a new UserId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create a UserId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Identifier of a project a user can be assigned to or favorite.
///
/// Project ids are opaque slugs chosen by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip_string() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.0.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_display_prefix() {
        let id = UserId::new();
        assert!(id.to_string().starts_with("user_"));
    }

    #[test]
    fn test_project_id_serializes_as_plain_string() {
        let ids = vec![ProjectId::new("alpha"), ProjectId::from("beta")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["alpha","beta"]"#);
    }
}
