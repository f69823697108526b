//! User accounts, permission levels, groups and capabilities.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ProjectId, UserId};
use crate::error::KitError;

/// A single capability a user may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewContent,
    EditContent,
    PublishContent,
    DeleteContent,
    ViewAnalytics,
    ExportData,
    ManageProjects,
    ManageUsers,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::ViewContent,
        Permission::EditContent,
        Permission::PublishContent,
        Permission::DeleteContent,
        Permission::ViewAnalytics,
        Permission::ExportData,
        Permission::ManageProjects,
        Permission::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewContent => "view_content",
            Permission::EditContent => "edit_content",
            Permission::PublishContent => "publish_content",
            Permission::DeleteContent => "delete_content",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ExportData => "export_data",
            Permission::ManageProjects => "manage_projects",
            Permission::ManageUsers => "manage_users",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| KitError::InvalidInput(format!("unknown permission '{}'", s)))
    }
}

/// Ordered permission level. Higher levels include everything below them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    #[default]
    Viewer,
    Contributor,
    Editor,
    Manager,
    Admin,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 5] = [
        PermissionLevel::Viewer,
        PermissionLevel::Contributor,
        PermissionLevel::Editor,
        PermissionLevel::Manager,
        PermissionLevel::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Viewer => "viewer",
            PermissionLevel::Contributor => "contributor",
            PermissionLevel::Editor => "editor",
            PermissionLevel::Manager => "manager",
            PermissionLevel::Admin => "admin",
        }
    }

    /// Permissions granted by this level alone (not cumulative).
    fn own_grants(&self) -> &'static [Permission] {
        match self {
            PermissionLevel::Viewer => &[Permission::ViewContent],
            PermissionLevel::Contributor => &[Permission::EditContent],
            PermissionLevel::Editor => &[
                Permission::PublishContent,
                Permission::DeleteContent,
                Permission::ViewAnalytics,
            ],
            PermissionLevel::Manager => &[Permission::ExportData, Permission::ManageProjects],
            PermissionLevel::Admin => &[Permission::ManageUsers],
        }
    }

    /// Every permission implied by this level, including lower levels' grants.
    pub fn implied_permissions(&self) -> BTreeSet<Permission> {
        PermissionLevel::ALL
            .iter()
            .filter(|level| *level <= self)
            .flat_map(|level| level.own_grants().iter().copied())
            .collect()
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PermissionLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| KitError::InvalidInput(format!("unknown permission level '{}'", s)))
    }
}

/// Organizational group a user belongs to. Unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionGroup {
    Internal,
    Partner,
    Client,
    #[default]
    Guest,
}

impl PermissionGroup {
    pub const ALL: [PermissionGroup; 4] = [
        PermissionGroup::Internal,
        PermissionGroup::Partner,
        PermissionGroup::Client,
        PermissionGroup::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionGroup::Internal => "internal",
            PermissionGroup::Partner => "partner",
            PermissionGroup::Client => "client",
            PermissionGroup::Guest => "guest",
        }
    }
}

impl std::fmt::Display for PermissionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionGroup {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PermissionGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| KitError::InvalidInput(format!("unknown permission group '{}'", s)))
    }
}

/// A signed-in user.
///
/// Constructed at login and held by the auth session until logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub permission_level: PermissionLevel,
    pub permission_group: PermissionGroup,
    /// Projects explicitly assigned to this user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_projects: Option<Vec<ProjectId>>,
    /// Grants on top of what the level implies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_permissions: Vec<Permission>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        permission_level: PermissionLevel,
        permission_group: PermissionGroup,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            display_name: display_name.into(),
            permission_level,
            permission_group,
            assigned_projects: None,
            extra_permissions: Vec::new(),
        }
    }

    pub fn with_projects<I, P>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProjectId>,
    {
        self.assigned_projects = Some(projects.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_extra_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.extra_permissions.extend(permissions);
        self
    }

    /// Union of level-implied and extra permissions.
    pub fn effective_permissions(&self) -> BTreeSet<Permission> {
        let mut set = self.permission_level.implied_permissions();
        set.extend(self.extra_permissions.iter().copied());
        set
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.extra_permissions.contains(&permission)
            || self.permission_level.implied_permissions().contains(&permission)
    }

    pub fn is_assigned_to(&self, project: &ProjectId) -> bool {
        self.assigned_projects
            .as_ref()
            .is_some_and(|projects| projects.contains(project))
    }
}
