//! Permission gate rule evaluation.
//!
//! An [`AccessRule`] carries up to five rule categories. They are not
//! combined: evaluation walks a fixed order and every non-empty category
//! overwrites the running result, so the last supplied category decides.
//!
//! ```text
//! require_auth ──(anonymous)──▶ Fallback
//!      │
//!      ▼
//! permissions ─▶ any_permission ─▶ groups ─▶ levels ─▶ project_id
//!   (ALL)          (ANY)           (IN)      (IN)      (access)
//! ```
//!
//! Supplying `permissions` and `levels` together therefore means "levels",
//! not "permissions AND levels".

use serde::{Deserialize, Serialize};

use crate::auth::AccessContext;
use crate::types::{Permission, PermissionGroup, PermissionLevel, ProjectId};

/// Which branch a gate renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Fallback,
}

impl GateDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GateDecision::Render)
    }
}

impl From<bool> for GateDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            GateDecision::Render
        } else {
            GateDecision::Fallback
        }
    }
}

/// Rule categories in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Permissions,
    AnyPermission,
    Groups,
    Levels,
    Project,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Permissions => "permissions",
            RuleCategory::AnyPermission => "any_permission",
            RuleCategory::Groups => "groups",
            RuleCategory::Levels => "levels",
            RuleCategory::Project => "project_id",
        }
    }
}

/// Declarative access rule for a gated subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessRule {
    pub require_auth: bool,
    /// All of these must be held
    pub permissions: Vec<Permission>,
    /// At least one of these must be held
    pub any_permission: Vec<Permission>,
    pub groups: Vec<PermissionGroup>,
    pub levels: Vec<PermissionLevel>,
    pub project_id: Option<ProjectId>,
}

impl Default for AccessRule {
    fn default() -> Self {
        Self {
            require_auth: true,
            permissions: Vec::new(),
            any_permission: Vec::new(),
            groups: Vec::new(),
            levels: Vec::new(),
            project_id: None,
        }
    }
}

impl AccessRule {
    /// A rule that only requires a signed-in user.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// A rule with no requirements at all.
    pub fn public() -> Self {
        Self {
            require_auth: false,
            ..Self::default()
        }
    }

    pub fn require_auth(mut self, required: bool) -> Self {
        self.require_auth = required;
        self
    }

    pub fn all_of(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    pub fn any_of(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.any_permission = permissions.into_iter().collect();
        self
    }

    pub fn in_groups(mut self, groups: impl IntoIterator<Item = PermissionGroup>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    pub fn at_levels(mut self, levels: impl IntoIterator<Item = PermissionLevel>) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }

    pub fn for_project(mut self, project: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project.into());
        self
    }

    /// Categories that will take part in evaluation, in evaluation order.
    pub fn active_categories(&self) -> Vec<RuleCategory> {
        let mut active = Vec::new();
        if !self.permissions.is_empty() {
            active.push(RuleCategory::Permissions);
        }
        if !self.any_permission.is_empty() {
            active.push(RuleCategory::AnyPermission);
        }
        if !self.groups.is_empty() {
            active.push(RuleCategory::Groups);
        }
        if !self.levels.is_empty() {
            active.push(RuleCategory::Levels);
        }
        if self.project_id.is_some() {
            active.push(RuleCategory::Project);
        }
        active
    }

    /// The category whose outcome decides the gate, if any is supplied.
    pub fn deciding_category(&self) -> Option<RuleCategory> {
        self.active_categories().last().copied()
    }

    /// Evaluate against the given access context.
    pub fn evaluate<C: AccessContext + ?Sized>(&self, ctx: &C) -> GateDecision {
        if self.require_auth && !ctx.is_authenticated() {
            return GateDecision::Fallback;
        }

        let active = self.active_categories();
        if active.len() > 1 {
            let overridden: Vec<&str> = active[..active.len() - 1]
                .iter()
                .map(RuleCategory::as_str)
                .collect();
            tracing::debug!(
                deciding = active[active.len() - 1].as_str(),
                ?overridden,
                "access rule supplies several categories; last one wins"
            );
        }

        let mut allowed = true;

        if !self.permissions.is_empty() {
            allowed = ctx.has_all_permissions(&self.permissions);
        }
        if !self.any_permission.is_empty() {
            allowed = ctx.has_any_permission(&self.any_permission);
        }
        if !self.groups.is_empty() {
            allowed = self.groups.iter().any(|g| ctx.is_in_group(*g));
        }
        if !self.levels.is_empty() {
            allowed = self.levels.iter().any(|l| ctx.has_level(*l));
        }
        if let Some(project) = &self.project_id {
            allowed = ctx.can_access_project(project);
        }

        GateDecision::from(allowed)
    }
}
