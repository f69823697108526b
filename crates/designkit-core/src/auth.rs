//! Authentication session and the access predicates gates evaluate against.
//!
//! [`AccessContext`] is the seam between rule evaluation and whatever holds
//! the signed-in user. [`AuthSession`] is the stock implementation: an
//! optional [`User`] with an explicit sign-in/sign-out lifecycle.

use crate::types::{Permission, PermissionGroup, PermissionLevel, ProjectId, User};

pub mod mock;

pub use mock::{DemoAccount, MockAuthenticator, DEMO_ACCOUNTS};

/// Pure boolean predicates over the current session's user.
///
/// Every predicate returns `false` when nobody is signed in.
pub trait AccessContext {
    fn is_authenticated(&self) -> bool;
    fn has_all_permissions(&self, permissions: &[Permission]) -> bool;
    fn has_any_permission(&self, permissions: &[Permission]) -> bool;
    fn is_in_group(&self, group: PermissionGroup) -> bool;
    fn has_level(&self, level: PermissionLevel) -> bool;
    fn can_access_project(&self, project: &ProjectId) -> bool;
}

/// Holds the signed-in user, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replace the current user. Returns the previous one.
    pub fn sign_in(&mut self, user: User) -> Option<User> {
        tracing::info!(email = %user.email, level = %user.permission_level, "signed in");
        self.user.replace(user)
    }

    pub fn sign_out(&mut self) -> Option<User> {
        let previous = self.user.take();
        if let Some(ref user) = previous {
            tracing::info!(email = %user.email, "signed out");
        }
        previous
    }
}

impl AccessContext for AuthSession {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        match &self.user {
            Some(user) => permissions.iter().all(|p| user.has_permission(*p)),
            None => false,
        }
    }

    fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        match &self.user {
            Some(user) => permissions.iter().any(|p| user.has_permission(*p)),
            None => false,
        }
    }

    fn is_in_group(&self, group: PermissionGroup) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.permission_group == group)
    }

    fn has_level(&self, level: PermissionLevel) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.permission_level == level)
    }

    /// Admins see every project; internal managers too. Everyone else
    /// needs the project in their assignment list.
    fn can_access_project(&self, project: &ProjectId) -> bool {
        let Some(user) = &self.user else {
            return false;
        };
        if user.permission_level == PermissionLevel::Admin {
            return true;
        }
        if user.permission_group == PermissionGroup::Internal
            && user.permission_level >= PermissionLevel::Manager
        {
            return true;
        }
        user.is_assigned_to(project)
    }
}
