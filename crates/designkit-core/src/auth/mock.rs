//! Mock authentication against a static table of demo accounts.
//!
//! Stands in for a real identity provider during development and in the
//! desktop demo. A simulated network delay precedes every check.

use std::time::Duration;

use crate::error::{KitError, KitResult};
use crate::types::{PermissionGroup, PermissionLevel, User};

/// One row of the demo account table.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
    pub level: PermissionLevel,
    pub group: PermissionGroup,
    pub projects: &'static [&'static str],
}

impl DemoAccount {
    fn to_user(self) -> User {
        let user = User::new(self.email, self.display_name, self.level, self.group);
        if self.projects.is_empty() {
            user
        } else {
            user.with_projects(self.projects.iter().copied())
        }
    }
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@designkit.dev",
        password: "admin123",
        display_name: "Ada Admin",
        level: PermissionLevel::Admin,
        group: PermissionGroup::Internal,
        projects: &[],
    },
    DemoAccount {
        email: "manager@designkit.dev",
        password: "manager123",
        display_name: "Morgan Manager",
        level: PermissionLevel::Manager,
        group: PermissionGroup::Internal,
        projects: &["design-tokens", "getting-started"],
    },
    DemoAccount {
        email: "editor@partner.io",
        password: "editor123",
        display_name: "Eli Editor",
        level: PermissionLevel::Editor,
        group: PermissionGroup::Partner,
        projects: &["design-tokens"],
    },
    DemoAccount {
        email: "client@acme.com",
        password: "client123",
        display_name: "Casey Client",
        level: PermissionLevel::Viewer,
        group: PermissionGroup::Client,
        projects: &["getting-started"],
    },
];

/// Default simulated round-trip for a login request
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(300);

/// Validates credentials against [`DEMO_ACCOUNTS`].
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    accounts: &'static [DemoAccount],
    delay: Duration,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY)
    }
}

impl MockAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self {
            accounts: DEMO_ACCOUNTS,
            delay,
        }
    }

    pub fn with_accounts(accounts: &'static [DemoAccount], delay: Duration) -> Self {
        Self { accounts, delay }
    }

    pub fn accounts(&self) -> &'static [DemoAccount] {
        self.accounts
    }

    /// Check credentials after the simulated delay.
    ///
    /// Emails are compared case-insensitively after trimming; passwords
    /// are compared exactly.
    pub async fn login(&self, email: &str, password: &str) -> KitResult<User> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.verify(email, password)
    }

    /// The credential check without the delay.
    pub fn verify(&self, email: &str, password: &str) -> KitResult<User> {
        let wanted = email.trim().to_ascii_lowercase();
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                tracing::debug!(email = %wanted, "login for unknown account");
                KitError::UserNotFound(wanted.clone())
            })?;

        if account.password != password {
            tracing::debug!(email = %wanted, "password mismatch");
            return Err(KitError::InvalidCredentials(wanted));
        }

        Ok(account.to_user())
    }

    /// Look up a demo account's user record without checking a password.
    pub fn find_user(&self, email: &str) -> KitResult<User> {
        let wanted = email.trim().to_ascii_lowercase();
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(&wanted))
            .map(|a| a.to_user())
            .ok_or(KitError::UserNotFound(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectId;

    #[tokio::test]
    async fn login_succeeds_with_valid_credentials() {
        let auth = MockAuthenticator::new(Duration::ZERO);
        let user = auth.login("editor@partner.io", "editor123").await.unwrap();
        assert_eq!(user.display_name, "Eli Editor");
        assert_eq!(user.permission_level, PermissionLevel::Editor);
        assert!(user.is_assigned_to(&ProjectId::new("design-tokens")));
    }

    #[tokio::test]
    async fn email_match_ignores_case_and_whitespace() {
        let auth = MockAuthenticator::new(Duration::ZERO);
        let user = auth.login("  Admin@DesignKit.dev ", "admin123").await.unwrap();
        assert_eq!(user.permission_level, PermissionLevel::Admin);
        assert!(user.assigned_projects.is_none());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let auth = MockAuthenticator::new(Duration::ZERO);
        let err = auth.login("client@acme.com", "nope").await.unwrap_err();
        assert!(matches!(err, KitError::InvalidCredentials(ref e) if e == "client@acme.com"));
    }

    #[tokio::test]
    async fn unknown_email_is_user_not_found() {
        let auth = MockAuthenticator::new(Duration::ZERO);
        let err = auth.login("ghost@nowhere.net", "x").await.unwrap_err();
        assert!(matches!(err, KitError::UserNotFound(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_simulated_delay() {
        let auth = MockAuthenticator::new(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        auth.login("client@acme.com", "client123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[test]
    fn find_user_skips_password() {
        let auth = MockAuthenticator::default();
        let user = auth.find_user("manager@designkit.dev").unwrap();
        assert_eq!(user.permission_group, PermissionGroup::Internal);
        assert!(auth.find_user("x@y.z").is_err());
    }
}
