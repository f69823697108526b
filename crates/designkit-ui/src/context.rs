//! Context handles injected into the component tree.
//!
//! Each provider hook creates its handle once, when the providing
//! component mounts, and the handle is dropped with that component.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! let kit = use_design_kit_provider(|| DesignKit::ephemeral(KitConfig::default()));
//! let auth = use_auth_provider(kit.authenticator());
//!
//! // In child components
//! let kit = use_design_kit();
//! let auth = use_auth();
//! ```

use designkit_core::{
    AccessContext, AuthSession, DesignKit, KitError, KitResult, MockAuthenticator, User,
};
use dioxus::prelude::*;

/// Provide a [`DesignKit`] to every descendant.
pub fn use_design_kit_provider(init: impl FnOnce() -> DesignKit) -> DesignKit {
    use_context_provider(init)
}

/// The [`DesignKit`] from the nearest provider.
///
/// # Panics
///
/// Panics if no ancestor called [`use_design_kit_provider`].
pub fn use_design_kit() -> DesignKit {
    match try_use_context::<DesignKit>() {
        Some(kit) => kit,
        None => panic!("{}", KitError::MissingProvider("DesignKit provider")),
    }
}

/// Handle to the signed-in session.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthHandle {
    session: Signal<AuthSession>,
    authenticator: Signal<MockAuthenticator>,
}

impl AuthHandle {
    /// Reactive read of the current session.
    pub fn session(&self) -> AuthSession {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Check credentials and, on success, sign the user in.
    pub async fn login(&self, email: &str, password: &str) -> KitResult<User> {
        let authenticator = self.authenticator.peek().clone();
        let user = authenticator.login(email, password).await?;
        let mut session = self.session;
        session.write().sign_in(user.clone());
        Ok(user)
    }

    /// Sign in a user authenticated elsewhere.
    pub fn sign_in(&self, user: User) {
        let mut session = self.session;
        session.write().sign_in(user);
    }

    pub fn logout(&self) {
        let mut session = self.session;
        session.write().sign_out();
    }
}

/// Create the auth session for this subtree, starting signed out.
pub fn use_auth_provider(authenticator: MockAuthenticator) -> AuthHandle {
    use_auth_provider_with_session(authenticator, AuthSession::anonymous())
}

/// Create the auth session for this subtree from an existing session.
pub fn use_auth_provider_with_session(
    authenticator: MockAuthenticator,
    initial: AuthSession,
) -> AuthHandle {
    let session = use_signal(move || initial);
    let authenticator = use_signal(move || authenticator);
    use_context_provider(|| AuthHandle {
        session,
        authenticator,
    })
}

/// The [`AuthHandle`] from the nearest provider.
///
/// # Panics
///
/// Panics if no ancestor called [`use_auth_provider`].
pub fn use_auth() -> AuthHandle {
    match try_use_auth() {
        Ok(handle) => handle,
        Err(e) => panic!("{}", e),
    }
}

pub fn try_use_auth() -> KitResult<AuthHandle> {
    try_use_context::<AuthHandle>().ok_or(KitError::MissingProvider("AuthProvider"))
}
