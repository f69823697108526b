//! PermissionGate Component
//!
//! Renders its children only when the signed-in user satisfies an access
//! rule, otherwise the fallback (nothing by default). See
//! [`designkit_core::gate`] for the evaluation order.

use designkit_core::{
    AccessRule, GateDecision, Permission, PermissionGroup, PermissionLevel, ProjectId,
};
use dioxus::prelude::*;

use crate::context::use_auth;

/// Properties for the PermissionGate component
#[derive(Clone, PartialEq, Props)]
pub struct PermissionGateProps {
    /// Render the fallback for anonymous sessions
    #[props(default = true)]
    pub require_auth: bool,
    /// All of these must be held
    #[props(default)]
    pub permissions: Vec<Permission>,
    /// At least one of these must be held
    #[props(default)]
    pub any_permission: Vec<Permission>,
    #[props(default)]
    pub groups: Vec<PermissionGroup>,
    #[props(default)]
    pub levels: Vec<PermissionLevel>,
    #[props(default)]
    pub project_id: Option<ProjectId>,
    /// Rendered instead of children when access is denied
    #[props(default)]
    pub fallback: Option<Element>,
    pub children: Element,
}

impl PermissionGateProps {
    /// The rule these props describe.
    pub fn rule(&self) -> AccessRule {
        AccessRule {
            require_auth: self.require_auth,
            permissions: self.permissions.clone(),
            any_permission: self.any_permission.clone(),
            groups: self.groups.clone(),
            levels: self.levels.clone(),
            project_id: self.project_id.clone(),
        }
    }
}

/// Conditionally render children based on the current session.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PermissionGate {
///         any_permission: vec![Permission::ManageUsers, Permission::ManageProjects],
///         fallback: rsx! { p { "Ask an administrator for access." } },
///         AdminPanel {}
///     }
/// }
/// ```
#[component]
pub fn PermissionGate(props: PermissionGateProps) -> Element {
    let auth = use_auth();
    let decision = props.rule().evaluate(&auth.session());

    match decision {
        GateDecision::Render => props.children,
        GateDecision::Fallback => match props.fallback {
            Some(fallback) => fallback,
            None => rsx! {},
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{use_auth_provider, use_auth_provider_with_session};
    use designkit_core::{AuthSession, MockAuthenticator, User};
    use std::cell::Cell;
    use std::time::Duration;

    thread_local! {
        static RENDERED: Cell<bool> = const { Cell::new(false) };
        static FELL_BACK: Cell<bool> = const { Cell::new(false) };
    }

    #[component]
    fn Secret() -> Element {
        RENDERED.with(|r| r.set(true));
        rsx! { "secret" }
    }

    #[component]
    fn Denied() -> Element {
        FELL_BACK.with(|r| r.set(true));
        rsx! { "denied" }
    }

    fn contributor() -> User {
        User::new(
            "c@x.io",
            "C",
            PermissionLevel::Contributor,
            PermissionGroup::Client,
        )
    }

    #[component]
    fn SignedInHarness() -> Element {
        use_auth_provider_with_session(
            MockAuthenticator::new(Duration::ZERO),
            AuthSession::signed_in(contributor()),
        );
        rsx! {
            PermissionGate {
                permissions: vec![Permission::ViewContent, Permission::PublishContent],
                levels: vec![PermissionLevel::Contributor],
                fallback: rsx! { Denied {} },
                Secret {}
            }
        }
    }

    #[component]
    fn AnonymousHarness() -> Element {
        use_auth_provider(MockAuthenticator::new(Duration::ZERO));
        rsx! {
            PermissionGate {
                levels: PermissionLevel::ALL.to_vec(),
                fallback: rsx! { Denied {} },
                Secret {}
            }
        }
    }

    fn reset() {
        RENDERED.with(|r| r.set(false));
        FELL_BACK.with(|r| r.set(false));
    }

    #[test]
    fn later_rule_category_decides_render() {
        reset();
        let mut dom = VirtualDom::new(SignedInHarness);
        dom.rebuild_in_place();
        assert!(RENDERED.with(Cell::get));
        assert!(!FELL_BACK.with(Cell::get));
    }

    #[test]
    fn anonymous_session_renders_fallback() {
        reset();
        let mut dom = VirtualDom::new(AnonymousHarness);
        dom.rebuild_in_place();
        assert!(!RENDERED.with(Cell::get));
        assert!(FELL_BACK.with(Cell::get));
    }

    #[test]
    fn props_map_to_rule() {
        let props = PermissionGateProps {
            require_auth: false,
            permissions: vec![Permission::EditContent],
            any_permission: vec![],
            groups: vec![PermissionGroup::Partner],
            levels: vec![],
            project_id: Some(ProjectId::new("alpha")),
            fallback: None,
            children: rsx! {},
        };
        let rule = props.rule();
        assert!(!rule.require_auth);
        assert_eq!(rule.groups, vec![PermissionGroup::Partner]);
        assert_eq!(rule.project_id, Some(ProjectId::new("alpha")));
    }
}
