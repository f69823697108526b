//! Permission gate evaluation order tests
//!
//! Rule categories overwrite each other in a fixed order rather than
//! combining. These tests pin that behavior down.

use designkit_core::{
    AccessRule, AuthSession, GateDecision, MockAuthenticator, Permission, PermissionGroup,
    PermissionLevel, User,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn session_for(email: &str) -> AuthSession {
    let user = MockAuthenticator::default().find_user(email).unwrap();
    AuthSession::signed_in(user)
}

fn every_rule() -> Vec<AccessRule> {
    vec![
        AccessRule::authenticated(),
        AccessRule::authenticated().all_of([Permission::ViewContent]),
        AccessRule::authenticated().any_of([Permission::ViewContent, Permission::ManageUsers]),
        AccessRule::authenticated().in_groups(PermissionGroup::ALL),
        AccessRule::authenticated().at_levels(PermissionLevel::ALL),
        AccessRule::authenticated().for_project("getting-started"),
        AccessRule::authenticated()
            .all_of([Permission::ViewContent])
            .any_of([Permission::ViewContent])
            .in_groups(PermissionGroup::ALL)
            .at_levels(PermissionLevel::ALL)
            .for_project("getting-started"),
    ]
}

// ============================================================================
// Authentication
// ============================================================================

#[test]
fn test_unauthenticated_always_falls_back() {
    let anonymous = AuthSession::anonymous();
    for rule in every_rule() {
        assert_eq!(rule.evaluate(&anonymous), GateDecision::Fallback, "{:?}", rule);
    }
}

#[test]
fn test_admin_passes_every_rule() {
    let admin = session_for("admin@designkit.dev");
    for rule in every_rule() {
        assert_eq!(rule.evaluate(&admin), GateDecision::Render, "{:?}", rule);
    }
}

// ============================================================================
// Overwrite Order
// ============================================================================

#[test]
fn test_levels_override_failed_permissions() {
    // Contributor holds ViewContent but not PublishContent.
    let session = AuthSession::signed_in(User::new(
        "c@x.io",
        "C",
        PermissionLevel::Contributor,
        PermissionGroup::Client,
    ));
    let rule = AccessRule::authenticated()
        .all_of([Permission::ViewContent, Permission::PublishContent])
        .at_levels([PermissionLevel::Contributor]);
    assert_eq!(rule.evaluate(&session), GateDecision::Render);
}

#[test]
fn test_any_permission_overrides_all_permissions() {
    let client = session_for("client@acme.com");
    let rule = AccessRule::authenticated()
        .all_of([Permission::ManageUsers])
        .any_of([Permission::ViewContent]);
    assert!(rule.evaluate(&client).is_render());

    let rule = AccessRule::authenticated()
        .all_of([Permission::ViewContent])
        .any_of([Permission::ManageUsers]);
    assert!(!rule.evaluate(&client).is_render());
}

#[test]
fn test_groups_override_any_permission() {
    let editor = session_for("editor@partner.io");
    let rule = AccessRule::authenticated()
        .any_of([Permission::EditContent])
        .in_groups([PermissionGroup::Internal]);
    assert_eq!(rule.evaluate(&editor), GateDecision::Fallback);
}

#[test]
fn test_project_overrides_levels() {
    let editor = session_for("editor@partner.io");
    let rule = AccessRule::authenticated()
        .at_levels([PermissionLevel::Admin])
        .for_project("design-tokens");
    assert_eq!(rule.evaluate(&editor), GateDecision::Render);

    let rule = AccessRule::authenticated()
        .at_levels([PermissionLevel::Editor])
        .for_project("getting-started");
    assert_eq!(rule.evaluate(&editor), GateDecision::Fallback);
}

#[test]
fn test_not_requiring_auth_still_applies_rules() {
    let anonymous = AuthSession::anonymous();
    assert!(AccessRule::public().evaluate(&anonymous).is_render());
    let rule = AccessRule::public().any_of([Permission::ViewContent]);
    assert!(!rule.evaluate(&anonymous).is_render());
}
