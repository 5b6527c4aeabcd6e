use super::*;
use crate::net::types::User;
use uuid::Uuid;

fn session(loading: bool, user: Option<User>) -> SessionState {
    SessionState {
        token: user.as_ref().map(|_| "tok".to_owned()),
        user,
        loading,
    }
}

fn member() -> User {
    User {
        id: Uuid::nil(),
        email: "user@remity.io".to_owned(),
        full_name: None,
        is_active: true,
        is_superuser: false,
        created_at: None,
    }
}

fn admin() -> User {
    User {
        is_superuser: true,
        ..member()
    }
}

// =============================================================
// Guard decision matrix
// =============================================================

#[test]
fn loading_session_is_pending_never_redirects() {
    assert_eq!(guard_outcome(&session(true, None), false), GuardOutcome::Pending);
    assert_eq!(guard_outcome(&session(true, None), true), GuardOutcome::Pending);
}

#[test]
fn anonymous_visitor_is_sent_to_login() {
    assert_eq!(guard_outcome(&session(false, None), false), GuardOutcome::Login);
    assert_eq!(guard_outcome(&session(false, None), true), GuardOutcome::Login);
}

#[test]
fn member_allowed_on_plain_routes() {
    assert_eq!(
        guard_outcome(&session(false, Some(member())), false),
        GuardOutcome::Allow
    );
}

#[test]
fn member_denied_on_privileged_routes() {
    assert_eq!(
        guard_outcome(&session(false, Some(member())), true),
        GuardOutcome::Deny
    );
}

#[test]
fn admin_allowed_everywhere() {
    assert_eq!(
        guard_outcome(&session(false, Some(admin())), false),
        GuardOutcome::Allow
    );
    assert_eq!(
        guard_outcome(&session(false, Some(admin())), true),
        GuardOutcome::Allow
    );
}

// =============================================================
// Post-login redirect target
// =============================================================

#[test]
fn redirect_target_defaults_to_none() {
    assert_eq!(RedirectTarget::default(), RedirectTarget(None));
}

#[test]
fn login_returns_to_the_recorded_path() {
    let target = post_login_target(Some("/admin".to_owned()), false);
    assert_eq!(target, "/admin");
}

#[test]
fn login_without_a_recorded_path_lands_on_the_role_home() {
    assert_eq!(post_login_target(None, false), "/dashboard");
    assert_eq!(post_login_target(None, true), "/admin");
}
