use super::*;
use uuid::Uuid;

fn test_user(superuser: bool) -> User {
    User {
        id: Uuid::nil(),
        email: "user@remity.io".to_owned(),
        full_name: Some("Test User".to_owned()),
        is_active: true,
        is_superuser: superuser,
        created_at: None,
    }
}

// =============================================================
// Startup / restore
// =============================================================

#[test]
fn default_session_is_restore_pending() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_accepted_token_populates_user() {
    let mut state = SessionState::default();
    state.restore_succeeded("tok".to_owned(), test_user(false));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert!(state.is_authenticated());
}

#[test]
fn restore_with_rejected_token_ends_logged_out() {
    let mut state = SessionState::default();
    state.restore_failed();
    assert!(!state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn restore_without_stored_token_just_stops_loading() {
    let mut state = SessionState::default();
    state.restore_missing();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_loading_then_token_and_user() {
    let mut state = SessionState::default();
    state.restore_missing();

    state.begin_login();
    assert!(state.loading);

    state.login_succeeded("tok".to_owned(), test_user(false));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn failed_login_clears_everything() {
    let mut state = SessionState::default();
    state.begin_login();
    state.login_failed();
    assert!(!state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn logout_clears_token_and_user_from_any_state() {
    let mut state = SessionState::default();
    state.login_succeeded("tok".to_owned(), test_user(true));
    assert!(state.is_admin());

    state.logout();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);

    // Idempotent on an already-empty session.
    state.logout();
    assert!(state.token.is_none());
}

#[test]
fn admin_flag_follows_the_user_profile() {
    let mut state = SessionState::default();
    state.login_succeeded("tok".to_owned(), test_user(true));
    assert!(state.is_admin());

    state.login_succeeded("tok".to_owned(), test_user(false));
    assert!(!state.is_admin());
}
