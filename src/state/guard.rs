//! Route-guard decision logic.
//!
//! A pure state machine recomputed on every navigation: while the session is
//! still loading nothing is decided (a placeholder renders instead of a
//! premature redirect); once settled, unauthenticated visitors go to the
//! login page with the requested path recorded for post-login return, and
//! authenticated non-admins are bounced off privileged routes to the user
//! dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::SessionState;

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore still in flight; show a placeholder, do not redirect.
    Pending,
    /// Render the protected view.
    Allow,
    /// Redirect to the login page, recording the requested path.
    Login,
    /// Authenticated but lacking the required privilege; redirect to the
    /// user dashboard.
    Deny,
}

/// Decide what a guarded route does. `require_admin` selects the privileged
/// variant.
pub fn guard_outcome(session: &SessionState, require_admin: bool) -> GuardOutcome {
    if session.loading {
        return GuardOutcome::Pending;
    }
    match &session.user {
        None => GuardOutcome::Login,
        Some(user) if require_admin && !user.is_superuser => GuardOutcome::Deny,
        Some(_) => GuardOutcome::Allow,
    }
}

/// Path a successful login should return to, recorded by the guard when it
/// redirects an unauthenticated visitor. Lives in an `RwSignal` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectTarget(pub Option<String>);

/// Where a successful login lands: the recorded path when a guard sent the
/// visitor to the login page, otherwise the role's home.
pub fn post_login_target(recorded: Option<String>, is_admin: bool) -> String {
    recorded.unwrap_or_else(|| if is_admin { "/admin" } else { "/dashboard" }.to_owned())
}
