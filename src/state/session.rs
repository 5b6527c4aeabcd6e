//! Session store: bearer token, cached user profile, and loading flag.
//!
//! DESIGN
//! ======
//! The struct is plain data living in an `RwSignal` provided via context;
//! every mutation goes through the transition methods below so the
//! invariants hold everywhere:
//!
//! - `user` is populated only when `token` is present and was accepted by
//!   the profile endpoint.
//! - `loading` is true only during the startup restore or an in-flight
//!   login call.
//!
//! A failed restore or any 401 response resets the session to logged-out;
//! there is no retry and no error surfaced for an expired stored token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Client-held record of the current login state.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// The app boots with the restore check pending.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }

    /// A login call is in flight.
    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// Credentials accepted and profile fetched.
    pub fn login_succeeded(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Credentials rejected, or the post-login profile fetch failed.
    pub fn login_failed(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// No persisted token was found at startup.
    pub fn restore_missing(&mut self) {
        self.loading = false;
    }

    /// A persisted token was accepted by the profile endpoint.
    pub fn restore_succeeded(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// The persisted token was rejected; treated as "not authenticated"
    /// rather than an error.
    pub fn restore_failed(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Clear token and user unconditionally. Also covers the
    /// authentication-rejected (401) case mid-session.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}
