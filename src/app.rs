//! Root application component: routing, context providers, and the
//! one-shot session restore.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::ProtectedRoute;
use crate::components::notices::NoticeList;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::guard::RedirectTarget;
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;
use crate::util::storage;

/// Clear the session and its persisted token. Used by logout buttons and by
/// the error reporter when any API call comes back 401.
pub fn sign_out(session: RwSignal<SessionState>) {
    session.update(SessionState::logout);
    storage::clear_token();
    log::info!("session cleared");
}

/// Run the startup restore: read the persisted token and validate it
/// against the profile endpoint. A rejected token means "not logged in",
/// never an error; there is no retry.
fn restore_session(session: RwSignal<SessionState>) {
    match storage::read_token() {
        None => session.update(SessionState::restore_missing),
        Some(token) => {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_me(&token).await {
                    Ok(user) => {
                        log::info!("session restored for {}", user.email);
                        session.update(move |s| s.restore_succeeded(token, user));
                    }
                    Err(err) => {
                        log::warn!("session restore failed: {err}");
                        storage::clear_token();
                        session.update(SessionState::restore_failed);
                    }
                }
            });
        }
    }
}

/// Root application component.
///
/// Provides the session, redirect-target, and notification contexts, kicks
/// off the session restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let redirect = RwSignal::new(RedirectTarget::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(redirect);
    provide_context(notices);

    restore_session(session);

    view! {
        <Title text="Remity"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <ProtectedRoute admin=true>
                                <AdminPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>

        <NoticeList/>
    }
}
