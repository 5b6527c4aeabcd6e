//! Login page.
//!
//! On success the session stores the token, fetches the profile, and
//! navigation returns to the path the route guard recorded, falling back to
//! the role's default dashboard. Failures render the classified error
//! message inline instead of an alert.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::guard::{RedirectTarget, post_login_target};
use crate::state::session::SessionState;
use crate::util::storage;

/// Email/password login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirect = expect_context::<RwSignal<RedirectTarget>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        let navigate = navigate.clone();

        busy.set(true);
        error.set(None);
        session.update(SessionState::begin_login);

        leptos::task::spawn_local(async move {
            match api::login(&email, &password).await {
                Err(err) => {
                    session.update(SessionState::login_failed);
                    error.set(Some(err.to_string()));
                }
                Ok(token) => {
                    storage::write_token(&token.access_token);
                    match api::fetch_me(&token.access_token).await {
                        Err(err) => {
                            storage::clear_token();
                            session.update(SessionState::login_failed);
                            error.set(Some(err.to_string()));
                        }
                        Ok(user) => {
                            log::info!("logged in as {}", user.email);
                            let is_admin = user.is_superuser;
                            session.update(move |s| {
                                s.login_succeeded(token.access_token, user);
                            });

                            let recorded = redirect.get_untracked().0;
                            redirect.set(RedirectTarget(None));
                            let target = post_login_target(recorded, is_admin);
                            navigate(&target, NavigateOptions::default());
                        }
                    }
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h2>"Welcome back"</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
