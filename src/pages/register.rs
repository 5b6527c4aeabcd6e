//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notices::push_notice;
use crate::net::api;
use crate::net::error::{ApiError, FieldError};
use crate::net::types::UserCreate;
use crate::state::notices::{NoticeLevel, NoticeState};

/// Account creation form. Field-level validation errors from the API render
/// under the form; success routes to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = UserCreate {
            email: email.get_untracked(),
            password: password.get_untracked(),
            full_name: full_name.get_untracked(),
        };
        let navigate = navigate.clone();

        busy.set(true);
        error.set(None);
        field_errors.set(Vec::new());

        leptos::task::spawn_local(async move {
            match api::register(&payload).await {
                Ok(user) => {
                    log::info!("registered {}", user.email);
                    push_notice(
                        notices,
                        NoticeLevel::Success,
                        "Account created. You can log in now.".to_owned(),
                    );
                    navigate("/login", NavigateOptions::default());
                }
                Err(ApiError::Validation { message, fields }) => {
                    error.set(Some(message));
                    field_errors.set(fields);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h2>"Create your account"</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Full name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <ul class="auth-page__field-errors">
                        {move || {
                            field_errors
                                .get()
                                .into_iter()
                                .map(|fe| view! { <li>{format!("{}: {}", fe.field, fe.message)}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
