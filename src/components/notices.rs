//! Notification rendering and the error-reporting entry point.
//!
//! API failures funnel through [`report_api_error`]: every error becomes a
//! dismissable notice, and an authentication rejection additionally destroys
//! the session so the route guards take over.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::session::SessionState;

/// Queue a notice and schedule its auto-dismissal.
pub fn push_notice(notices: RwSignal<NoticeState>, level: NoticeLevel, message: String) {
    let mut id = 0;
    notices.update(|state| id = state.push(level, message));

    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::callback::Timeout::new(6_000, move || {
            notices.update(|state| state.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Surface a failed API call to the user.
pub fn report_api_error(
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    context: &str,
    err: &ApiError,
) {
    log::warn!("{context}: {err}");
    if matches!(err, ApiError::Unauthorized) {
        crate::app::sign_out(session);
    }
    push_notice(notices, NoticeLevel::Error, err.to_string());
}

/// Stacked notices in the page corner, dismissable by click.
#[component]
pub fn NoticeList() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices">
            <For
                each=move || notices.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Info => "notice notice--info",
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="notice__message">{notice.message.clone()}</span>
                            <button
                                class="notice__dismiss"
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
