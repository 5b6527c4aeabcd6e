//! Landing page header with session-dependent navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Brand bar: login/register links for visitors, dashboard/logout for
/// authenticated users.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let dashboard_path = move || {
        if session.with(SessionState::is_admin) {
            "/admin"
        } else {
            "/dashboard"
        }
    };

    let on_logout = move |_| {
        crate::app::sign_out(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Remity"
            </a>
            <nav class="site-header__nav">
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a class="btn" href="/login">
                                "Log in"
                            </a>
                            <a class="btn btn--primary" href="/register">
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a class="btn" href=dashboard_path>
                        "Dashboard"
                    </a>
                    <button class="btn" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
