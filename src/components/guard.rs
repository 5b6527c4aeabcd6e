//! Route-guard component wrapping protected views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::guard::{GuardOutcome, RedirectTarget, guard_outcome};
use crate::state::session::SessionState;

/// Gate rendering of a protected view on the session state.
///
/// Plain variant requires any authenticated session; `admin=true` adds the
/// superuser requirement. While the session restore is in flight a
/// placeholder renders instead of a premature redirect. Unauthenticated
/// visitors are sent to the login page with the requested path recorded for
/// post-login return; authenticated non-admins are sent to the dashboard.
#[component]
pub fn ProtectedRoute(#[prop(optional)] admin: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let redirect = expect_context::<RwSignal<RedirectTarget>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || match guard_outcome(&session.get(), admin) {
        GuardOutcome::Login => {
            let requested = location.pathname.get_untracked();
            redirect.set(RedirectTarget(Some(requested)));
            navigate("/login", NavigateOptions::default());
        }
        GuardOutcome::Deny => {
            navigate("/dashboard", NavigateOptions::default());
        }
        GuardOutcome::Pending | GuardOutcome::Allow => {}
    });

    view! {
        <Show
            when=move || guard_outcome(&session.get(), admin) == GuardOutcome::Allow
            fallback=|| view! { <p class="route-guard__placeholder">"Checking your session..."</p> }
        >
            {children()}
        </Show>
    }
}
