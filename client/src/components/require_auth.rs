//! Wrapper that gates a protected subtree on the session.
//!
//! DESIGN
//! ======
//! While the startup token check runs the wrapper renders a neutral
//! placeholder instead of redirecting, so a returning user never sees the
//! auth form flash before the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_protected, install_unauth_redirect};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let pathname = location.pathname;

    install_unauth_redirect(auth, move || pathname.get(), use_navigate());

    move || {
        let path = pathname.get();
        match auth.with(|state| guard_protected(state, &path)) {
            GuardDecision::Pending => view! {
                <div class="guard-placeholder" aria-busy="true">
                    <div class="guard-placeholder__line"></div>
                    <div class="guard-placeholder__line guard-placeholder__line--short"></div>
                </div>
            }
            .into_any(),
            GuardDecision::Redirect { .. } => view! {
                <div class="guard-placeholder">
                    <p>"Redirecting..."</p>
                </div>
            }
            .into_any(),
            GuardDecision::Admit => children().into_any(),
        }
    }
}
