//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the public entry route apply the same decisions,
//! computed here as pure functions of `AuthState` so they can be tested
//! without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionPhase};

/// Public route holding the auth form.
pub const ENTRY_ROUTE: &str = "/";
/// Default landing route after sign-in.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still running; render a placeholder.
    Pending,
    /// Send the visitor to `to`, remembering the requested location.
    Redirect { to: &'static str, from: String },
    Admit,
}

#[must_use]
pub fn guard_protected(state: &AuthState, requested: &str) -> GuardDecision {
    match state.phase() {
        SessionPhase::Initializing => GuardDecision::Pending,
        SessionPhase::Unauthenticated => {
            GuardDecision::Redirect { to: ENTRY_ROUTE, from: requested.to_owned() }
        }
        SessionPhase::Authenticated(_) => GuardDecision::Admit,
    }
}

/// Where the entry route should send an already authenticated session.
#[must_use]
pub fn entry_redirect(state: &AuthState) -> Option<String> {
    if !state.is_authenticated() {
        return None;
    }
    let target = state
        .return_to
        .as_deref()
        .filter(|path| path.starts_with('/') && !path.starts_with("//") && *path != ENTRY_ROUTE)
        .unwrap_or(DASHBOARD_ROUTE);
    Some(target.to_owned())
}

/// Redirect away from a protected route whenever the settled session has
/// no user, recording the requested path in `return_to`.
pub fn install_unauth_redirect<P, F>(auth: RwSignal<AuthState>, requested: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = requested();
        let decision = auth.with(|state| guard_protected(state, &path));
        if let GuardDecision::Redirect { to, from } = decision {
            auth.update_untracked(|s| s.return_to = Some(from));
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Send an authenticated visitor off the entry route, consuming
/// `return_to`.
pub fn install_entry_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.with(entry_redirect) {
            auth.update_untracked(|s| s.return_to = None);
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
