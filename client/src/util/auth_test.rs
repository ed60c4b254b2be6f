use super::*;
use crate::net::types::User;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: "alice@x.com".to_owned() }
}

fn settled(user: Option<User>) -> AuthState {
    let mut state = AuthState::initializing();
    state.settle(user);
    state
}

// =============================================================
// guard_protected
// =============================================================

#[test]
fn guard_pending_while_loading() {
    let state = AuthState::initializing();
    assert_eq!(guard_protected(&state, "/dashboard"), GuardDecision::Pending);
}

#[test]
fn guard_redirects_unauth_to_entry_for_any_path() {
    let state = settled(None);
    for path in ["/dashboard", "/dashboard/settings", "/anything"] {
        assert_eq!(
            guard_protected(&state, path),
            GuardDecision::Redirect { to: "/", from: path.to_owned() }
        );
    }
}

#[test]
fn guard_admits_authenticated() {
    let state = settled(Some(alice()));
    assert_eq!(guard_protected(&state, "/dashboard"), GuardDecision::Admit);
}

#[test]
fn guard_ignores_submitting_flag() {
    let mut state = settled(Some(alice()));
    state.submitting = true;
    assert_eq!(guard_protected(&state, "/dashboard"), GuardDecision::Admit);
}

// =============================================================
// entry_redirect
// =============================================================

#[test]
fn entry_stays_put_when_unauthenticated() {
    assert_eq!(entry_redirect(&settled(None)), None);
    assert_eq!(entry_redirect(&AuthState::initializing()), None);
}

#[test]
fn entry_defaults_to_dashboard() {
    assert_eq!(entry_redirect(&settled(Some(alice()))), Some("/dashboard".to_owned()));
}

#[test]
fn entry_prefers_recorded_return_path() {
    let mut state = settled(Some(alice()));
    state.return_to = Some("/dashboard/settings".to_owned());
    assert_eq!(entry_redirect(&state), Some("/dashboard/settings".to_owned()));
}

#[test]
fn entry_ignores_unusable_return_paths() {
    let mut state = settled(Some(alice()));
    state.return_to = Some("/".to_owned());
    assert_eq!(entry_redirect(&state), Some("/dashboard".to_owned()));
    state.return_to = Some("https://evil.example".to_owned());
    assert_eq!(entry_redirect(&state), Some("/dashboard".to_owned()));
    state.return_to = Some("//evil.example".to_owned());
    assert_eq!(entry_redirect(&state), Some("/dashboard".to_owned()));
}
