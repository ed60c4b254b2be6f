use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: "alice@x.com".to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.phase(), SessionPhase::Initializing);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn settle_without_user_is_unauthenticated() {
    let mut state = AuthState::default();
    assert!(state.settle(None));
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn settle_with_user_is_authenticated() {
    let mut state = AuthState::default();
    assert!(state.settle(Some(alice())));
    assert_eq!(state.phase(), SessionPhase::Authenticated(&alice()));
}

#[test]
fn settle_does_not_override_settled_session() {
    let mut state = AuthState::default();
    state.sign_in(alice());
    assert!(!state.settle(None));
    assert!(state.is_authenticated());
}

#[test]
fn sign_in_clears_submitting() {
    let mut state = AuthState { submitting: true, ..AuthState::default() };
    state.sign_in(alice());
    assert!(!state.submitting);
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn sign_out_from_any_phase() {
    let mut loading = AuthState::default();
    loading.sign_out();
    assert_eq!(loading.phase(), SessionPhase::Unauthenticated);

    let mut authed = AuthState::default();
    authed.sign_in(alice());
    authed.sign_out();
    assert_eq!(authed.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn loading_with_user_still_initializing() {
    let state = AuthState { user: Some(alice()), ..AuthState::default() };
    assert_eq!(state.phase(), SessionPhase::Initializing);
    assert!(!state.is_authenticated());
}
