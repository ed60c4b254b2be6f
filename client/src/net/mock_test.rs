use futures::executor::block_on;

use super::*;

fn service() -> MockAuthService {
    MockAuthService::new(Duration::ZERO)
}

fn register_data(name: &str, email: &str, password: &str) -> RegisterData {
    RegisterData { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

fn login_data(email: &str, password: &str) -> LoginData {
    LoginData { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn register_then_login_round_trip() {
    let svc = service();
    let registered = block_on(svc.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    let logged_in = block_on(svc.login(login_data("alice@x.com", "secret1"))).unwrap();
    assert_eq!(logged_in.user, registered.user);
    assert_eq!(svc.user_count(), 1);
}

#[test]
fn duplicate_register_keeps_count() {
    let svc = service();
    block_on(svc.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    let err = block_on(svc.register(register_data("Bob", "alice@x.com", "other2"))).unwrap_err();
    assert_eq!(err, AuthError::DuplicateEmail);
    assert_eq!(svc.user_count(), 1);
}

#[test]
fn clones_share_one_store() {
    let svc = service();
    let other = svc.clone();
    block_on(svc.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    assert_eq!(other.user_count(), 1);
}

#[test]
fn separate_instances_are_isolated() {
    let a = service();
    let b = service();
    block_on(a.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    assert_eq!(b.user_count(), 0);
    let err = block_on(b.login(login_data("alice@x.com", "secret1"))).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn resolve_issued_token() {
    let svc = service();
    let resp = block_on(svc.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    assert_eq!(block_on(svc.resolve(&resp.token)).unwrap(), Some(resp.user));
    assert_eq!(block_on(svc.resolve("tok_forged")).unwrap(), None);
}

#[test]
fn revoke_invalidates_token_and_tolerates_repeats() {
    let svc = service();
    let resp = block_on(svc.register(register_data("Alice", "alice@x.com", "secret1"))).unwrap();
    assert_eq!(block_on(svc.resolve(&resp.token)).unwrap(), Some(resp.user));

    block_on(svc.revoke(&resp.token)).unwrap();
    assert_eq!(block_on(svc.resolve(&resp.token)).unwrap(), None);
    block_on(svc.revoke(&resp.token)).unwrap();
}
