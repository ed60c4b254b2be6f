use super::*;
use crate::net::error::{Field, ValidationError};

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("/api", "/register"), "/api/register");
    assert_eq!(endpoint("/api/", "login"), "/api/login");
    assert_eq!(endpoint("https://auth.example.com", "/profile"), "https://auth.example.com/profile");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("tok_1"), "Bearer tok_1");
}

#[test]
fn status_error_maps_known_statuses() {
    assert_eq!(status_error(401, None), AuthError::InvalidCredentials);
    assert_eq!(status_error(409, Some("taken".to_owned())), AuthError::DuplicateEmail);
}

#[test]
fn status_error_prefers_server_message() {
    assert_eq!(status_error(500, Some("db down".to_owned())), AuthError::Transport("db down".to_owned()));
    assert_eq!(status_error(500, None), AuthError::Transport("API Error: 500".to_owned()));
}

#[test]
fn unprocessable_with_field_message_is_validation() {
    let err = status_error(422, Some("Please enter a valid email".to_owned()));
    assert_eq!(err, AuthError::Validation(ValidationError::new(Field::Email, "Please enter a valid email")));
    assert_eq!(err.to_string(), "Please enter a valid email");
}

#[test]
fn unprocessable_with_unknown_message_stays_transport() {
    assert_eq!(status_error(422, Some("bad json".to_owned())), AuthError::Transport("bad json".to_owned()));
    assert_eq!(status_error(422, None), AuthError::Transport("API Error: 422".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn revoke_fails_without_browser() {
    let svc = HttpAuthService::new("/api");
    let err = futures::executor::block_on(svc.revoke("tok_1")).unwrap_err();
    assert_eq!(err, AuthError::Transport("not available on server".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_without_browser() {
    let svc = HttpAuthService::new("/api");
    let err = futures::executor::block_on(svc.login(LoginData {
        email: "alice@x.com".to_owned(),
        password: "secret1".to_owned(),
    }))
    .unwrap_err();
    assert_eq!(err, AuthError::Transport("not available on server".to_owned()));
}
