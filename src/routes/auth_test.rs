use axum::http::{HeaderValue, Request};

use super::*;

fn register_body(name: &str, email: &str, password: &str) -> Json<RegisterData> {
    Json(RegisterData { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn login_body(email: &str, password: &str) -> Json<LoginData> {
    Json(LoginData { email: email.to_owned(), password: password.to_owned() })
}

fn parts_with_auth(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/profile");
    if let Some(value) = value {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();
    parts
}

async fn extract(state: &AppState, value: Option<&str>) -> Result<AuthUser, ApiError> {
    let mut parts = parts_with_auth(value);
    AuthUser::from_request_parts(&mut parts, state).await
}

// =============================================================================
// bearer_token
// =============================================================================

#[test]
fn bearer_token_parses_scheme_case_insensitively() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer tok_1"));
    assert_eq!(bearer_token(&headers), Some("tok_1"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer  tok_2 "));
    assert_eq!(bearer_token(&headers), Some("tok_2"));
}

#[test]
fn bearer_token_rejects_other_schemes_and_blanks() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));
    assert_eq!(bearer_token(&headers), None);
}

// =============================================================================
// ApiError
// =============================================================================

#[test]
fn api_error_status_mapping() {
    assert_eq!(ApiError::from(AuthError::DuplicateEmail).status(), StatusCode::CONFLICT);
    assert_eq!(ApiError::from(AuthError::InvalidCredentials).status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        ApiError::from(AuthError::Transport("x".to_owned())).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn api_error_response_carries_status() {
    let resp = ApiError::from(AuthError::DuplicateEmail).into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn register_then_duplicate() {
    let state = AppState::default();
    let Json(resp) = register(State(state.clone()), register_body("Alice", "alice@x.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(resp.user.email, "alice@x.com");
    assert!(!resp.token.is_empty());

    let err = register(State(state.clone()), register_body("Bob", "alice@x.com", "other2"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(state.users.read().await.len(), 1);
}

#[tokio::test]
async fn register_rejects_invalid_payload() {
    let state = AppState::default();
    let err = register(State(state.clone()), register_body("Alice", "not-an-email", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.to_string(), "Please enter a valid email");
    assert!(state.users.read().await.is_empty());
}

#[tokio::test]
async fn login_wrong_password_and_unknown_email_match() {
    let state = AppState::default();
    register(State(state.clone()), register_body("Alice", "alice@x.com", "secret1"))
        .await
        .unwrap();

    let wrong = login(State(state.clone()), login_body("alice@x.com", "wrong1")).await.unwrap_err();
    let unknown = login(State(state.clone()), login_body("bob@x.com", "secret1")).await.unwrap_err();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), unknown.status());
    assert_eq!(wrong.to_string(), unknown.to_string());

    let Json(ok) = login(State(state), login_body("alice@x.com", "secret1")).await.unwrap();
    assert_eq!(ok.user.name, "Alice");
}

#[tokio::test]
async fn profile_requires_valid_bearer() {
    let state = AppState::default();
    let Json(resp) = register(State(state.clone()), register_body("Alice", "alice@x.com", "secret1"))
        .await
        .unwrap();

    assert!(matches!(extract(&state, None).await, Err(ApiError::Unauthorized)));
    assert!(matches!(extract(&state, Some("Bearer tok_forged")).await, Err(ApiError::Unauthorized)));

    let header_value = format!("Bearer {}", resp.token);
    let auth = extract(&state, Some(&header_value)).await.unwrap();
    let Json(user) = profile(auth).await;
    assert_eq!(user, resp.user);
}

#[tokio::test]
async fn logout_revokes_token() {
    let state = AppState::default();
    let Json(resp) = register(State(state.clone()), register_body("Alice", "alice@x.com", "secret1"))
        .await
        .unwrap();
    let header_value = format!("Bearer {}", resp.token);

    let auth = extract(&state, Some(&header_value)).await.unwrap();
    assert_eq!(logout(State(state.clone()), auth).await, StatusCode::NO_CONTENT);
    assert!(matches!(extract(&state, Some(&header_value)).await, Err(ApiError::Unauthorized)));
}
