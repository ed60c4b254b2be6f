//! Auth routes: register, login, bearer-authenticated profile and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use client::net::error::AuthError;
use client::net::types::{AuthResponse, ErrorBody, LoginData, RegisterData, User};
use client::util::validation::{validate_login, validate_register_payload};

use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Error surfaced to HTTP clients as a status code plus `{ "message": … }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Missing or invalid bearer token")]
    Unauthorized,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::DuplicateEmail) => StatusCode::CONFLICT,
            Self::Auth(AuthError::InvalidCredentials) | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Auth(AuthError::Transport(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: Some(self.to_string()) };
        (self.status(), Json(body)).into_response()
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApiError::Unauthorized)?.to_owned();
        let app_state = AppState::from_ref(state);
        let user = app_state
            .users
            .read()
            .await
            .resolve(&token)
            .ok_or(ApiError::Unauthorized)?;
        Ok(Self { user, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/register`: create a user and return `{user, token}`.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterData>,
) -> Result<Json<AuthResponse>, ApiError> {
    let data = validate_register_payload(&body).map_err(AuthError::from)?;
    let result = state.users.write().await.register(&data.name, &data.email, &data.password);
    match result {
        Ok(resp) => {
            tracing::info!(user_id = %resp.user.id, "user registered");
            Ok(Json(resp))
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration rejected");
            Err(e.into())
        }
    }
}

/// `POST /api/login`: exchange credentials for `{user, token}`.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginData>,
) -> Result<Json<AuthResponse>, ApiError> {
    let data = validate_login(&body.email, &body.password).map_err(AuthError::from)?;
    let result = state.users.write().await.login(&data.email, &data.password);
    match result {
        Ok(resp) => {
            tracing::info!(user_id = %resp.user.id, "user logged in");
            Ok(Json(resp))
        }
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            Err(e.into())
        }
    }
}

/// `GET /api/profile`: the user bound to the bearer token.
pub async fn profile(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/logout`: revoke the bearer token.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    state.users.write().await.revoke(&auth.token);
    tracing::info!(user_id = %auth.user.id, "session revoked");
    StatusCode::NO_CONTENT
}
