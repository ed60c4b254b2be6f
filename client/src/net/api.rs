//! REST client for a real auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls fail with `AuthError::Transport` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped onto the closed `AuthError` set by status,
//! falling back to the server's `message` or a generic status string. A 422
//! carrying one of the form's own field messages comes back as `Validation`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::service::AuthService;
use super::types::{AuthResponse, LoginData, RegisterData, User};
use crate::util::validation::known_failure;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthService {
    base_url: String,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// `GET {base}/{endpoint}` with the bearer token, decoding the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network or decode failure and the mapped status
    /// error on non-2xx responses.
    pub async fn fetch_with_auth<T>(&self, endpoint: &str, token: &str) -> Result<T, AuthError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(endpoint))
                .header("Content-Type", "application/json")
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(endpoint), bearer(token));
            Err(not_available())
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(path))
                .json(body)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(path), body);
            Err(not_available())
        }
    }
}

impl AuthService for HttpAuthService {
    async fn register(&self, data: RegisterData) -> Result<AuthResponse, AuthError> {
        self.post_json("/register", &data).await
    }

    async fn login(&self, data: LoginData) -> Result<AuthResponse, AuthError> {
        self.post_json("/login", &data).await
    }

    async fn resolve(&self, token: &str) -> Result<Option<User>, AuthError> {
        match self.fetch_with_auth::<User>("/profile", token).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthError::InvalidCredentials) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("/logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            let body = resp.json::<super::types::ErrorBody>().await.ok();
            Err(status_error(status, body.and_then(|b| b.message)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint("/logout"), bearer(token));
            Err(not_available())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<super::types::ErrorBody>().await.ok();
        return Err(status_error(status, body.and_then(|b| b.message)));
    }
    resp.json::<T>().await.map_err(|e| AuthError::Transport(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> AuthError {
    AuthError::Transport("not available on server".to_owned())
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) fn status_error(status: u16, message: Option<String>) -> AuthError {
    match status {
        401 => AuthError::InvalidCredentials,
        409 => AuthError::DuplicateEmail,
        422 => match message.as_deref().and_then(known_failure) {
            Some(err) => AuthError::Validation(err),
            None => AuthError::Transport(message.unwrap_or_else(|| format!("API Error: {status}"))),
        },
        _ => AuthError::Transport(message.unwrap_or_else(|| format!("API Error: {status}"))),
    }
}
