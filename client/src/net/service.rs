//! The auth service seam between the session controller and a backend.
//!
//! ARCHITECTURE
//! ============
//! `AuthController` is generic over `AuthService` so tests can drive it
//! with an isolated mock store. The app itself holds `Backend`, which picks
//! the mock or the HTTP client from build configuration.

use std::future::Future;

use crate::config::AuthConfig;

use super::api::HttpAuthService;
use super::error::AuthError;
use super::mock::MockAuthService;
use super::types::{AuthResponse, LoginData, RegisterData, User};

pub trait AuthService: Clone + Send + Sync + 'static {
    /// Create an account and return its first token.
    fn register(&self, data: RegisterData) -> impl Future<Output = Result<AuthResponse, AuthError>>;

    /// Exchange credentials for a token.
    fn login(&self, data: LoginData) -> impl Future<Output = Result<AuthResponse, AuthError>>;

    /// Resolve a previously issued token. `Ok(None)` means the backend does
    /// not recognise it.
    fn resolve(&self, token: &str) -> impl Future<Output = Result<Option<User>, AuthError>>;

    /// Invalidate an issued token. Unknown tokens are not an error.
    fn revoke(&self, token: &str) -> impl Future<Output = Result<(), AuthError>>;
}

/// Backend chosen at startup.
#[derive(Clone)]
pub enum Backend {
    Mock(MockAuthService),
    Http(HttpAuthService),
}

impl Backend {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        match &config.api_base_url {
            Some(base) => Self::Http(HttpAuthService::new(base.clone())),
            None => Self::Mock(MockAuthService::new(config.latency)),
        }
    }
}

impl AuthService for Backend {
    async fn register(&self, data: RegisterData) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Mock(svc) => svc.register(data).await,
            Self::Http(svc) => svc.register(data).await,
        }
    }

    async fn login(&self, data: LoginData) -> Result<AuthResponse, AuthError> {
        match self {
            Self::Mock(svc) => svc.login(data).await,
            Self::Http(svc) => svc.login(data).await,
        }
    }

    async fn resolve(&self, token: &str) -> Result<Option<User>, AuthError> {
        match self {
            Self::Mock(svc) => svc.resolve(token).await,
            Self::Http(svc) => svc.resolve(token).await,
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        match self {
            Self::Mock(svc) => svc.revoke(token).await,
            Self::Http(svc) => svc.revoke(token).await,
        }
    }
}
