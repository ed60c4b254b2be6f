//! In-browser mock of the auth API.
//!
//! Wraps a `UserStore` and adds a fixed artificial delay to every call so
//! the UI exercises its in-flight states. The delay is awaited first; the
//! store check and write then run under one lock with no await between
//! them, so back-to-back registrations for one email cannot both pass.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::error::AuthError;
use super::service::AuthService;
use super::types::{AuthResponse, LoginData, RegisterData, User};
use super::user_store::UserStore;

#[derive(Clone)]
pub struct MockAuthService {
    store: Arc<Mutex<UserStore>>,
    latency: Duration,
}

impl MockAuthService {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_store(UserStore::new(), latency)
    }

    #[must_use]
    pub fn with_store(store: UserStore, latency: Duration) -> Self {
        Self { store: Arc::new(Mutex::new(store)), latency }
    }

    /// Number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, UserStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthService for MockAuthService {
    async fn register(&self, data: RegisterData) -> Result<AuthResponse, AuthError> {
        simulate_latency(self.latency).await;
        let result = self.lock().register(&data.name, &data.email, &data.password);
        match &result {
            Ok(resp) => log::info!("mock register ok user_id={}", resp.user.id),
            Err(e) => log::warn!("mock register rejected: {e}"),
        }
        result
    }

    async fn login(&self, data: LoginData) -> Result<AuthResponse, AuthError> {
        simulate_latency(self.latency).await;
        let result = self.lock().login(&data.email, &data.password);
        if let Err(e) = &result {
            log::warn!("mock login rejected: {e}");
        }
        result
    }

    async fn resolve(&self, token: &str) -> Result<Option<User>, AuthError> {
        Ok(self.lock().resolve(token))
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        if !self.lock().revoke(token) {
            log::debug!("mock revoke: token already unknown");
        }
        Ok(())
    }
}

async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Server renders never submit credentials.
        let _ = delay;
    }
}
