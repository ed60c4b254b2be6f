//! Session controller: the single owner of auth state.
//!
//! ARCHITECTURE
//! ============
//! The root `App` constructs one controller and provides it (and its
//! signals) through context. Pages call `login`/`register`/`logout` on it;
//! guards only read `state()`.
//!
//! Failed calls leave `AuthState` exactly as it was apart from clearing the
//! in-flight flag, so resubmitting the same input is always safe. Two
//! overlapping calls are not serialized: whichever finishes last wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::AuthError;
use crate::net::service::AuthService;
use crate::net::types::{AuthResponse, LoginData, RegisterData, User};
use crate::util::token_store::TokenStore;

use super::auth::AuthState;
use super::notice::{NoticeLevel, NoticeState};

#[derive(Clone)]
pub struct AuthController<S, T> {
    service: S,
    tokens: T,
    state: RwSignal<AuthState>,
    notices: RwSignal<NoticeState>,
}

impl<S: AuthService, T: TokenStore> AuthController<S, T> {
    #[must_use]
    pub fn new(service: S, tokens: T) -> Self {
        Self {
            service,
            tokens,
            state: RwSignal::new(AuthState::initializing()),
            notices: RwSignal::new(NoticeState::default()),
        }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    #[must_use]
    pub fn notices(&self) -> RwSignal<NoticeState> {
        self.notices
    }

    #[must_use]
    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Settle the startup state from the stored token.
    ///
    /// A token the backend no longer recognises is cleared and the session
    /// comes up unauthenticated. A backend failure also comes up
    /// unauthenticated but keeps the token for the next load.
    pub async fn restore(&self) {
        let Some(token) = self.tokens.get() else {
            self.settle(None);
            return;
        };

        match self.service.resolve(&token).await {
            Ok(Some(user)) => {
                log::info!("session restored user_id={}", user.id);
                self.settle(Some(user));
            }
            Ok(None) => {
                // A login that finished while this check was in flight has
                // already replaced the stale token.
                if self.tokens.get().as_deref() == Some(token.as_str()) {
                    log::warn!("stored session token rejected; clearing");
                    self.tokens.clear();
                }
                self.settle(None);
            }
            Err(e) => {
                log::warn!("session restore failed: {e}");
                self.settle(None);
            }
        }
    }

    /// Register a new account and sign in as it.
    ///
    /// # Errors
    ///
    /// Propagates the service error; session state is left unchanged.
    pub async fn register(&self, data: RegisterData) -> Result<User, AuthError> {
        self.begin();
        let result = self.service.register(data).await;
        self.finish(result, "Registration successful", "Registration failed")
    }

    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Propagates the service error; session state is left unchanged.
    pub async fn login(&self, data: LoginData) -> Result<User, AuthError> {
        self.begin();
        let result = self.service.login(data).await;
        self.finish(result, "Login successful", "Login failed")
    }

    /// Drop the session. Always succeeds.
    ///
    /// Storage, state and the notice change immediately. The returned future
    /// revokes the old token on the backend; its failure is only logged.
    pub fn logout(&self) -> impl Future<Output = ()> + use<S, T> {
        let token = self.tokens.get();
        self.tokens.clear();
        self.state.update(AuthState::sign_out);
        self.notify(NoticeLevel::Info, "You have been logged out");
        log::info!("session cleared");

        let service = self.service.clone();
        async move {
            let Some(token) = token else { return };
            if let Err(e) = service.revoke(&token).await {
                log::warn!("token revocation failed: {e}");
            }
        }
    }

    fn settle(&self, user: Option<User>) {
        let mut applied = false;
        self.state.update(|s| applied = s.settle(user));
        if !applied {
            log::debug!("session already settled; ignoring stored token result");
        }
    }

    fn begin(&self) {
        self.state.update(|s| s.submitting = true);
    }

    fn finish(
        &self,
        result: Result<AuthResponse, AuthError>,
        success: &str,
        failure: &str,
    ) -> Result<User, AuthError> {
        match result {
            Ok(AuthResponse { user, token }) => {
                self.tokens.set(&token);
                self.state.update(|s| s.sign_in(user.clone()));
                self.notify(NoticeLevel::Success, success);
                log::info!("signed in user_id={}", user.id);
                Ok(user)
            }
            Err(e) => {
                self.state.update(|s| s.submitting = false);
                let message = error_message(&e, failure);
                self.notify(NoticeLevel::Error, message);
                log::warn!("{failure}: {e}");
                Err(e)
            }
        }
    }

    fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        self.notices.update(|n| {
            n.push(level, message);
        });
    }
}

fn error_message(err: &AuthError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
