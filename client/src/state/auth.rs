//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Held in an `RwSignal` owned by
//! `AuthController`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only until the startup token check settles.
/// `submitting` tracks an in-flight register/login call and never affects
/// routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub submitting: bool,
    /// Protected location the guard bounced away from, kept for the
    /// post-login redirect.
    pub return_to: Option<String>,
}

/// The three externally observable session states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase<'a> {
    Initializing,
    Unauthenticated,
    Authenticated(&'a User),
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initializing()
    }
}

impl AuthState {
    #[must_use]
    pub fn initializing() -> Self {
        Self { user: None, loading: true, submitting: false, return_to: None }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase<'_> {
        match (&self.user, self.loading) {
            (_, true) => SessionPhase::Initializing,
            (None, false) => SessionPhase::Unauthenticated,
            (Some(user), false) => SessionPhase::Authenticated(user),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase(), SessionPhase::Authenticated(_))
    }

    /// Finish the startup check. Returns `false` and changes nothing if the
    /// session already settled.
    pub fn settle(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        self.user = user;
        true
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.submitting = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.submitting = false;
    }
}
