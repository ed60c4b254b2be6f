//! Closed error taxonomy for auth operations.

use std::fmt;

/// Form field a validation failure points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Form input name used by the auth form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client-side field constraint that failed before any service call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Failure of a register, login or token-resolve call.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password
/// so callers cannot enumerate registered addresses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("User with this email already exists")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Transport(String),
}
