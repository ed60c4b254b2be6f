//! Auth form field validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the auth form and the host server's JSON routes run these checks so
//! malformed input is rejected before it reaches a credential store.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::error::{Field, ValidationError};
use crate::net::types::{LoginData, RegisterData};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;

const MSG_NAME: &str = "Name must be at least 2 characters";
const MSG_EMAIL: &str = "Please enter a valid email";
const MSG_PASSWORD: &str = "Password must be at least 6 characters";
const MSG_CONFIRM: &str = "Please confirm your password";
const MSG_MISMATCH: &str = "Passwords do not match";

/// Trim and lowercase an email, returning `None` unless it looks like
/// `local@domain.tld`.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let (host, tld) = domain.rsplit_once('.')?;
    if host.is_empty() || tld.is_empty() || host.starts_with('.') {
        return None;
    }
    Some(normalized)
}

/// Validate the login form and build the service payload.
///
/// # Errors
///
/// Returns the first failing field constraint.
pub fn validate_login(email: &str, password: &str) -> Result<LoginData, ValidationError> {
    let email = normalize_email(email).ok_or(ValidationError::new(Field::Email, MSG_EMAIL))?;
    check_password(password)?;
    Ok(LoginData { email, password: password.to_owned() })
}

/// Validate the registration form and build the service payload. The
/// confirmation field is checked here and dropped from the payload.
///
/// # Errors
///
/// Returns the first failing field constraint.
pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterData, ValidationError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::new(Field::Name, MSG_NAME));
    }
    let email = normalize_email(email).ok_or(ValidationError::new(Field::Email, MSG_EMAIL))?;
    check_password(password)?;
    if confirm_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(Field::ConfirmPassword, MSG_CONFIRM));
    }
    if password != confirm_password {
        return Err(ValidationError::new(Field::ConfirmPassword, MSG_MISMATCH));
    }
    Ok(RegisterData { name: name.to_owned(), email, password: password.to_owned() })
}

/// Re-check a payload that arrived without a confirmation field (JSON API).
///
/// # Errors
///
/// Returns the first failing field constraint.
pub fn validate_register_payload(data: &RegisterData) -> Result<RegisterData, ValidationError> {
    validate_register(&data.name, &data.email, &data.password, &data.password)
}

/// Recover the typed failure behind a message produced by these checks,
/// e.g. from a host's 422 response body.
#[must_use]
pub fn known_failure(message: &str) -> Option<ValidationError> {
    let (field, known) = match message {
        MSG_NAME => (Field::Name, MSG_NAME),
        MSG_EMAIL => (Field::Email, MSG_EMAIL),
        MSG_PASSWORD => (Field::Password, MSG_PASSWORD),
        MSG_CONFIRM => (Field::ConfirmPassword, MSG_CONFIRM),
        MSG_MISMATCH => (Field::ConfirmPassword, MSG_MISMATCH),
        _ => return None,
    };
    Some(ValidationError::new(field, known))
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(Field::Password, MSG_PASSWORD));
    }
    Ok(())
}
