//! In-memory credential store.
//!
//! DESIGN
//! ======
//! Records live in an insertion-ordered arena. An email index enforces one
//! record per normalized address and a token index binds issued tokens to
//! records. Nothing is persisted: dropping the store forgets every user.
//!
//! Passwords are kept as salted SHA-256 digests, never in cleartext.

#[cfg(test)]
#[path = "user_store_test.rs"]
mod user_store_test;

use std::collections::HashMap;
use std::fmt::Write;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::error::AuthError;
use super::types::{AuthResponse, User};

/// Generate a fresh opaque session token.
#[must_use]
pub fn generate_token() -> String {
    format!("tok_{}", Uuid::new_v4().simple())
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

struct CredentialRecord {
    user: User,
    password_hash: String,
}

impl CredentialRecord {
    fn matches(&self, password: &str) -> bool {
        hash_password(&self.user.id, password) == self.password_hash
    }
}

/// Credential records keyed by email, plus the tokens issued against them.
#[derive(Default)]
pub struct UserStore {
    records: Vec<CredentialRecord>,
    by_email: HashMap<String, usize>,
    tokens: HashMap<String, usize>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a user and issue its first token.
    ///
    /// # Errors
    ///
    /// `DuplicateEmail` if a record with the same normalized email exists.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let key = email_key(email);
        if self.by_email.contains_key(&key) {
            return Err(AuthError::DuplicateEmail);
        }

        let id = Uuid::new_v4().to_string();
        let password_hash = hash_password(&id, password);
        let user = User { id, name: name.trim().to_owned(), email: key.clone() };

        let idx = self.records.len();
        self.records.push(CredentialRecord { user: user.clone(), password_hash });
        self.by_email.insert(key, idx);

        let token = self.issue_token(idx);
        Ok(AuthResponse { user, token })
    }

    /// Check credentials and issue a new token.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown email or a wrong password alike.
    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let idx = *self
            .by_email
            .get(&email_key(email))
            .ok_or(AuthError::InvalidCredentials)?;
        let record = &self.records[idx];
        if !record.matches(password) {
            return Err(AuthError::InvalidCredentials);
        }
        let user = record.user.clone();
        let token = self.issue_token(idx);
        Ok(AuthResponse { user, token })
    }

    /// Look up the user bound to an issued token.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<User> {
        self.tokens
            .get(token)
            .and_then(|idx| self.records.get(*idx))
            .map(|record| record.user.clone())
    }

    /// Forget an issued token. Returns whether it was known.
    pub fn revoke(&mut self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    fn issue_token(&mut self, idx: usize) -> String {
        let token = generate_token();
        self.tokens.insert(token.clone(), idx);
        token
    }
}
