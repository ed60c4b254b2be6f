//! Shared wire DTOs for the auth boundary.
//!
//! DESIGN
//! ======
//! The same types travel through the in-browser mock service, the HTTP
//! client, and the host server's JSON routes, so serde shapes here are the
//! contract for all three.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user as returned by register, login and profile calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Normalized email address; unique across users.
    pub email: String,
}

/// Registration payload for `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Successful register/login result: the user plus a fresh opaque token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Error body returned by the JSON API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
