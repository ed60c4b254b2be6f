//! Client runtime configuration.
//!
//! Values are fixed at build time: the WASM bundle has no process
//! environment, so `AUTHPAD_API_URL` is read through `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Simulated round-trip latency of the mock auth service.
pub const MOCK_LATENCY: Duration = Duration::from_millis(800);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub token_key: &'static str,
    pub latency: Duration,
    /// Base URL of a JSON auth API. `None` selects the in-browser mock.
    pub api_base_url: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { token_key: TOKEN_STORAGE_KEY, latency: MOCK_LATENCY, api_base_url: None }
    }
}

impl AuthConfig {
    /// Defaults plus whatever `AUTHPAD_API_URL` held when the crate was built.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self { api_base_url: parse_api_url(option_env!("AUTHPAD_API_URL")), ..Self::default() }
    }
}

pub(crate) fn parse_api_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}
