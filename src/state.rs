//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the credential store behind an async `RwLock`; each handler does
//! its check-and-write inside one lock acquisition.

use std::sync::Arc;

use client::net::user_store::UserStore;
use tokio::sync::RwLock;

/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(users: UserStore) -> Self {
        Self { users: Arc::new(RwLock::new(users)) }
    }
}
