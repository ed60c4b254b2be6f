//! Session token persistence.
//!
//! `LocalStorageTokenStore` keeps the single session token in
//! `localStorage`. Requires a browser environment; SSR paths no-op so
//! server rendering always sees "no token".
//!
//! `MemoryTokenStore` holds the token in process memory and backs tests.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

pub trait TokenStore: Clone + Send + Sync + 'static {
    /// Persist `token`, replacing any prior value.
    fn set(&self, token: &str);
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Remove the stored token.
    fn clear(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.set_item(self.key, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.key, token);
        }
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.remove_item(self.key).is_err() {
                    log::warn!("failed to remove session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
