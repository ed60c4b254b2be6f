//! Auth backends and their shared wire schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` defines the seam the session controller calls through, `mock`
//! and `api` are the two backends behind it, `user_store` is the credential
//! store the mock (and the host server) keep in memory, and `types` and
//! `error` define the contract they all share.

pub mod api;
pub mod error;
pub mod mock;
pub mod service;
pub mod types;
pub mod user_store;
