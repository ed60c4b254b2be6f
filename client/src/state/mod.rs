//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` and `notice` are plain data models; `session` owns them as
//! signals and is the only writer.

pub mod auth;
pub mod notice;
pub mod session;
