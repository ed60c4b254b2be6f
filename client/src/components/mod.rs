//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write session state through Leptos context providers
//! installed by `App`.

pub mod auth_form;
pub mod require_auth;
pub mod toasts;
