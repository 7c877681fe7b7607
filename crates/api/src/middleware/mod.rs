//! Request middleware extractors.
//!
//! - [`auth::CurrentUser`] -- Validates the bearer session token and exposes
//!   the resolved identity to protected handlers.

pub mod auth;
