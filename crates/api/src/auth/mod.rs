//! Delegated authentication subsystem.
//!
//! Credential and session lifecycle (sign-up, sign-in, sign-out, session
//! introspection) is owned by an external auth service. This module models
//! that collaborator as the [`AuthGateway`] capability trait plus an
//! HTTP-backed implementation, keeping its internals opaque to the rest of
//! the codebase.

pub mod gateway;
pub mod http;

pub use gateway::{AuthGateway, AuthGatewayError, GatewayResponse};
pub use http::HttpAuthGateway;
