//! Shared domain types and errors for the stencil service.

pub mod error;
pub mod types;
