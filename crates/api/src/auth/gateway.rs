//! Capability trait for the delegated auth collaborator.

use async_trait::async_trait;
use serde_json::Value;

/// An upstream auth-service reply: status code plus opaque JSON body.
///
/// Handlers relay both to the client untouched -- this service never
/// interprets the auth subsystem's payloads.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Value,
}

/// Failure reaching or reading from the auth service.
///
/// Transport failures surface to clients as the generic 500 envelope; the
/// cause is logged server-side only.
#[derive(Debug, thiserror::Error)]
pub enum AuthGatewayError {
    #[error("auth service request failed: {0}")]
    Transport(String),

    #[error("auth service returned a non-JSON body: {0}")]
    InvalidBody(String),
}

/// Operations this service depends on from the delegated auth subsystem.
///
/// Request and response bodies are opaque JSON -- the auth service defines
/// their shape. `sign_out` and `get_session` carry the caller's bearer
/// token through unmodified.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_up(&self, body: Value) -> Result<GatewayResponse, AuthGatewayError>;

    async fn sign_in(&self, body: Value) -> Result<GatewayResponse, AuthGatewayError>;

    async fn sign_out(&self, bearer_token: Option<&str>)
        -> Result<GatewayResponse, AuthGatewayError>;

    async fn get_session(
        &self,
        bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError>;
}
