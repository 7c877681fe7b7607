//! Handlers for the delegated `/api/auth` resource.
//!
//! Each handler forwards to the [`AuthGateway`] capability and relays the
//! upstream status and JSON body verbatim. Nothing here interprets the auth
//! service's payloads; only transport failures are handled, as 500s.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::auth::{AuthGatewayError, GatewayResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state.auth.sign_up(body).await)
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state.auth.sign_in(body).await)
}

/// POST /api/auth/sign-out
pub async fn sign_out(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    relay(state.auth.sign_out(bearer_token(&headers)).await)
}

/// GET /api/auth/session
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    relay(state.auth.get_session(bearer_token(&headers)).await)
}

/// Pull the bearer token out of the `Authorization` header, if any.
///
/// The token is passed through to the auth service unmodified; validation
/// is its job for these routes.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Convert a gateway reply into an HTTP response with the upstream status.
fn relay(reply: Result<GatewayResponse, AuthGatewayError>) -> AppResult<Response> {
    let reply = reply.map_err(|e| AppError::Internal(e.to_string()))?;

    let status = StatusCode::from_u16(reply.status)
        .map_err(|e| AppError::Internal(format!("auth service returned invalid status: {e}")))?;

    Ok((status, Json(reply.body)).into_response())
}
