//! Route definitions for the delegated `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/api/auth`, all forwarded to the auth service.
///
/// ```text
/// POST /sign-up   -> sign_up
/// POST /sign-in   -> sign_in
/// POST /sign-out  -> sign_out
/// GET  /session   -> get_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(auth::sign_up))
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-out", post(auth::sign_out))
        .route("/session", get(auth::get_session))
}
