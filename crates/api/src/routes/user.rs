//! Route definitions for the protected `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/api/user`. Both require a valid bearer token.
///
/// ```text
/// GET /profile    -> profile
/// GET /dashboard  -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(user::profile))
        .route("/dashboard", get(user::dashboard))
}
