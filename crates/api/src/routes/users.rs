//! Route definitions for the public `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at root level.
///
/// ```text
/// GET /users  -> list_users (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(users::list_users))
}
