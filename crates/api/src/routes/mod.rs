pub mod auth;
pub mod health;
pub mod user;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/sign-up        delegated to the auth service (public)
/// /auth/sign-in        delegated to the auth service (public)
/// /auth/sign-out       delegated to the auth service
/// /auth/session        delegated to the auth service
///
/// /user/profile        profile (requires bearer token)
/// /user/dashboard      dashboard (requires bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user", user::router())
}
