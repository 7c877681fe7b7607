//! Handlers for the public `/users` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use stencil_db::models::user::UserResponse;
use stencil_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for `GET /users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// GET /users
///
/// List all users, most recently created first.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = UserRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(UsersResponse { users }))
}
