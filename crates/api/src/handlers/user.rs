//! Handlers for the token-protected `/api/user` resource.
//!
//! These handlers assume the [`CurrentUser`] extractor already validated the
//! session; they perform no further authorization (there is no role model).

use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;

/// Response body for the protected user endpoints.
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub user: CurrentUser,
}

/// GET /api/user/profile
pub async fn profile(user: CurrentUser) -> AppResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        message: "Welcome to your profile!",
        user,
    }))
}

/// GET /api/user/dashboard
pub async fn dashboard(user: CurrentUser) -> AppResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        message: "Welcome to your dashboard!",
        user,
    }))
}
