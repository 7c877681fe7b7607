//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use serde::Serialize;
use stencil_core::error::CoreError;
use stencil_core::types::EntityId;
use stencil_db::repositories::{SessionRepo, UserRepo};

use crate::error::AppError;
use crate::state::AppState;

/// Identity resolved from a valid session token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The value lives only for the request; nothing is written back to the
/// session store (no sliding expiration, no revocation here).
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: EntityId,
    pub email: String,
    pub name: String,
}

/// Fixed message for a missing or malformed `Authorization` header.
const MSG_NO_TOKEN: &str = "No Token provided";

/// Fixed message for a token that does not resolve to a live session.
///
/// "not found" and "expired" share this message so a caller cannot tell
/// which case occurred.
const MSG_BAD_TOKEN: &str = "Invalid or expired token";

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(MSG_NO_TOKEN.into())))?;

        // Exact-token lookup. A sqlx error here propagates as a 500 -- a
        // transient datastore failure is surfaced immediately, not retried.
        let session = SessionRepo::find_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(MSG_BAD_TOKEN.into())))?;

        // Strictly-in-the-future check; a session expiring exactly now is
        // already invalid.
        if session.expires_at <= Utc::now() {
            return Err(AppError::Core(CoreError::Unauthorized(MSG_BAD_TOKEN.into())));
        }

        // A dangling user reference is treated as an invalid token rather
        // than an internal error.
        let user = UserRepo::find_by_id(&state.pool, &session.user_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(MSG_BAD_TOKEN.into())))?;

        Ok(CurrentUser {
            id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}
