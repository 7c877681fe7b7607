use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stencil_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform JSON error envelope:
/// `{ "error": <message> }`, with 500 responses additionally carrying a
/// `"message"` field describing the failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stencil_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, json!({ "error": core.to_string() }))
                }
                CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": core.to_string() }))
                }
                // Display includes the "Unauthorized: " prefix, which is part
                // of the wire contract for auth failures.
                CoreError::Unauthorized(_) => {
                    (StatusCode::UNAUTHORIZED, json!({ "error": core.to_string() }))
                }
                CoreError::Internal(msg) => internal_error_body(msg),
            },
            AppError::Database(err) => internal_error_body(&err.to_string()),
            AppError::Internal(msg) => internal_error_body(msg),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Build the 500 envelope, logging the underlying cause exactly once.
///
/// The real cause goes to the log; the response carries the failure's
/// message text but never distinguishes failure kinds.
fn internal_error_body(cause: &str) -> (StatusCode, serde_json::Value) {
    tracing::error!(error = %cause, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "Internal server error",
            "message": cause,
        }),
    )
}
