//! Session model and DTOs.

use sqlx::FromRow;
use stencil_core::types::{EntityId, Timestamp};

/// A session row from the `sessions` table.
///
/// The delegated auth subsystem owns the full lifecycle (issue, rotate,
/// revoke); the authenticator middleware only reads these rows.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: EntityId,
    pub token: String,
    pub user_id: EntityId,
    pub expires_at: Timestamp,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a session row directly (tests and seed tooling only).
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub id: EntityId,
    pub token: String,
    pub user_id: EntityId,
    pub expires_at: Timestamp,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
