//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stencil_core::types::{EntityId, Timestamp};

/// Full user row from the `users` table.
///
/// Rows are created and maintained by the delegated auth subsystem; this
/// service only ever reads them.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public user representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a user row directly (used by tests and seed tooling;
/// production rows come from the auth subsystem).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: EntityId,
    pub email: String,
    pub name: String,
}
