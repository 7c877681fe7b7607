use std::sync::Arc;

use crate::auth::AuthGateway;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stencil_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Delegated auth subsystem (sign-up, sign-in, sign-out, introspection).
    pub auth: Arc<dyn AuthGateway>,
}
