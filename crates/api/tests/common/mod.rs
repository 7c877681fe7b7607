//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use stencil_api::auth::{AuthGateway, AuthGatewayError, GatewayResponse};
use stencil_api::config::ServerConfig;
use stencil_api::router::build_app_router;
use stencil_api::state::AppState;
use stencil_db::models::session::CreateSession;
use stencil_db::models::user::{CreateUser, User};
use stencil_db::repositories::{SessionRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth_service_url: "http://127.0.0.1:4000".to_string(),
    }
}

/// Stand-in auth service that answers every operation with a canned reply.
pub struct MockAuthGateway;

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_up(&self, _body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        Ok(GatewayResponse {
            status: 200,
            body: json!({ "mock": "sign-up" }),
        })
    }

    async fn sign_in(&self, _body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        Ok(GatewayResponse {
            status: 200,
            body: json!({ "mock": "sign-in" }),
        })
    }

    async fn sign_out(
        &self,
        _bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        Ok(GatewayResponse {
            status: 200,
            body: json!({ "mock": "sign-out" }),
        })
    }

    async fn get_session(
        &self,
        bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        Ok(GatewayResponse {
            status: 200,
            body: json!({ "mock": "session", "had_token": bearer_token.is_some() }),
        })
    }
}

/// Stand-in auth service whose transport always fails.
pub struct FailingAuthGateway;

#[async_trait]
impl AuthGateway for FailingAuthGateway {
    async fn sign_up(&self, _body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        Err(AuthGatewayError::Transport("connection refused".into()))
    }

    async fn sign_in(&self, _body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        Err(AuthGatewayError::Transport("connection refused".into()))
    }

    async fn sign_out(
        &self,
        _bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        Err(AuthGatewayError::Transport("connection refused".into()))
    }

    async fn get_session(
        &self,
        _bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        Err(AuthGatewayError::Transport("connection refused".into()))
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a mock auth gateway.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_gateway(pool, Arc::new(MockAuthGateway))
}

/// Like [`build_test_app`] but with a caller-supplied auth gateway.
pub fn build_test_app_with_gateway(pool: PgPool, auth: Arc<dyn AuthGateway>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        auth,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a user row directly in the database.
pub async fn create_test_user(pool: &PgPool, id: &str, email: &str, name: &str) -> User {
    let input = CreateUser {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Insert a session row for `user_id` expiring `ttl_hours` from now
/// (negative values produce an already-expired session).
pub async fn create_test_session(pool: &PgPool, token: &str, user_id: &str, ttl_hours: i64) {
    let input = CreateSession {
        id: format!("sess-{token}"),
        token: token.to_string(),
        user_id: user_id.to_string(),
        expires_at: Utc::now() + Duration::hours(ttl_hours),
        ip_address: None,
        user_agent: None,
    };
    SessionRepo::create(pool, &input)
        .await
        .expect("session creation should succeed");
}
