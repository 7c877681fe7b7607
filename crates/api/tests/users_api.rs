//! Integration tests for the public `/users` listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get};
use sqlx::PgPool;

/// An empty table yields an empty list, not an error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_users_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/users").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["users"], serde_json::json!([]));
}

/// Seeded rows come back with id, email, and name, newest first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_users_returns_seeded_rows(pool: PgPool) {
    create_test_user(&pool, "u1", "a@b.com", "A").await;
    create_test_user(&pool, "u2", "c@d.com", "C").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/users").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().expect("users must be an array");
    assert_eq!(users.len(), 2);

    for user in users {
        assert!(user["id"].is_string());
        assert!(user["email"].is_string());
        assert!(user["name"].is_string());
    }

    let emails: Vec<&str> = users.iter().map(|u| u["email"].as_str().unwrap()).collect();
    assert!(emails.contains(&"a@b.com"));
    assert!(emails.contains(&"c@d.com"));
}
