use axum::http::StatusCode;
use serde_json::json;

use crate::common::{test_email, test_password, TestContext};

#[tokio::test]
async fn register_returns_public_user() {
    let ctx = TestContext::new();
    let email = test_email();

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({
            "email": &email,
            "password": test_password()
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], email);
    assert_eq!(body["is_premium"], false);
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let ctx = TestContext::new();
    let (_, email) = ctx.create_user().await;

    ctx.server
        .post("/api/users")
        .json(&json!({
            "email": &email,
            "password": test_password()
        }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_bad_email_and_empty_password() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/users")
        .json(&json!({ "email": "not-an-email", "password": test_password() }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.server
        .post("/api/users")
        .json(&json!({ "email": test_email(), "password": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_changes_credentials() {
    let ctx = TestContext::new();
    let (id, access_token, _) = ctx.create_and_login().await;
    let new_email = test_email();

    let response = ctx
        .server
        .put("/api/users")
        .authorization_bearer(&access_token)
        .json(&json!({
            "email": &new_email,
            "password": "NewPassword456!"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], new_email);

    ctx.server
        .post("/api/login")
        .json(&json!({ "email": &new_email, "password": "NewPassword456!" }))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn update_revokes_existing_sessions() {
    let ctx = TestContext::new();
    let (_, access_token, refresh_token) = ctx.create_and_login().await;

    ctx.server
        .put("/api/users")
        .authorization_bearer(&access_token)
        .json(&json!({ "email": test_email(), "password": "NewPassword456!" }))
        .await
        .assert_status(StatusCode::OK);

    ctx.server
        .post("/api/refresh")
        .authorization_bearer(&refresh_token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_requires_access_token() {
    let ctx = TestContext::new();

    ctx.server
        .put("/api/users")
        .json(&json!({ "email": test_email(), "password": "x" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
