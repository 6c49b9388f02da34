use axum::http::{header, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use postboard::services::jwt::JwtService;
use serde_json::json;
use uuid::Uuid;

use crate::common::{flip_last_char, TestContext};

async fn create_post(ctx: &TestContext, token: &str) -> axum_test::TestResponse {
    ctx.server
        .post("/api/posts")
        .authorization_bearer(token)
        .json(&json!({ "body": "hello world" }))
        .await
}

#[tokio::test]
async fn valid_access_token_is_accepted() {
    let ctx = TestContext::new();
    let (id, access_token, _) = ctx.create_and_login().await;

    let response = create_post(&ctx, &access_token).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_id"], id);
}

#[tokio::test]
async fn tampered_access_token_is_rejected() {
    let ctx = TestContext::new();
    let (_, access_token, _) = ctx.create_and_login().await;

    let response = create_post(&ctx, &flip_last_char(&access_token)).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/posts")
        .json(&json!({ "body": "hello world" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_scheme_is_rejected_like_missing_header() {
    let ctx = TestContext::new();
    let (_, access_token, _) = ctx.create_and_login().await;

    let missing = ctx
        .server
        .post("/api/posts")
        .json(&json!({ "body": "hello world" }))
        .await;
    let wrong_scheme = ctx
        .server
        .post("/api/posts")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {access_token}")).unwrap(),
        )
        .json(&json!({ "body": "hello world" }))
        .await;

    missing.assert_status(StatusCode::UNAUTHORIZED);
    wrong_scheme.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(missing.text(), wrong_scheme.text());
}

#[tokio::test]
async fn expired_access_token_is_rejected() {
    let ctx = TestContext::new();
    let (id, _, _) = ctx.create_and_login().await;

    let jwt = JwtService::new("test-secret-key-for-testing-only", Duration::hours(1));
    let expired = jwt
        .issue_at(
            Uuid::parse_str(&id).unwrap(),
            Utc::now() - Duration::hours(2),
            Duration::hours(1),
        )
        .unwrap();

    create_post(&ctx, &expired).await.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let ctx = TestContext::new();
    let (id, _, _) = ctx.create_and_login().await;

    let forged = JwtService::new("some-other-secret", Duration::hours(1))
        .issue(Uuid::parse_str(&id).unwrap())
        .unwrap();

    create_post(&ctx, &forged).await.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_token_cannot_authorize_requests() {
    let ctx = TestContext::new();
    let (_, _, refresh_token) = ctx.create_and_login().await;

    create_post(&ctx, &refresh_token).await.assert_status(StatusCode::UNAUTHORIZED);
}
