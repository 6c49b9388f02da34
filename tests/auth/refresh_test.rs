use axum::http::StatusCode;

use crate::common::{flip_last_char, TestContext};

#[tokio::test]
async fn refresh_returns_working_access_token() {
    let ctx = TestContext::new();
    let (id, _, refresh_token) = ctx.create_and_login().await;

    let response = ctx
        .server
        .post("/api/refresh")
        .authorization_bearer(&refresh_token)
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();

    let post = ctx
        .server
        .post("/api/posts")
        .authorization_bearer(token)
        .json(&serde_json::json!({ "body": "refreshed" }))
        .await;
    post.assert_status(StatusCode::CREATED);
    let post: serde_json::Value = post.json();
    assert_eq!(post["user_id"], id);
}

#[tokio::test]
async fn refresh_token_is_reusable() {
    let ctx = TestContext::new();
    let (_, _, refresh_token) = ctx.create_and_login().await;

    for _ in 0..3 {
        ctx.server
            .post("/api/refresh")
            .authorization_bearer(&refresh_token)
            .await
            .assert_status(StatusCode::OK);
    }
}

#[tokio::test]
async fn refresh_without_header_returns_unauthorized() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/refresh")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_with_unknown_token_returns_unauthorized() {
    let ctx = TestContext::new();
    let (_, _, refresh_token) = ctx.create_and_login().await;

    ctx.server
        .post("/api/refresh")
        .authorization_bearer(&flip_last_char(&refresh_token))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_with_access_token_returns_unauthorized() {
    let ctx = TestContext::new();
    let (_, access_token, _) = ctx.create_and_login().await;

    ctx.server
        .post("/api/refresh")
        .authorization_bearer(&access_token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
