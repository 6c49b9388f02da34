use axum::http::StatusCode;

use crate::common::{test_config, TestContext};

#[tokio::test]
async fn file_server_hits_are_counted() {
    let ctx = TestContext::new();

    ctx.server.get("/app/").await;
    ctx.server.get("/app/").await;
    ctx.server.get("/api/healthz").await.assert_status(StatusCode::OK);

    let response = ctx.server.get("/admin/metrics").await;
    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("visited 2 times"));
    assert_eq!(ctx.state.hits.get(), 2);
}

#[tokio::test]
async fn reset_is_forbidden_outside_dev() {
    let ctx = TestContext::new();
    ctx.create_user().await;

    ctx.server
        .post("/admin/reset")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn reset_in_dev_wipes_users_sessions_and_hits() {
    let mut config = test_config();
    config.platform = "dev".to_string();
    let ctx = TestContext::with_config(config);

    let (_, email) = ctx.create_user().await;
    let login = ctx.login(&email).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();
    ctx.server.get("/app/").await;

    ctx.server
        .post("/admin/reset")
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(ctx.state.hits.get(), 0);
    ctx.server
        .post("/api/refresh")
        .authorization_bearer(&refresh_token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    ctx.server
        .post("/api/login")
        .json(&serde_json::json!({ "email": &email, "password": crate::common::test_password() }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn api_responses_carry_security_headers() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/healthz").await;
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("cache-control"), "no-store");
}
