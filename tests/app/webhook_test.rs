use axum::http::{header, HeaderValue, StatusCode};
use serde_json::json;

use crate::common::{TestContext, TEST_API_KEY};

fn api_key(key: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("ApiKey {key}")).unwrap()
}

#[tokio::test]
async fn upgrade_event_marks_user_premium() {
    let ctx = TestContext::new();
    let (id, email) = ctx.create_user().await;

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key(TEST_API_KEY))
        .json(&json!({ "event": "user.upgraded", "data": { "user_id": &id } }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let login = ctx.login(&email).await;
    assert_eq!(login["is_premium"], true);
}

#[tokio::test]
async fn other_events_are_ignored() {
    let ctx = TestContext::new();
    let (id, email) = ctx.create_user().await;

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key(TEST_API_KEY))
        .json(&json!({ "event": "user.downgraded", "data": { "user_id": &id } }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let login = ctx.login(&email).await;
    assert_eq!(login["is_premium"], false);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key(TEST_API_KEY))
        .json(&json!({ "event": "user.upgraded", "data": { "user_id": uuid::Uuid::new_v4() } }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_or_missing_key_is_unauthorized() {
    let ctx = TestContext::new();
    let (id, _) = ctx.create_user().await;
    let event = json!({ "event": "user.upgraded", "data": { "user_id": &id } });

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key("wrong"))
        .json(&event)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {TEST_API_KEY}")).unwrap(),
        )
        .json(&event)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    ctx.server
        .post("/api/webhooks/billing")
        .json(&event)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn key_is_checked_before_the_body() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key("wrong"))
        .text("{not json")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    ctx.server
        .post("/api/webhooks/billing")
        .text("{not json")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    ctx.server
        .post("/api/webhooks/billing")
        .add_header(header::AUTHORIZATION, api_key(TEST_API_KEY))
        .text("{not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_upgrade_is_still_found() {
    let ctx = TestContext::new();
    let (id, email) = ctx.create_user().await;
    let event = json!({ "event": "user.upgraded", "data": { "user_id": &id } });

    for _ in 0..2 {
        ctx.server
            .post("/api/webhooks/billing")
            .add_header(header::AUTHORIZATION, api_key(TEST_API_KEY))
            .json(&event)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let login = ctx.login(&email).await;
    assert_eq!(login["is_premium"], true);
}
