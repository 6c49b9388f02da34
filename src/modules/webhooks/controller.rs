use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::ApiError;
use crate::modules::auth::{
    credentials::{constant_time_eq, extract_api_key},
    AuthError,
};
use crate::modules::webhooks::schema::{BillingEvent, USER_UPGRADED};
use crate::AppState;

/// The API key is checked before the body is parsed, so unauthenticated
/// callers always get 401 whatever they send.
pub async fn billing(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let key = extract_api_key(&headers)?;
    if !constant_time_eq(&key, &state.config.billing_api_key) {
        tracing::warn!("billing webhook presented an unknown api key");
        return Err(AuthError::TokenInvalid.into());
    }

    let event: BillingEvent = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid billing event: {e}")))?;

    if event.event != USER_UPGRADED {
        tracing::debug!(event = %event.event, "ignoring billing event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let found = state
        .users
        .set_premium(event.data.user_id, true, Utc::now())
        .await?;
    if !found {
        return Err(ApiError::NotFound);
    }

    tracing::info!(user_id = %event.data.user_id, "user upgraded to premium");

    Ok(StatusCode::NO_CONTENT)
}
