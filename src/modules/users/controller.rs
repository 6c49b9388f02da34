use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, StoreError};
use crate::modules::auth::AuthUser;
use crate::modules::users::{
    model::User,
    schema::{RegisterRequest, UpdateUserRequest, UserResponse},
};
use crate::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let password_hash = state.sessions.hashing().hash(req.password).await?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: req.email,
        password_hash,
        is_premium: false,
        created_at: now,
        updated_at: now,
    };

    state.users.create(&user).await.map_err(|e| match e {
        StoreError::Duplicate => ApiError::Conflict("Email already exists".to_string()),
        other => other.into(),
    })?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Changing credentials ends every other session of the user.
pub async fn update(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let password_hash = state.sessions.hashing().hash(req.password).await?;

    let user = state
        .users
        .update_credentials(user_id, &req.email, &password_hash, Utc::now())
        .await
        .map_err(|e| match e {
            StoreError::Duplicate => ApiError::Conflict("Email already exists".to_string()),
            other => other.into(),
        })?
        .ok_or(ApiError::NotFound)?;

    let revoked = state.sessions.refresh_tokens().revoke_all_for_user(user_id).await?;
    tracing::info!(user_id = %user_id, revoked, "user credentials updated");

    Ok(Json(user.into()))
}
