use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::modules::auth::{
    interface::AuthError,
    schema::{LoginRequest, LoginResponse, RefreshTokenResponse},
};
use crate::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AuthError> {
    let result = state.sessions.login(&req.email, &req.password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            user: result.user.into(),
            token: result.access_token,
            refresh_token: result.refresh_token,
        }),
    ))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<RefreshTokenResponse>, AuthError> {
    let token = state.sessions.refresh(&headers).await?;
    Ok(Json(RefreshTokenResponse { token }))
}

/// Always 204, so the response never tells a caller whether the token existed.
pub async fn revoke(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Err(e) = state.sessions.revoke(&headers).await {
        if e.is_server_fault() {
            tracing::error!(error = %e, "refresh token revocation failed");
        } else {
            tracing::warn!(reason = %e, "revoke called without a usable token");
        }
    }

    StatusCode::NO_CONTENT
}
