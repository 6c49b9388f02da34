use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{model::RefreshToken, schema::ErrorResponse};
use crate::error::{StoreError, StoreResult};

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

pub type Result<T> = std::result::Result<T, AuthError>;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Fails with `StoreError::Duplicate` if the token string is taken.
    async fn insert(&self, token: &RefreshToken) -> StoreResult<()>;
    async fn find_by_token(&self, token: &str) -> StoreResult<Option<RefreshToken>>;
    /// No-op for unknown or already revoked tokens.
    async fn set_revoked_at(&self, token: &str, at: DateTime<Utc>) -> StoreResult<()>;
    async fn revoke_all_for_user(&self, user_id: Uuid, at: DateTime<Utc>) -> StoreResult<u64>;
    /// Removes rows that are expired or revoked as of `now`.
    async fn delete_stale(&self, now: DateTime<Utc>) -> StoreResult<u64>;
    async fn delete_all(&self) -> StoreResult<u64>;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed credential")]
    MalformedCredential,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token not found")]
    TokenNotFound,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Hashing failure: {0}")]
    HashingFailure(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_server_fault() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::UNAUTHORIZED
        }
    }

    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::HashingFailure(_) | Self::Store(_) | Self::Internal(_)
        )
    }
}

/// Every client-side failure renders the same 401 body; which step failed
/// is only written to the server log.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_server_fault() {
            tracing::error!(error = %self, "authentication fault");
            "Internal server error"
        } else {
            tracing::warn!(reason = %self, "request unauthorized");
            "Unauthorized"
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
