use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::modules::auth::{schema::ErrorResponse, AuthError};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure reported by a repository implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate key")]
    Duplicate,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        let duplicate = e
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());

        if duplicate {
            StoreError::Duplicate
        } else {
            StoreError::Database(e)
        }
    }
}

/// Errors surfaced by the non-auth endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Auth(e) => e.status_code(),
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(e) => e.into_response(),
            Self::Store(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
            other => (other.status_code(), Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}
