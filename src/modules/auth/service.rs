use axum::http::HeaderMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::{
    credentials::extract_bearer,
    interface::{AuthError, Result},
};
use crate::modules::users::{model::User, UserRepository};
use crate::services::{hashing::HashingPool, jwt::JwtService, refresh_token::RefreshTokenStore};

const DUMMY_PASSWORD: &str = "postboard-dummy-password";

#[derive(Debug)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Login, refresh and revoke flows, plus the per-request `authenticate`
/// check every protected handler runs before touching data.
pub struct SessionService {
    users: Arc<dyn UserRepository>,
    refresh_tokens: RefreshTokenStore,
    jwt: JwtService,
    hashing: HashingPool,
    dummy_hash: OnceCell<String>,
}

impl SessionService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        refresh_tokens: RefreshTokenStore,
        jwt: JwtService,
        hashing: HashingPool,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            jwt,
            hashing,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Unknown email, wrong password and an unusable stored hash all yield
    /// `InvalidCredentials`; the last is logged as an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult> {
        let Some(user) = self.users.find_by_email(email).await? else {
            // Pay the same argon2 cost as a real check.
            if let Ok(hash) = self.dummy_hash().await {
                let _ = self.hashing.verify(password.to_string(), hash.to_string()).await;
            }
            return Err(AuthError::InvalidCredentials);
        };

        let is_valid = match self
            .hashing
            .verify(password.to_string(), user.password_hash.clone())
            .await
        {
            Ok(is_valid) => is_valid,
            Err(AuthError::HashingFailure(reason)) => {
                tracing::error!(user_id = %user.id, reason = %reason, "stored password hash is unusable");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.jwt.issue(user.id)?;
        let refresh_token = self.refresh_tokens.issue(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginResult {
            user,
            access_token,
            refresh_token: refresh_token.token,
        })
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Uuid> {
        let token = extract_bearer(headers)?;
        self.jwt.validate(&token)
    }

    /// Mints a new access token; the presented refresh token stays valid.
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<String> {
        let token = extract_bearer(headers)?;
        let record = self.refresh_tokens.validate(&token).await?;
        self.jwt.issue(record.user_id)
    }

    pub async fn revoke(&self, headers: &HeaderMap) -> Result<()> {
        let token = extract_bearer(headers)?;
        self.refresh_tokens.revoke(&token).await
    }

    pub fn refresh_tokens(&self) -> &RefreshTokenStore {
        &self.refresh_tokens
    }

    pub fn hashing(&self) -> &HashingPool {
        &self.hashing
    }

    async fn dummy_hash(&self) -> Result<&str> {
        self.dummy_hash
            .get_or_try_init(|| self.hashing.hash(DUMMY_PASSWORD.to_string()))
            .await
            .map(String::as_str)
    }
}
