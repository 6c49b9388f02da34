use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::StoreError;
use crate::modules::auth::{model::RefreshToken, AuthError, RefreshTokenRepository};

/// Bytes of entropy behind each refresh token (hex-encoded to twice that).
pub const REFRESH_TOKEN_BYTES: usize = 32;

const MAX_ISSUE_ATTEMPTS: usize = 3;

/// Generate cryptographically secure random refresh token
pub fn generate_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Opaque, persisted, long-lived tokens. Validation distinguishes
/// not-found/revoked/expired for logs; callers collapse them to 401.
#[derive(Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepository>,
    lifetime: Duration,
}

impl RefreshTokenStore {
    pub fn new(repo: Arc<dyn RefreshTokenRepository>, lifetime: Duration) -> Self {
        Self { repo, lifetime }
    }

    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, AuthError> {
        self.issue_at(user_id, Utc::now()).await
    }

    pub async fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<RefreshToken, AuthError> {
        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AuthError::Internal("refresh token expiry out of range".to_string()))?;

        for _ in 0..MAX_ISSUE_ATTEMPTS {
            let record = RefreshToken {
                token: generate_token(),
                user_id,
                created_at: now,
                updated_at: now,
                expires_at,
                revoked_at: None,
            };

            match self.repo.insert(&record).await {
                Ok(()) => return Ok(record),
                Err(StoreError::Duplicate) => {
                    tracing::warn!("refresh token collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AuthError::Internal("could not generate a unique refresh token".to_string()))
    }

    pub async fn validate(&self, token: &str) -> Result<RefreshToken, AuthError> {
        self.validate_at(token, Utc::now()).await
    }

    pub async fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<RefreshToken, AuthError> {
        let record = self
            .repo
            .find_by_token(token)
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        if record.is_revoked() {
            return Err(AuthError::TokenRevoked);
        }
        if record.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        Ok(record)
    }

    /// Idempotent; unknown tokens are not an error here.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        self.repo.set_revoked_at(token, Utc::now()).await?;
        Ok(())
    }

    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, AuthError> {
        Ok(self.repo.revoke_all_for_user(user_id, Utc::now()).await?)
    }

    pub async fn purge_stale(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
        Ok(self.repo.delete_stale(now).await?)
    }

    pub async fn clear(&self) -> Result<u64, AuthError> {
        Ok(self.repo.delete_all().await?)
    }
}

/// Periodically deletes expired and revoked rows. Housekeeping only:
/// validation already rejects such rows when it reads them.
pub fn spawn_sweeper(store: RefreshTokenStore, every: std::time::Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match store.purge_stale(Utc::now()).await {
                Ok(0) => {}
                Ok(n) => tracing::info!(removed = n, "purged stale refresh tokens"),
                Err(e) => tracing::error!(error = %e, "refresh token sweep failed"),
            }
        }
    })
}
