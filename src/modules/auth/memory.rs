use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{interface::RefreshTokenRepository, model::RefreshToken};
use crate::error::{StoreError, StoreResult};

/// Process-local refresh token table keyed by token string. Each operation
/// takes the lock once, so a revoke and a lookup never see a half-applied row.
#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    rows: RwLock<HashMap<String, RefreshToken>>,
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn insert(&self, token: &RefreshToken) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&token.token) {
            return Err(StoreError::Duplicate);
        }
        rows.insert(token.token.clone(), token.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> StoreResult<Option<RefreshToken>> {
        Ok(self.rows.read().await.get(token).cloned())
    }

    async fn set_revoked_at(&self, token: &str, at: DateTime<Utc>) -> StoreResult<()> {
        if let Some(row) = self.rows.write().await.get_mut(token) {
            if row.revoked_at.is_none() {
                row.revoked_at = Some(at);
                row.updated_at = at;
            }
        }
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: Uuid, at: DateTime<Utc>) -> StoreResult<u64> {
        let mut revoked = 0;
        for row in self.rows.write().await.values_mut() {
            if row.user_id == user_id && row.revoked_at.is_none() {
                row.revoked_at = Some(at);
                row.updated_at = at;
                revoked += 1;
            }
        }
        Ok(revoked)
    }

    async fn delete_stale(&self, now: DateTime<Utc>) -> StoreResult<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, row| row.is_live_at(now));
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }
}
