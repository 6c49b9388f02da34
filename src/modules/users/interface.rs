use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::User;
use crate::error::StoreResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `StoreError::Duplicate` if the email is taken.
    async fn create(&self, user: &User) -> StoreResult<()>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    /// Returns the updated row, or `None` if the user does not exist.
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<Option<User>>;
    /// Returns `false` if the user does not exist.
    async fn set_premium(&self, id: Uuid, is_premium: bool, updated_at: DateTime<Utc>) -> StoreResult<bool>;
    async fn delete_all(&self) -> StoreResult<u64>;
}
