use async_trait::async_trait;
use uuid::Uuid;

use super::model::Post;
use crate::error::StoreResult;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &Post) -> StoreResult<()>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>>;
    /// Oldest first, optionally restricted to one author.
    async fn list(&self, author_id: Option<Uuid>) -> StoreResult<Vec<Post>>;
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
    async fn delete_all(&self) -> StoreResult<u64>;
}
