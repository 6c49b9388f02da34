use async_trait::async_trait;
use sqlx::{MySql, Pool};
use uuid::Uuid;

use super::{interface::PostRepository, model::Post};
use crate::error::StoreResult;

pub struct MySqlPostRepository {
    pool: Pool<MySql>,
}

impl MySqlPostRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn create(&self, post: &Post) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, body, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id)
        .bind(&post.body)
        .bind(post.user_id)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, body, user_id, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list(&self, author_id: Option<Uuid>) -> StoreResult<Vec<Post>> {
        let posts = match author_id {
            Some(author_id) => {
                sqlx::query_as::<_, Post>(
                    r#"
                    SELECT id, body, user_id, created_at, updated_at
                    FROM posts
                    WHERE user_id = ?
                    ORDER BY created_at ASC
                    "#,
                )
                .bind(author_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Post>(
                    "SELECT id, body, user_id, created_at, updated_at FROM posts ORDER BY created_at ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(posts)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM posts").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
