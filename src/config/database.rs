use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};
use std::sync::Arc;

use crate::modules::auth::{crud::MySqlRefreshTokenRepository, memory::InMemoryRefreshTokenRepository, RefreshTokenRepository};
use crate::modules::posts::{crud::MySqlPostRepository, memory::InMemoryPostRepository, PostRepository};
use crate::modules::users::{crud::MySqlUserRepository, memory::InMemoryUserRepository, UserRepository};

pub type DbPool = Pool<MySql>;

/// Sentinel `DATABASE_URL` that selects the in-memory repositories.
pub const IN_MEMORY_DATABASE_URL: &str = "memory";

pub async fn init_db(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// The storage collaborators the application is wired against.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub refresh_tokens: Arc<dyn RefreshTokenRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Repositories {
    pub fn mysql(pool: DbPool) -> Self {
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            refresh_tokens: Arc::new(MySqlRefreshTokenRepository::new(pool.clone())),
            posts: Arc::new(MySqlPostRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
            refresh_tokens: Arc::new(InMemoryRefreshTokenRepository::default()),
            posts: Arc::new(InMemoryPostRepository::default()),
        }
    }
}
