pub mod database;
pub mod environment;

pub use database::{init_db, DbPool, Repositories};
pub use environment::{Config, ConfigError};
