pub mod hashing;
pub mod jwt;
pub mod metrics;
pub mod rate_limit;
pub mod refresh_token;
pub mod security;
