use chrono::Duration;
use std::{env, path::PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PLATFORM: &str = "prod";
pub const DEV_PLATFORM: &str = "dev";

pub const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;
pub const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 10 * 365;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub billing_api_key: String,
    pub platform: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub max_concurrent_password_checks: usize,
    pub rate_limit_per_second: u32,
    pub rate_limit_burst: u32,
    /// Zero disables the background sweep of stale refresh tokens.
    pub token_sweep_interval_secs: u64,
}

impl Config {
    /// Defaults for everything except the three values an operator must supply.
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
        billing_api_key: impl Into<String>,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            billing_api_key: billing_api_key.into(),
            platform: DEFAULT_PLATFORM.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from("public"),
            access_token_ttl: Duration::hours(1),
            refresh_token_ttl: Duration::days(60),
            max_concurrent_password_checks: 4,
            rate_limit_per_second: 20,
            rate_limit_burst: 50,
            token_sweep_interval_secs: 3600,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let billing_api_key = required("BILLING_API_KEY")?;

        let mut config = Self::new(database_url, jwt_secret, billing_api_key);

        if let Ok(platform) = env::var("PLATFORM") {
            config.platform = platform;
        }
        if let Ok(bind_addr) = env::var("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(secs) = parsed::<i64>("ACCESS_TOKEN_TTL_SECS")? {
            config.access_token_ttl = bounded_ttl(
                "ACCESS_TOKEN_TTL_SECS",
                secs,
                MAX_ACCESS_TOKEN_TTL_SECS,
                Duration::try_seconds,
            )?;
        }
        if let Some(days) = parsed::<i64>("REFRESH_TOKEN_TTL_DAYS")? {
            config.refresh_token_ttl = bounded_ttl(
                "REFRESH_TOKEN_TTL_DAYS",
                days,
                MAX_REFRESH_TOKEN_TTL_DAYS,
                Duration::try_days,
            )?;
        }
        if let Some(n) = parsed("MAX_CONCURRENT_PASSWORD_CHECKS")? {
            config.max_concurrent_password_checks = n;
        }
        if let Some(n) = parsed("RATE_LIMIT_PER_SECOND")? {
            config.rate_limit_per_second = n;
        }
        if let Some(n) = parsed("RATE_LIMIT_BURST")? {
            config.rate_limit_burst = n;
        }
        if let Some(n) = parsed("TOKEN_SWEEP_INTERVAL_SECS")? {
            config.token_sweep_interval_secs = n;
        }

        Ok(config)
    }

    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

// TTLs must lie in 1..=max so token expiry arithmetic cannot overflow.
fn bounded_ttl(
    name: &'static str,
    value: i64,
    max: i64,
    to_duration: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError> {
    (1..=max)
        .contains(&value)
        .then(|| to_duration(value))
        .flatten()
        .ok_or(ConfigError::Invalid {
            name,
            value: value.to_string(),
        })
}

fn parsed<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(None),
    }
}
