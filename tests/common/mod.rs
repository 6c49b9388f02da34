use axum_test::TestServer;
use postboard::{config::{Config, Repositories}, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let state = postboard::build_state(Repositories::in_memory(), config);
        let app = postboard::create_router(state.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, state }
    }

    /// Registers a fresh user and returns `(id, email)`.
    pub async fn create_user(&self) -> (String, String) {
        let email = test_email();

        let response = self
            .server
            .post("/api/users")
            .json(&json!({
                "email": &email,
                "password": test_password()
            }))
            .await;

        let body: Value = response.json();
        (body["id"].as_str().unwrap().to_string(), email)
    }

    pub async fn login(&self, email: &str) -> Value {
        self.server
            .post("/api/login")
            .json(&json!({
                "email": email,
                "password": test_password()
            }))
            .await
            .json()
    }

    /// Registers and logs in; returns `(id, access_token, refresh_token)`.
    pub async fn create_and_login(&self) -> (String, String, String) {
        let (id, email) = self.create_user().await;
        let body = self.login(&email).await;

        (
            id,
            body["token"].as_str().unwrap().to_string(),
            body["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::new("memory", "test-secret-key-for-testing-only", TEST_API_KEY);
    config.rate_limit_per_second = 10_000;
    config.rate_limit_burst = 10_000;
    config
}

// Helper to generate unique test email
#[allow(dead_code)]
pub fn test_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}

// Helper to generate test password
#[allow(dead_code)]
pub fn test_password() -> &'static str {
    "TestPassword123!"
}

/// Same token with its final character swapped for a different one.
#[allow(dead_code)]
pub fn flip_last_char(token: &str) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    if let Some(last) = chars.last_mut() {
        *last = if *last == 'A' { 'B' } else { 'A' };
    }
    chars.into_iter().collect()
}
