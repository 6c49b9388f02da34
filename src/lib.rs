pub mod config;
pub mod error;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

use config::{Config, Repositories};
use modules::admin::admin_routes;
use modules::auth::{auth_routes, SessionService};
use modules::posts::{post_routes, PostRepository};
use modules::users::{user_routes, UserRepository};
use modules::webhooks::webhook_routes;
use services::hashing::HashingPool;
use services::jwt::JwtService;
use services::metrics::{count_hits, HitCounter};
use services::rate_limit::{create_rate_limiter, RateLimitLayer};
use services::refresh_token::RefreshTokenStore;
use services::security::security_headers;

pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub sessions: SessionService,
    pub hits: Arc<HitCounter>,
}

pub fn build_state(repos: Repositories, config: Config) -> Arc<AppState> {
    let refresh_tokens = RefreshTokenStore::new(repos.refresh_tokens, config.refresh_token_ttl);
    let jwt = JwtService::new(&config.jwt_secret, config.access_token_ttl);
    let hashing = HashingPool::new(config.max_concurrent_password_checks);

    Arc::new(AppState {
        sessions: SessionService::new(repos.users.clone(), refresh_tokens, jwt, hashing),
        users: repos.users,
        posts: repos.posts,
        hits: Arc::new(HitCounter::default()),
        config,
    })
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let rate_limiter = create_rate_limiter(
        state.config.rate_limit_per_second,
        state.config.rate_limit_burst,
    );

    let api = Router::new()
        .route("/healthz", get(readiness))
        .merge(user_routes())
        .merge(auth_routes())
        .merge(post_routes())
        .merge(webhook_routes());

    let files = Router::new()
        .nest_service("/app", ServeDir::new(&state.config.static_dir))
        .layer(middleware::from_fn_with_state(state.hits.clone(), count_hits));

    Router::new()
        .nest("/api", api)
        .nest("/admin", admin_routes())
        .merge(files)
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(RateLimitLayer::new(rate_limiter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn create_app(repos: Repositories, config: Config) -> Router {
    create_router(build_state(repos, config))
}

async fn readiness() -> &'static str {
    "OK"
}
