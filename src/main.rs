use postboard::config::{database::IN_MEMORY_DATABASE_URL, init_db, Config, Repositories};
use postboard::services::refresh_token::spawn_sweeper;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let repos = if config.database_url == IN_MEMORY_DATABASE_URL {
        tracing::warn!("using in-memory storage; data is lost on exit");
        Repositories::in_memory()
    } else {
        let db = init_db(&config.database_url).await?;
        tracing::info!("Connected to MySQL");
        Repositories::mysql(db)
    };

    let bind_addr = config.bind_addr.clone();
    let sweep_every = config.token_sweep_interval_secs;
    let state = postboard::build_state(repos, config);

    if sweep_every > 0 {
        spawn_sweeper(
            state.sessions.refresh_tokens().clone(),
            Duration::from_secs(sweep_every),
        );
    }

    let app = postboard::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
