use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

pub async fn metrics(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(format!(
        r#"<html>
  <body>
    <h1>Welcome, Postboard Admin</h1>
    <p>Postboard has been visited {} times!</p>
  </body>
</html>
"#,
        state.hits.get()
    ))
}

/// Wipes all users (and with them their posts and sessions). Dev platform only.
pub async fn reset(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    if !state.config.is_dev() {
        return Err(ApiError::Forbidden);
    }

    state.posts.delete_all().await?;
    state.sessions.refresh_tokens().clear().await?;
    let users = state.users.delete_all().await?;
    state.hits.reset();

    tracing::warn!(users, "development reset wiped all data");

    Ok(StatusCode::OK)
}
