use axum::{routing::post, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn webhook_routes() -> Router<Arc<AppState>> {
    Router::new().route("/webhooks/billing", post(controller::billing))
}
