use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics", get(controller::metrics))
        .route("/reset", post(controller::reset))
}
