use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(controller::list).post(controller::create))
        .route("/posts/{id}", get(controller::get).delete(controller::delete))
}
