use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Count of requests served by the static file server since start or
/// the last reset.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn increment(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the count that was cleared.
    pub fn reset(&self) -> u64 {
        self.hits.swap(0, Ordering::Relaxed)
    }
}

/// Middleware counting every request to the wrapped routes
pub async fn count_hits(State(counter): State<Arc<HitCounter>>, req: Request, next: Next) -> Response {
    counter.increment();
    next.run(req).await
}
