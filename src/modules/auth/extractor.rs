use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;
use uuid::Uuid;

use super::interface::AuthError;
use crate::AppState;

/// Id of the user whose access token accompanied the request.
///
/// Taking this as a handler argument gates the handler: any missing,
/// malformed, forged or expired token is rejected with a bare 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        state.sessions.authenticate(&parts.headers).map(AuthUser)
    }
}
