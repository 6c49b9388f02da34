use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::interface::{AuthError, Result};

pub const BEARER_SCHEME: &str = "Bearer";
pub const API_KEY_SCHEME: &str = "ApiKey";

/// `Authorization: Bearer <token>`; used for both access and refresh tokens.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String> {
    extract_scheme(headers, BEARER_SCHEME)
}

/// `Authorization: ApiKey <key>`; only the billing webhook accepts this.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    extract_scheme(headers, API_KEY_SCHEME)
}

// Exactly two whitespace-separated fields, scheme matched case-sensitively.
fn extract_scheme(headers: &HeaderMap, scheme: &str) -> Result<String> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MalformedCredential)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(found), Some(credential), None) if found == scheme => Ok(credential.to_string()),
        _ => Err(AuthError::MalformedCredential),
    }
}

/// Byte comparison whose running time does not depend on where the inputs differ.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
