use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::AuthError;

/// Value of the `iss` claim on every access token this service mints.
pub const ISSUER: &str = "postboard";

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,        // user id
    pub iat: i64,           // issued at
    pub exp: i64,           // expiration time
}

/// Issues and checks self-contained HS256 access tokens. No storage is
/// consulted; anyone holding the same secret can verify independently.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_duration: Duration,
}

impl JwtService {
    pub fn new(secret: &str, access_token_duration: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_duration,
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.issue_at(user_id, Utc::now(), self.access_token_duration)
    }

    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>, lifetime: Duration) -> Result<String, AuthError> {
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| AuthError::Internal("access token expiry out of range".to_string()))?;

        let claims = Claims {
            iss: ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("signing access token: {e}")))
    }

    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        self.validate_at(token, Utc::now())
    }

    /// Expiry is checked here rather than by the decoder so the boundary is
    /// exact: a token is dead from the second `exp` names, with no leeway.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "access token rejected by decoder");
            AuthError::TokenInvalid
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::TokenInvalid)
    }
}
