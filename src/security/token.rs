//! JWT issuance and validation.
//!
//! The signing key is derived once from the configured secret and fixed for
//! the process lifetime; the service is constructed at startup and shared
//! read-only across requests.

use crate::error::ApiError;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Tokens live for 24 hours from issuance; expiry is checked lazily at
/// validation time only.
pub const TOKEN_TTL_SECS: i64 = 86_400;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Derive the HS256 signing key as `SHA-256(secret)`, so a secret of any
    /// length satisfies the MAC's minimum key size with uniform output.
    pub fn from_secret(secret: &str) -> Result<Self, ApiError> {
        if secret.is_empty() {
            return Err(ApiError::KeyDerivation(
                "signing secret must not be empty".to_string(),
            ));
        }
        let key: [u8; 32] = Sha256::digest(secret.as_bytes()).into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(&key),
            decoding: DecodingKey::from_secret(&key),
            validation,
        })
    }

    /// Issue a compact signed token for `subject`, expiring in 24 hours.
    pub fn issue(&self, subject: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        self.issue_with_expiry(subject, now, now + TOKEN_TTL_SECS)
    }

    fn issue_with_expiry(&self, subject: &str, iat: i64, exp: i64) -> Result<String, ApiError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the embedded subject. Any
    /// failure collapses to `TokenInvalid` so the caller cannot distinguish
    /// a bad signature from a malformed or expired token.
    pub fn validate(&self, token: &str) -> Result<String, ApiError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| ApiError::TokenInvalid)
    }
}
