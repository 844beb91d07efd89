use crate::db::UserStorage;
use crate::error::ApiError;
use crate::security::{PasswordHasher, TokenService};
use std::sync::Arc;
use tracing::{debug, info};

/// A submitted email/password pair. Exists only within a single request;
/// never persisted as plaintext.
#[derive(Debug)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// Explicit login: credential lookup, password verification, token issuance.
#[derive(Clone)]
pub struct LoginFlow {
    storage: UserStorage,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl LoginFlow {
    pub fn new(storage: UserStorage, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            storage,
            hasher,
            tokens,
        }
    }

    /// Verify `credential` and return a signed token for the account's email.
    ///
    /// The email lookup is not constant time, so response latency can still
    /// hint at account existence; the bcrypt verification itself does not
    /// leak which character differed. Accepted residual risk.
    pub async fn login(&self, credential: Credential) -> Result<String, ApiError> {
        let user = self
            .storage
            .find_by_email(&credential.email)
            .await?
            .ok_or_else(|| {
                debug!(email = %credential.email, "login attempt for unknown email");
                ApiError::NotFound("user not found".to_string())
            })?;

        if !self.hasher.verify(&credential.password, &user.password_hash) {
            debug!(email = %user.email, "login attempt with wrong password");
            return Err(ApiError::InvalidCredential("invalid password".to_string()));
        }

        let token = self.tokens.issue(&user.email)?;
        info!(email = %user.email, "login succeeded, token issued");
        Ok(token)
    }
}
