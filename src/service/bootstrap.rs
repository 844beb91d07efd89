//! One-time admin account creation.
//!
//! The durable state is the single `app_init` row; once its flag flips to 1
//! it never reverts. The flag claim and the admin insert share one
//! transaction (see `UserStorage::initialize_with_admin`), so concurrent
//! first-requests produce exactly one admin row and one successful response.

use crate::db::UserStorage;
use crate::error::ApiError;
use crate::security::{PasswordHasher, TokenService};
use std::sync::Arc;
use tracing::info;

/// Reserved address of the account created by bootstrap.
pub const ADMIN_EMAIL: &str = "admin@gmail.com";

const ADMIN_NAME: &str = "Admin";

#[derive(Clone)]
pub struct BootstrapCoordinator {
    storage: UserStorage,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    admin_password: Arc<str>,
}

impl BootstrapCoordinator {
    pub fn new(
        storage: UserStorage,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
        admin_password: Arc<str>,
    ) -> Self {
        Self {
            storage,
            hasher,
            tokens,
            admin_password,
        }
    }

    /// Create the admin account exactly once and return a token for it.
    /// Every call after the first fails with `AlreadyBootstrapped`.
    pub async fn run(&self) -> Result<String, ApiError> {
        // Fast path: skip the hashing cost when the flag is already set.
        // The transactional claim below remains the authoritative guard.
        if self.storage.is_initialized().await? {
            return Err(ApiError::AlreadyBootstrapped);
        }

        let password_hash = self.hasher.hash(&self.admin_password)?;
        let claimed = self
            .storage
            .initialize_with_admin(ADMIN_NAME, ADMIN_EMAIL, &password_hash)
            .await?;
        if !claimed {
            // Lost the race to a concurrent bootstrap call.
            return Err(ApiError::AlreadyBootstrapped);
        }

        // The admin row was just committed; absence here is an invariant
        // violation, not a user error.
        let admin = self
            .storage
            .find_by_email(ADMIN_EMAIL)
            .await?
            .ok_or(ApiError::AdminNotFound)?;

        let token = self.tokens.issue(&admin.email)?;
        info!(email = %admin.email, "bootstrap completed, admin account ready");
        Ok(token)
    }
}
