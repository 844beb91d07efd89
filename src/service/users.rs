use crate::db::{UserRecord, UserStorage};
use crate::error::ApiError;
use crate::security::PasswordHasher;

/// Incoming user fields, pre-validation. The plaintext password lives only
/// for the duration of the request and is hashed before storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// CRUD over user records, with field validation and password hashing in
/// front of the storage layer.
#[derive(Clone)]
pub struct UserService {
    storage: UserStorage,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(storage: UserStorage, hasher: PasswordHasher) -> Self {
        Self { storage, hasher }
    }

    pub async fn create(&self, new_user: NewUser) -> Result<UserRecord, ApiError> {
        validate(&new_user)?;
        let password_hash = self.hasher.hash(&new_user.password)?;
        let id = self
            .storage
            .insert(&new_user.name, &new_user.email, &password_hash)
            .await
            .map_err(|e| map_unique_violation(e, &new_user.email))?;
        self.storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user not found with id: {id}")))
    }

    pub async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.storage.list_all().await
    }

    pub async fn get(&self, id: i64) -> Result<UserRecord, ApiError> {
        self.storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user not found with id: {id}")))
    }

    pub async fn update(&self, id: i64, updated: NewUser) -> Result<UserRecord, ApiError> {
        let existing = self.get(id).await?;
        validate(&updated)?;
        let password_hash = self.hasher.hash(&updated.password)?;
        self.storage
            .update(existing.id, &updated.name, &updated.email, &password_hash)
            .await
            .map_err(|e| map_unique_violation(e, &updated.email))?;
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if !self.storage.exists(id).await? {
            return Err(ApiError::NotFound(format!("user not found with id: {id}")));
        }
        self.storage.delete(id).await
    }
}

/// Reject blank required fields before persistence.
fn validate(user: &NewUser) -> Result<(), ApiError> {
    if user.name.trim().is_empty() {
        return Err(ApiError::Validation("user name must not be blank".to_string()));
    }
    if user.email.trim().is_empty() {
        return Err(ApiError::Validation("user email must not be blank".to_string()));
    }
    if user.password.trim().is_empty() {
        return Err(ApiError::Validation(
            "user password must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// The `users.email` UNIQUE constraint is a user-correctable conflict, not an
/// internal failure.
fn map_unique_violation(err: ApiError, email: &str) -> ApiError {
    if let ApiError::Database(sqlx_err) = &err
        && let Some(db_err) = sqlx_err.as_database_error()
        && db_err.is_unique_violation()
    {
        return ApiError::Validation(format!("email already registered: {email}"));
    }
    err
}
