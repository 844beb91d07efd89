use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user row. `password_hash` never leaves the service layer;
/// responses are shaped through `handlers::users::UserResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
