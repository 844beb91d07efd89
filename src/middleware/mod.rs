pub mod auth;

pub use auth::{AuthSubject, require_bearer_auth};
