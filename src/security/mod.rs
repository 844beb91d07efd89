//! Credential hashing and token signing primitives.

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::{Claims, TOKEN_TTL_SECS, TokenService};
