//! Business logic orchestrating storage, hashing, and token issuance.

pub mod auth;
pub mod bootstrap;
pub mod users;

pub use auth::{Credential, LoginFlow};
pub use bootstrap::{ADMIN_EMAIL, BootstrapCoordinator};
pub use users::{NewUser, UserService};
