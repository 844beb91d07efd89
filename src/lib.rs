pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod security;
pub mod service;

pub use config::Config;
pub use error::ApiError;
pub use router::{AppState, api_router};
