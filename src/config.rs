//! Runtime configuration.
//!
//! Sources, later ones winning: built-in defaults, `config.toml`, then
//! `USERGATE_`-prefixed environment variables (nested fields split on `__`,
//! e.g. `USERGATE_AUTH__SIGNING_SECRET`).

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    pub auth: AuthConfig,
}

/// Secrets consumed by the auth core. The token-signing secret and the
/// bootstrap admin password are deliberately independent of each other and of
/// the database credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub signing_secret: String,
    pub bootstrap_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:usergate.sqlite".to_string(),
            loglevel: "info".to_string(),
            auth: AuthConfig {
                signing_secret: String::new(),
                bootstrap_password: "admin12345".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("USERGATE_").split("__"))
            .extract()
    }
}
