//! Startup settings.
//!
//! Built once in `main` and handed to the pool builder and the HTTP server.
//! Sources, lowest precedence first: defaults, an optional `party.toml`,
//! then `PARTY_*` environment variables (`PARTY_DATABASE__URL`, ...).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    /// Pool size, also the number of sync workers serving store messages.
    pub pool_size: u32,
    pub connect_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::with_defaults()?
            .add_source(File::with_name("party").required(false))
            .add_source(
                Environment::with_prefix("PARTY")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize::<Settings>()?.validated()
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("database.pool_size", 5)?
            .set_default("database.connect_timeout_secs", 5)?
            .set_default("database.run_migrations", true)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3033)?
            .set_default("log.filter", "info")
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message("database.url must be set".into()));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::Message("database.pool_size must be positive".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port must be positive".into()));
        }

        Ok(self)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
