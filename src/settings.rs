//! Runtime settings from environment variables (a `.env` file is honored by the binary).

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Placeholder owner until users exist.
pub const DEFAULT_OWNER_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub owner_id: i32,
    /// Run `CREATE TABLE IF NOT EXISTS` at startup.
    pub bootstrap_schema: bool,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: "postgres://localhost/todos".into(),
            host: "0.0.0.0".into(),
            port: 3000,
            db_max_connections: 5,
            db_acquire_timeout: Duration::from_secs(5),
            owner_id: DEFAULT_OWNER_ID,
            bootstrap_schema: true,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let d = Settings::default();
        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(d.database_url),
            host: lookup("HOST").unwrap_or(d.host),
            port: parsed(&lookup, "PORT")?.unwrap_or(d.port),
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(d.db_max_connections),
            db_acquire_timeout: parsed(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(d.db_acquire_timeout),
            owner_id: parsed(&lookup, "TODO_OWNER_ID")?.unwrap_or(d.owner_id),
            bootstrap_schema: parsed(&lookup, "TODO_BOOTSTRAP_SCHEMA")?.unwrap_or(d.bootstrap_schema),
            max_body_bytes: parsed(&lookup, "MAX_BODY_BYTES")?.unwrap_or(d.max_body_bytes),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
