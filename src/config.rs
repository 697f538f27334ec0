//! Application configuration parsed from environment variables.

use std::time::Duration;

use crate::board::service::DEFAULT_PAGE_SIZE;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub page_size: usize,
    pub session_idle: Duration,
    pub session_sweep: Duration,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: in-memory store when absent or empty
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PAGE_SIZE`: default 5, at least 1
    /// - `SESSION_IDLE_SECS`: default 3600
    /// - `SESSION_SWEEP_SECS`: default 60, at least 1
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first unparsable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let page_size = env_parse("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid { var: "PAGE_SIZE", value: "0".into() });
        }

        let sweep_secs = env_parse("SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS)?;
        if sweep_secs == 0 {
            return Err(ConfigError::Invalid { var: "SESSION_SWEEP_SECS", value: "0".into() });
        }

        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT)?,
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            page_size,
            session_idle: Duration::from_secs(env_parse("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?),
            session_sweep: Duration::from_secs(sweep_secs),
            cookie_secure: env_bool("COOKIE_SECURE")?.unwrap_or(false),
        })
    }
}

fn env_parse<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn env_bool(var: &'static str) -> Result<Option<bool>, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}
