use std::env;

use database::{parse_or, ConfigError, DatabaseConnectionInfo};

const DEFAULT_PORT: u16 = 3000;

/// Everything the server reads from its environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub port: u16,
    pub database: DatabaseConnectionInfo,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            database: DatabaseConnectionInfo::from_lookup(&lookup)?,
        })
    }
}
