//! Process configuration read from the environment.
//!
//! Every setting has a default. A value that is present but unparseable is
//! an error rather than being silently replaced by the default.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use todo_core::StoreConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4242";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    /// Records live in process memory and vanish on exit.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err("expected \"mongo\" or \"memory\"".to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: String,
    pub backend: StoreBackend,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StoreConfig::default();

        let backend = match lookup("TODO_STORE") {
            Some(value) => value.parse::<StoreBackend>().map_err(|reason| ConfigError::Invalid {
                key: "TODO_STORE",
                value,
                reason,
            })?,
            None => StoreBackend::Mongo,
        };

        let connect_timeout = match lookup("MONGODB_CONNECT_TIMEOUT_SECS") {
            Some(value) => parse_secs("MONGODB_CONNECT_TIMEOUT_SECS", value)?,
            None => defaults.connect_timeout,
        };
        let op_timeout = lookup("MONGODB_OP_TIMEOUT_SECS")
            .map(|value| parse_secs("MONGODB_OP_TIMEOUT_SECS", value))
            .transpose()?;

        Ok(Self {
            listen_addr: lookup("TODO_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            backend,
            store: StoreConfig {
                uri: lookup("MONGODB_URI").unwrap_or(defaults.uri),
                database: lookup("MONGODB_DATABASE").unwrap_or(defaults.database),
                collection: lookup("MONGODB_COLLECTION").unwrap_or(defaults.collection),
                connect_timeout,
                op_timeout,
            },
        })
    }
}

fn parse_secs(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(0) => Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
    }
}
