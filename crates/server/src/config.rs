use std::{net::SocketAddr, str::FromStr, time::Duration};

use database::schema::RetryPolicy;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_init: RetryPolicy,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;

        let defaults = RetryPolicy::default();
        let attempts = parse_or(&lookup, "DB_INIT_ATTEMPTS", Some(defaults.attempts))?;
        let delay_ms: u64 = parse_or(
            &lookup,
            "DB_INIT_DELAY_MS",
            Some(defaults.initial_delay.as_millis() as u64),
        )?;

        Ok(Self {
            database_url,
            bind_addr,
            db_init: RetryPolicy {
                attempts,
                initial_delay: Duration::from_millis(delay_ms),
                ..defaults
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}
