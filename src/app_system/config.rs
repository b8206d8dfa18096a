use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// IP address to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Mailbox size of the store actor
    pub store_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            store_buffer: 32,
        }
    }
}

impl Config {
    /// Reads `INVENTORY_HOST`, `INVENTORY_PORT` and `INVENTORY_STORE_BUFFER`,
    /// falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("INVENTORY_HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "INVENTORY_PORT", defaults.port)?,
            store_buffer: parse(&lookup, "INVENTORY_STORE_BUFFER", defaults.store_buffer)?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Invalid {
            key: "INVENTORY_HOST",
            value: self.host.clone(),
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
