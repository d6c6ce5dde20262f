//! Process configuration read from the environment

use std::net::SocketAddr;
use thiserror::Error;

use crate::store::{StoreConfig, StoreError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{0}'")]
    BindAddr(String),

    #[error("Unknown STORE_BACKEND '{0}' (expected 'postgres' or 'memory')")]
    Backend(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which [`MessageStore`](crate::store::MessageStore) implementation to run with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres(StoreConfig),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: StoreBackend,
}

impl AppConfig {
    /// Read `BIND_ADDR`, `STORE_BACKEND` and the store variables from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::BindAddr(raw_addr.clone()))?;

        let backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres(StoreConfig::from_lookup(&lookup)?),
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::Backend(other.to_string())),
        };

        Ok(Self { bind_addr, backend })
    }
}
