use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(std::net::AddrParseError),
    #[error("PORT is not in the correct format: {0}")]
    InvalidPort(std::num::ParseIntError),
}

/// Runtime configuration, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// Connection string for the relational store. When unset the service
    /// keeps records in memory for the lifetime of the process.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("HOST") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidHost)?,
            Err(_) => Ipv4Addr::LOCALHOST,
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidPort)?,
            Err(_) => 8080,
        };

        let database_url = std::env::var("DATABASE_URL").ok();

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
