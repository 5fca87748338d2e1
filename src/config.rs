//! Application configuration loaded from the environment.

use crate::error::ConfigError;
use std::{env, net::SocketAddr, time::Duration};

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";
/// Default simulated order processing time.
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub catalog_url: String,
    pub checkout_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Reads `SERVER_HOST`, `SERVER_PORT`, `CATALOG_URL` and `CHECKOUT_DELAY_MS`,
    /// loading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => defaults.server_port,
        };
        let catalog_url = lookup("CATALOG_URL").unwrap_or(defaults.catalog_url);
        let checkout_delay = match lookup("CHECKOUT_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ConfigError::InvalidValue {
                    name: "CHECKOUT_DELAY_MS",
                    reason: e.to_string(),
                })?,
            None => defaults.checkout_delay,
        };

        tracing::info!(%catalog_url, server_port, "Application configuration loaded");

        Ok(Self {
            server_host,
            server_port,
            catalog_url,
            checkout_delay,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                reason: e.to_string(),
            })
    }
}
