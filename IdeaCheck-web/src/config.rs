use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default port of the web client
pub const DEFAULT_PORT: u16 = 3000;

/// Default location of the API server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Web client configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Base URL the browser uses to reach the API, without trailing slash
    pub api_base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl WebConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "HOST", value })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => defaults.port,
        };

        let api_base_url = match lookup("API_BASE_URL") {
            Some(value) => {
                let trimmed = value.trim().trim_end_matches('/');
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue { name: "API_BASE_URL", value });
                }
                trimmed.to_string()
            }
            None => defaults.api_base_url,
        };

        Ok(Self { host, port, api_base_url })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
