//! Server configuration loaded from environment variables
//!
//! Values are read after `dotenv` has populated the environment, so a local
//! `.env` file works the same as exported variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use idea_check_domain::providers::huggingface::{HuggingFaceConfig, DEFAULT_MODEL_URL};
use idea_check_domain::services::evaluation::DEFAULT_AI_TOTAL_TIMEOUT;
use thiserror::Error;

/// Default port of the API server
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin, mirrored back so credentials keep working
    Any,
    /// Only the listed origins
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list; `*` anywhere in it allows any origin
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// CORS settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            max_age: Duration::from_secs(3600),
        }
    }
}

/// Full API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Deployment environment reported by the health check
    pub app_env: String,
    pub cors: CorsConfig,
    pub huggingface: HuggingFaceConfig,
    /// Upper bound on the whole AI analysis before falling back
    pub ai_total_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            app_env: "development".to_string(),
            cors: CorsConfig::default(),
            huggingface: HuggingFaceConfig::default(),
            ai_total_timeout: DEFAULT_AI_TOTAL_TIMEOUT,
        }
    }
}

impl ApiConfig {
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

        let host = parse_var(&lookup, "HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let app_env = lookup("APP_ENV").unwrap_or(defaults.app_env);

        let cors = CorsConfig {
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| AllowedOrigins::parse(&raw))
                .unwrap_or(AllowedOrigins::Any),
            ..defaults.cors
        };

        let request_timeout = parse_var::<u64, _>(&lookup, "AI_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.huggingface.request_timeout);
        let ai_total_timeout = parse_var::<u64, _>(&lookup, "AI_TOTAL_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.ai_total_timeout);

        let huggingface = HuggingFaceConfig {
            api_key: lookup("HUGGINGFACE_API_KEY").filter(|key| !key.trim().is_empty()),
            model_url: lookup("HUGGINGFACE_MODEL_URL").unwrap_or_else(|| DEFAULT_MODEL_URL.to_string()),
            request_timeout,
        };

        Ok(Self {
            host,
            port,
            app_env,
            cors,
            huggingface,
            ai_total_timeout,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                name,
                reason: e.to_string(),
                value,
            }),
    }
}
