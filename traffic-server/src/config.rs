//! Server configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

/// Environment variable naming the route table CSV.
pub const DATA_PATH_VAR: &str = "TRAFFIC_DATA_PATH";
/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "TRAFFIC_BIND_ADDR";
/// Environment variable for the comma-separated CORS origins.
pub const ALLOWED_ORIGINS_VAR: &str = "TRAFFIC_ALLOWED_ORIGINS";

const DEFAULT_DATA_PATH: &str = "data/traffic_data.csv";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Errors in the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address is not `host:port`
    #[error("invalid TRAFFIC_BIND_ADDR {value:?}")]
    InvalidBindAddr { value: String },

    /// A CORS origin is not a valid header value
    #[error("invalid CORS origin {value:?} in TRAFFIC_ALLOWED_ORIGINS")]
    InvalidOrigin { value: String },
}

/// Configuration for the traffic server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the route table CSV.
    pub data_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_VAR).unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_addr })?;

        let origins =
            lookup(ALLOWED_ORIGINS_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin {
                    value: o.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            data_path: PathBuf::from(data_path),
            bind_addr,
            allowed_origins,
        })
    }
}
