use log::info;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Path every route is nested under; empty for none
    pub route_prefix: String,
    pub static_dir: PathBuf,
    /// Serve through the Lambda runtime instead of a TCP listener
    pub lambda: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            route_prefix: String::new(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            lambda: false,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let route_prefix = lookup("API_PREFIX")
            .map(|p| p.trim_end_matches('/').to_string())
            .unwrap_or_default();
        if !route_prefix.is_empty() && !route_prefix.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "API_PREFIX",
                value: route_prefix,
                reason: "must start with '/'".to_string(),
            });
        }

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let lambda = lookup("AWS_LAMBDA_RUNTIME_API").is_some();

        let config = Self {
            host,
            port,
            route_prefix,
            static_dir,
            lambda,
        };
        info!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                name: "HOST",
                value: self.host.clone(),
                reason: e.to_string(),
            })
    }
}
