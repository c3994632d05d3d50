//! Server configuration from the environment (`.env` supported).

use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidWorkers { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Worker count; actix picks one per core when unset
    pub workers: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            workers: None,
        }
    }
}

impl AppConfig {
    /// Read `APP_HOST`, `APP_PORT`, `APP_ALLOWED_ORIGINS` and `APP_WORKERS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("APP_HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("APP_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: "APP_PORT",
                value: port.clone(),
            })?;
        }

        if let Some(origins) = lookup("APP_ALLOWED_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        }

        if let Some(workers) = lookup("APP_WORKERS") {
            let count = workers
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| ConfigError::InvalidWorkers {
                    name: "APP_WORKERS",
                    value: workers.clone(),
                })?;
            config.workers = Some(count);
        }

        Ok(config)
    }
}
