//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the reqres demo API.
pub const DEFAULT_API_URL: &str = "https://reqres.in/api";

/// Page size used when the remote API cannot report one.
pub const DEFAULT_FALLBACK_PER_PAGE: u32 = 6;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote user API (no trailing slash)
    pub api_url: String,
    /// Optional API key sent as `x-api-key`
    pub api_key: Option<String>,
    /// Path of the JSON file backing the local store
    pub store_path: PathBuf,
    /// Page size used in degraded mode
    pub fallback_per_page: u32,
    /// Timeout applied to every remote request
    pub request_timeout: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            store_path: PathBuf::from(".user-admin/store.json"),
            fallback_per_page: DEFAULT_FALLBACK_PER_PAGE,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("USER_ADMIN_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if api_url.is_empty() {
            return Err(ConfigError::Invalid {
                name: "USER_ADMIN_API_URL",
                value: String::new(),
            });
        }

        Ok(Self {
            api_url,
            api_key: env::var("USER_ADMIN_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            store_path: env::var("USER_ADMIN_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".user-admin/store.json")),
            fallback_per_page: positive_var(
                "USER_ADMIN_FALLBACK_PER_PAGE",
                DEFAULT_FALLBACK_PER_PAGE,
            )?,
            request_timeout: Duration::from_secs(u64::from(positive_var(
                "USER_ADMIN_TIMEOUT_SECS",
                10,
            )?)),
        })
    }
}

/// Read a strictly positive integer variable, falling back to `default` when unset.
fn positive_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::Invalid { name, value: raw }),
        },
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
