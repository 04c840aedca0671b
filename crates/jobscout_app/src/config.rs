//! Runtime configuration, read from the environment (and `.env` if present).

use std::time::Duration;

use jobscout_client::ClientSettings;
use thiserror::Error;
use url::Url;

use crate::platform::logging::LogDestination;

pub const ENV_BASE_URL: &str = "JOBSCOUT_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "JOBSCOUT_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT: &str = "JOBSCOUT_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_RESPONSE_BYTES: &str = "JOBSCOUT_MAX_RESPONSE_BYTES";
pub const ENV_LOG: &str = "JOBSCOUT_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid http(s) url: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be one of file, terminal, both; got {value:?}")]
    InvalidLogDestination { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ClientSettings::default();
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base = get(ENV_BASE_URL).unwrap_or(defaults.base_url);
        let api_base_url = Url::parse(&base)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or(ConfigError::InvalidUrl {
                key: ENV_BASE_URL,
                value: base.clone(),
            })?;

        let request_timeout = match get(ENV_REQUEST_TIMEOUT) {
            Some(value) => Duration::from_secs(positive(ENV_REQUEST_TIMEOUT, &value)?),
            None => defaults.request_timeout,
        };
        let connect_timeout = match get(ENV_CONNECT_TIMEOUT) {
            Some(value) => Duration::from_secs(positive(ENV_CONNECT_TIMEOUT, &value)?),
            None => defaults.connect_timeout,
        };
        let max_response_bytes = match get(ENV_MAX_RESPONSE_BYTES) {
            Some(value) => positive(ENV_MAX_RESPONSE_BYTES, &value)?,
            None => defaults.max_bytes,
        };
        let log_destination = match get(ENV_LOG) {
            Some(value) => value
                .parse::<LogDestination>()
                .map_err(|_| ConfigError::InvalidLogDestination {
                    key: ENV_LOG,
                    value,
                })?,
            None => LogDestination::File,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            connect_timeout,
            max_response_bytes,
            log_destination,
        })
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base_url.to_string(),
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            max_bytes: self.max_response_bytes,
        }
    }
}

fn positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|number| *number > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
