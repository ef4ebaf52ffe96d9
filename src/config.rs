// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the training backend
    pub api_url: Url,
    /// File holding the persisted bearer token
    pub token_cache_path: PathBuf,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_url: Url::parse("http://localhost:8000").expect("static URL is valid"),
            token_cache_path: PathBuf::from(".training-tracker-session.json"),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let raw_url = env::var("API_URL").map_err(|_| ConfigError::Missing("API_URL"))?;
        let api_url = Url::parse(raw_url.trim())
            .map_err(|e| ConfigError::Invalid("API_URL", e.to_string()))?;

        let token_cache_path = env::var("TOKEN_CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_cache_path());

        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid("REQUEST_TIMEOUT_SECS", e.to_string()))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            token_cache_path,
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Config pointing at a specific backend, other fields defaulted.
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        let api_url =
            Url::parse(api_url).map_err(|e| ConfigError::Invalid("API_URL", e.to_string()))?;
        Ok(Self {
            api_url,
            ..Self::default()
        })
    }
}

fn default_token_cache_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("training-tracker").join("session.json"),
        None => PathBuf::from(".training-tracker-session.json"),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_from_env() {
        env::set_var("API_URL", "http://api.example.test/");
        env::set_var("TOKEN_CACHE_PATH", "/tmp/tt-session.json");
        env::set_var("REQUEST_TIMEOUT_SECS", "5");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_url.as_str(), "http://api.example.test/");
        assert_eq!(config.token_cache_path, PathBuf::from("/tmp/tt-session.json"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));

        env::remove_var("TOKEN_CACHE_PATH");
        env::remove_var("REQUEST_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_zero_timeout_disables_it() {
        env::set_var("API_URL", "http://api.example.test");
        env::set_var("REQUEST_TIMEOUT_SECS", "0");

        let config = Config::from_env().expect("Config should load");
        assert!(config.request_timeout.is_none());

        env::remove_var("REQUEST_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_invalid_api_url_is_rejected() {
        env::set_var("API_URL", "not a url");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("API_URL", _)));

        env::set_var("API_URL", "http://api.example.test");
    }
}
