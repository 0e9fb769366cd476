//! Configuration management for the NFT gateway.
//!
//! This module handles loading and validating configuration from environment
//! variables using the `dotenvy` crate.
//!
//! ## Environment Variables
//!
//! Required:
//! - `NFT_SERVICE_URL`: Base URL of the upstream blockchain operation service
//! - `NFT_SERVICE_API_KEY`: API key sent to the upstream service
//!
//! Optional (with defaults):
//! - `PORT`: HTTP listen port (default: 3000)
//! - `RATE_LIMIT_RPM`: Requests per minute before throttling (default: 120)
//! - `CORS_ORIGINS`: Comma-separated allowed origins, `*` for any (default: `*`)
//! - `REQUEST_TIMEOUT_SECS`: Upstream request timeout (default: 30)
//! - `RUST_LOG`: Logging level (default: "info")

use std::env;

use crate::error::{NftError, NftResult};

/// Runtime configuration for the gateway, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream operation-service base URL (no trailing slash).
    service_url: String,

    /// API key for the upstream service.
    service_api_key: String,

    /// HTTP listen port.
    port: u16,

    /// Rate limit in requests per minute.
    rate_limit_rpm: u32,

    /// Allowed CORS origins.
    cors_origins: Vec<String>,

    /// Upstream request timeout in seconds.
    request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads and validates every
    /// variable, applying defaults for the optional ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any value fails
    /// validation (non-numeric port, malformed URL, empty API key).
    pub fn from_env() -> NftResult<Self> {
        // Load .env file if present (ignore error if file doesn't exist)
        dotenvy::dotenv().ok();

        let service_url = env::var("NFT_SERVICE_URL").map_err(|_| {
            NftError::unexpected("NFT_SERVICE_URL environment variable is required")
        })?;

        if !service_url.starts_with("http://") && !service_url.starts_with("https://") {
            return Err(NftError::unexpected(format!(
                "NFT_SERVICE_URL must be an http(s) URL, got: {service_url}"
            )));
        }
        let service_url = service_url.trim_end_matches('/').to_string();

        let service_api_key = env::var("NFT_SERVICE_API_KEY").map_err(|_| {
            NftError::unexpected("NFT_SERVICE_API_KEY environment variable is required")
        })?;

        if service_api_key.is_empty() {
            return Err(NftError::unexpected(
                "NFT_SERVICE_API_KEY must not be empty",
            ));
        }

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| NftError::unexpected("PORT must be a valid port number"))?;

        let rate_limit_rpm = env::var("RATE_LIMIT_RPM")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u32>()
            .map_err(|_| NftError::unexpected("RATE_LIMIT_RPM must be a valid number"))?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| NftError::unexpected("REQUEST_TIMEOUT_SECS must be a valid number"))?;

        Ok(Self {
            service_url,
            service_api_key,
            port,
            rate_limit_rpm,
            cors_origins,
            request_timeout_secs,
        })
    }

    /// Get the upstream operation-service base URL.
    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Get the upstream API key.
    #[must_use]
    pub fn service_api_key(&self) -> &str {
        &self.service_api_key
    }

    /// Get the HTTP listen port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Get the rate limit in requests per minute.
    #[must_use]
    pub const fn rate_limit_rpm(&self) -> u32 {
        self.rate_limit_rpm
    }

    /// Get the allowed CORS origins.
    #[must_use]
    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    /// Get the upstream request timeout in seconds.
    #[must_use]
    pub const fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // mutate them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "NFT_SERVICE_URL",
            "NFT_SERVICE_API_KEY",
            "PORT",
            "RATE_LIMIT_RPM",
            "CORS_ORIGINS",
            "REQUEST_TIMEOUT_SECS",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_missing_service_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_http_service_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("NFT_SERVICE_URL", "ftp://api.example.com");
        env::set_var("NFT_SERVICE_API_KEY", "test-key");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    fn test_rejects_empty_api_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("NFT_SERVICE_URL", "https://api.example.com");
        env::set_var("NFT_SERVICE_API_KEY", "");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    fn test_defaults_and_url_normalization() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("NFT_SERVICE_URL", "https://api.example.com/");
        env::set_var("NFT_SERVICE_API_KEY", "test-key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.service_url(), "https://api.example.com");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.rate_limit_rpm(), 120);
        assert_eq!(config.cors_origins(), ["*".to_string()]);
        assert_eq!(config.request_timeout_secs(), 30);

        clear_env();
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("NFT_SERVICE_URL", "http://localhost:8080");
        env::set_var("NFT_SERVICE_API_KEY", "k");
        env::set_var("PORT", "8099");
        env::set_var("RATE_LIMIT_RPM", "10");
        env::set_var("CORS_ORIGINS", "https://a.example, https://b.example");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port(), 8099);
        assert_eq!(config.rate_limit_rpm(), 10);
        assert_eq!(
            config.cors_origins(),
            [
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );

        clear_env();
    }
}
