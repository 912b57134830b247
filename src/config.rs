//! Service configuration.
//!
//! The `ServiceConfig` struct holds everything the HTTP service and the
//! Drive article source need. Validation rules themselves take no
//! configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default Google APIs origin.
pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com";

/// Configuration for the article service.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, or [`ServiceConfig::from_env`] to read them from
/// the environment.
///
/// # Example
///
/// ```rust
/// use drive_article_validator::ServiceConfig;
///
/// let config = ServiceConfig {
///     port: 8080,
///     ..ServiceConfig::default()
/// };
/// assert_eq!(config.bind_address(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface the HTTP listener binds to.
    ///
    /// Env: `ARTICLE_VALIDATOR_HOST`. Default: `0.0.0.0`
    pub host: String,

    /// Port the HTTP listener binds to.
    ///
    /// Env: `ARTICLE_VALIDATOR_PORT`, then `PORT`. Default: `3000`
    pub port: u16,

    /// Origin of the Drive REST API.
    ///
    /// Env: `GOOGLE_DRIVE_API_BASE`. Default: `https://www.googleapis.com`
    pub drive_api_base: String,

    /// OAuth bearer token sent with every export request.
    ///
    /// Env: `GOOGLE_DRIVE_ACCESS_TOKEN`. Default: `None`
    pub drive_access_token: Option<String>,

    /// Timeout for one export request, in seconds.
    ///
    /// Env: `ARTICLE_VALIDATOR_TIMEOUT_SECS`. Default: `30`
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            drive_api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            drive_access_token: None,
            request_timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(host) = get("ARTICLE_VALIDATOR_HOST") {
            config.host = host;
        }
        if let Some((key, port)) = get("ARTICLE_VALIDATOR_PORT")
            .map(|v| ("ARTICLE_VALIDATOR_PORT", v))
            .or_else(|| get("PORT").map(|v| ("PORT", v)))
        {
            config.port = parse_number(key, &port)?;
        }
        if let Some(base) = get("GOOGLE_DRIVE_API_BASE") {
            config.drive_api_base = base.trim_end_matches('/').to_string();
        }
        config.drive_access_token = get("GOOGLE_DRIVE_ACCESS_TOKEN");
        if let Some(secs) = get("ARTICLE_VALIDATOR_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_number("ARTICLE_VALIDATOR_TIMEOUT_SECS", &secs)?;
        }

        Ok(config)
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Export request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a number, got {value:?}")))
}
