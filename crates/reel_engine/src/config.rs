use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_BASE_URL: &str = "OMDB_API_URL";
pub const ENV_PROXY_MODE: &str = "OMDB_PROXY_MODE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{ENV_API_KEY} is not defined; set it to your OMDB API key or enable {ENV_PROXY_MODE}")]
    MissingApiKey,
    #[error("invalid base url {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },
}

#[derive(Clone)]
pub struct GatewayConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    /// Requests go through a proxy that injects the credential itself.
    pub proxy_mode: bool,
    pub connect_timeout: Duration,
    /// `None` leaves hung requests to the transport.
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("proxy_mode", &self.proxy_mode)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: Some(api_key.into()),
            ..Self::with_base_url(parse_base_url(base_url)?)
        })
    }

    fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            proxy_mode: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }

    /// Reads `OMDB_API_KEY`, `OMDB_API_URL` and `OMDB_PROXY_MODE` and validates the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_base_url = non_empty(ENV_BASE_URL);
        let base_url = parse_base_url(raw_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let proxy_mode = non_empty(ENV_PROXY_MODE)
            .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = Self {
            api_key: non_empty(ENV_API_KEY),
            proxy_mode,
            ..Self::with_base_url(base_url)
        };
        config.validate()?;
        Ok(config)
    }

    /// A missing credential is only acceptable behind the proxy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() && !self.proxy_mode {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })
}
