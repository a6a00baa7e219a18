//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SYNAPSE_*` environment variables; the model
//! key is read from `GEMINI_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_GEMINI_URL, DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_SEARCH_TIMEOUT_SECS,
    DEFAULT_SEARCH_URL, GEMINI_API_KEY_ENV,
};
use crate::generation::GenerationConfig;
use crate::search::SearchConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults. A missing API key is not an
/// error: the generation collaborator answers with setup instructions instead.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Model API key. `None` when unset or blank.
    pub gemini_api_key: Option<String>,

    /// Generation endpoint URL.
    pub gemini_url: String,

    /// Search endpoint URL.
    pub search_url: String,

    /// Timeout for the search call. Default: 10s.
    pub search_timeout: Duration,

    /// Timeout for the generation call. Default: 30s.
    pub generation_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_url", &self.gemini_url)
            .field("search_url", &self.search_url)
            .field("search_timeout", &self.search_timeout)
            .field("generation_timeout", &self.generation_timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            gemini_api_key: None,
            gemini_url: DEFAULT_GEMINI_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SYNAPSE_PORT";
    const ENV_BIND_ADDR: &'static str = "SYNAPSE_BIND_ADDR";
    const ENV_GEMINI_URL: &'static str = "SYNAPSE_GEMINI_URL";
    const ENV_SEARCH_URL: &'static str = "SYNAPSE_SEARCH_URL";
    const ENV_SEARCH_TIMEOUT_SECS: &'static str = "SYNAPSE_SEARCH_TIMEOUT_SECS";
    const ENV_GENERATION_TIMEOUT_SECS: &'static str = "SYNAPSE_GENERATION_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let gemini_api_key = Self::parse_optional_string_from_env(GEMINI_API_KEY_ENV);
        let gemini_url = Self::parse_string_from_env(Self::ENV_GEMINI_URL, defaults.gemini_url);
        let search_url = Self::parse_string_from_env(Self::ENV_SEARCH_URL, defaults.search_url);
        let search_timeout =
            Self::parse_timeout_from_env(Self::ENV_SEARCH_TIMEOUT_SECS, defaults.search_timeout)?;
        let generation_timeout = Self::parse_timeout_from_env(
            Self::ENV_GENERATION_TIMEOUT_SECS,
            defaults.generation_timeout,
        )?;

        Ok(Self {
            port,
            bind_addr,
            gemini_api_key,
            gemini_url,
            search_url,
            search_timeout,
            generation_timeout,
        })
    }

    /// Checks endpoint URLs (does not contact them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            (Self::ENV_GEMINI_URL, &self.gemini_url),
            (Self::ENV_SEARCH_URL, &self.search_url),
        ] {
            if reqwest::Url::parse(url).is_err() {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: url.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Whether a model API key is present. Never touches the network.
    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            url: self.search_url.clone(),
            timeout: self.search_timeout,
        }
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            url: self.gemini_url.clone(),
            api_key: self.gemini_api_key.clone(),
            timeout: self.generation_timeout,
            ..GenerationConfig::default()
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(
        var_name: &'static str,
        default: Duration,
    ) -> Result<Duration, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let secs: u64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::TimeoutParseError {
                            name: var_name,
                            value: value.clone(),
                            source: e,
                        })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout {
                        name: var_name,
                        value,
                    });
                }
                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }
}
