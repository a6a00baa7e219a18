//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Timeout string could not be parsed as whole seconds.
    #[error("failed to parse {name} '{value}': {source}")]
    TimeoutParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout of zero seconds.
    #[error("invalid {name} '{value}': must be at least 1 second")]
    InvalidTimeout { name: &'static str, value: String },

    /// Endpoint URL is not absolute/parseable.
    #[error("invalid {name} '{value}': not a valid URL")]
    InvalidUrl { name: &'static str, value: String },
}
