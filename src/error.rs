//! Error types for the sync-events library.
//!
//! Publishing, subscribing and releasing subscriptions never fail: every
//! unusual condition on those paths (no subscribers, unknown handler, dead bus)
//! is a defined no-op. Errors only surface while constructing a bus.

use thiserror::Error;

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sync-events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bus configuration was rejected by the builder
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Create a new configuration error with a custom message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::ConfigError(msg.into())
    }

    /// Check if this error came from configuration validation
    pub fn is_config(&self) -> bool {
        matches!(self, Error::ConfigError(_))
    }
}
