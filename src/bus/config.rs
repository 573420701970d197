//! Configuration for the event bus.

use crate::{Error, Result};

/// Configuration for the event bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBusConfig {
    /// Name used to label this bus in log output
    pub name: String,

    /// Number of event types to pre-allocate room for
    pub initial_capacity: usize,

    /// Number of lock shards in the bucket map.
    ///
    /// Must be a power of two greater than one. `None` picks a default based
    /// on the number of available cores.
    pub shard_amount: Option<usize>,

    /// Emit a trace line for every publish call
    pub enable_tracing: bool,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            name: "event-bus".to_string(),
            initial_capacity: 16,
            shard_amount: None,
            enable_tracing: true,
        }
    }
}

impl EventBusConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bus name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the number of pre-allocated event type slots
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the number of lock shards
    pub fn shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }

    /// Enable per-publish tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Check that the configuration can be used to build a bus
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("bus name must not be empty"));
        }

        if let Some(shards) = self.shard_amount {
            if shards <= 1 || !shards.is_power_of_two() {
                return Err(Error::config(format!(
                    "shard amount must be a power of two greater than one, got {shards}"
                )));
            }
        }

        Ok(())
    }
}

/// Preset configurations for common use cases
impl EventBusConfig {
    /// Configuration for testing: quiet, small, and with few shards so
    /// unrelated event types contend for the same locks
    pub fn test() -> Self {
        Self::default()
            .name("test-bus")
            .initial_capacity(4)
            .shard_amount(2)
            .enable_tracing(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EventBusConfig::default().validate().is_ok());
        assert!(EventBusConfig::test().validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let config = EventBusConfig::new()
            .name("ui")
            .initial_capacity(64)
            .shard_amount(8)
            .enable_tracing(false);

        assert_eq!(config.name, "ui");
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.shard_amount, Some(8));
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_rejects_bad_shard_amount() {
        for shards in [0, 1, 3, 12] {
            let err = EventBusConfig::new().shard_amount(shards).validate().unwrap_err();
            assert!(err.is_config(), "{shards} shards should be rejected");
        }
        assert!(EventBusConfig::new().shard_amount(32).validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = EventBusConfig::new().name("  ").validate().unwrap_err();
        assert_eq!(err, Error::config("bus name must not be empty"));
    }
}
