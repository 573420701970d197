//! Builder pattern for constructing EventBus instances.

use crate::bus::config::EventBusConfig;
use crate::registry::Registry;
use crate::{EventBus, Result};
use std::sync::Arc;
use tracing::info;

/// Builder for creating EventBus instances
#[derive(Debug, Clone, Default)]
pub struct EventBusBuilder {
    config: EventBusConfig,
}

impl EventBusBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration
    pub fn config(mut self, config: EventBusConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the event bus
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(EventBusConfig) -> EventBusConfig,
    {
        self.config = f(self.config);
        self
    }

    /// Set the bus name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.configure(|c| c.name(name))
    }

    /// Build the EventBus
    pub fn build(self) -> Result<EventBus> {
        self.config.validate()?;

        let registry = Arc::new(Registry::new(&self.config));
        info!(
            bus = %registry.name(),
            bus_id = %registry.id(),
            shard_amount = ?self.config.shard_amount,
            "EventBus built"
        );

        Ok(EventBus::from_registry(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default() {
        let bus = EventBusBuilder::new().build().unwrap();
        assert_eq!(bus.name(), "event-bus");
        assert_eq!(bus.event_type_count(), 0);
    }

    #[test]
    fn test_builder_configurations() {
        let bus = EventBusBuilder::new()
            .config(EventBusConfig::test())
            .name("input")
            .build()
            .unwrap();
        assert_eq!(bus.name(), "input");

        let bus = EventBusBuilder::new()
            .configure(|c| c.shard_amount(4).enable_tracing(false))
            .build()
            .unwrap();
        assert_eq!(bus.stats().registry.subscriptions, 0);
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let err = EventBusBuilder::new()
            .configure(|c| c.shard_amount(6))
            .build()
            .unwrap_err();
        assert!(err.is_config());
    }
}
