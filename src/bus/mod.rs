//! The main EventBus implementation.
//!
//! The EventBus is the primary interface for publishing and subscribing to
//! events. It is a cheap, cloneable handle over a shared [`Registry`]; every
//! clone talks to the same subscribers. The registry lives as long as at
//! least one `EventBus` clone does. Subscriptions and [`WeakEventBus`]
//! handles never extend that lifetime.

use crate::event::{Event, EventTypeId};
use crate::registry::{Registry, RegistryStats};
use crate::subscription::Subscription;
use std::fmt;
use std::sync::{Arc, Weak};
use uuid::Uuid;

pub mod builder;
pub mod config;

pub use builder::EventBusBuilder;
pub use config::EventBusConfig;

/// The main event bus for publishing and subscribing to events.
///
/// Delivery is synchronous: `publish` returns once every callback subscribed
/// at the time of the call has run, on the publishing thread.
///
/// # Example
///
/// ```rust
/// use sync_events::{Event, EventBus};
///
/// #[derive(Debug)]
/// struct Ping {
///     n: i32,
/// }
///
/// impl Event for Ping {}
///
/// let bus = EventBus::new();
///
/// let subscription = bus.subscribe(|ping: &Ping| {
///     println!("ping {}", ping.n);
/// });
///
/// bus.publish(Ping { n: 5 });
///
/// // Unsubscribes
/// drop(subscription);
/// bus.publish(Ping { n: 6 });
/// ```
#[derive(Clone)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl EventBus {
    /// Create a bus with the default configuration
    pub fn new() -> Self {
        Self::from_registry(Arc::new(Registry::new(&EventBusConfig::default())))
    }

    /// Create a new EventBus builder
    pub fn builder() -> EventBusBuilder {
        EventBusBuilder::new()
    }

    pub(crate) fn from_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Subscribe to events of a specific type.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<T, F>(&self, callback: F) -> Subscription
    where
        T: Event,
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.registry.subscribe::<T, F>(callback)
    }

    /// Publish an event to all current subscribers of its type.
    ///
    /// Publishing with no subscribers does nothing. Callbacks may subscribe,
    /// unsubscribe or publish from inside the call. A panicking callback
    /// unwinds out of `publish` and the callbacks after it are not run.
    pub fn publish<T: Event>(&self, event: T) {
        self.registry.publish(&event);
    }

    /// Unique id of this bus
    pub fn id(&self) -> Uuid {
        self.registry.id()
    }

    /// Name of this bus
    pub fn name(&self) -> &str {
        self.registry.name()
    }

    /// Number of callbacks subscribed to `T`
    pub fn subscriber_count<T: Event>(&self) -> usize {
        self.registry.subscriber_count(EventTypeId::of::<T>())
    }

    /// Check if anything listens to `T`
    pub fn is_subscribed<T: Event>(&self) -> bool {
        self.subscriber_count::<T>() > 0
    }

    /// Number of event types with at least one subscriber
    pub fn event_type_count(&self) -> usize {
        self.registry.event_type_count()
    }

    /// Get statistics about the event bus
    pub fn stats(&self) -> EventBusStats {
        EventBusStats {
            bus_id: self.registry.id(),
            name: self.registry.name().to_string(),
            registry: self.registry.stats(),
        }
    }

    /// Create a handle that does not keep the bus alive
    pub fn downgrade(&self) -> WeakEventBus {
        WeakEventBus::from_registry(Arc::downgrade(&self.registry))
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("id", &self.registry.id())
            .field("name", &self.registry.name())
            .field("event_types", &self.registry.event_type_count())
            .finish()
    }
}

/// A non-owning handle to an [`EventBus`].
#[derive(Clone, Default)]
pub struct WeakEventBus {
    registry: Weak<Registry>,
}

impl WeakEventBus {
    pub(crate) fn from_registry(registry: Weak<Registry>) -> Self {
        Self { registry }
    }

    /// Get the bus back if it still exists
    pub fn upgrade(&self) -> Option<EventBus> {
        self.registry.upgrade().map(EventBus::from_registry)
    }

    /// Check if the bus still exists
    pub fn is_alive(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl fmt::Debug for WeakEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEventBus")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Statistics about the event bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBusStats {
    /// Id of the bus
    pub bus_id: Uuid,

    /// Name of the bus
    pub name: String,

    /// Registry counters
    pub registry: RegistryStats,
}

impl fmt::Display for EventBusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EventBus '{}' Stats: {} subscriptions, {} event types, {} events published, {} deliveries",
            self.name,
            self.registry.subscriptions,
            self.registry.event_types,
            self.registry.events_published,
            self.registry.deliveries
        )
    }
}
