//! Subscription tokens governing how long a callback stays registered.

use crate::bus::WeakEventBus;
use crate::event::EventTypeId;
use crate::registry::Registry;
use crate::subscription::HandlerId;
use std::fmt;
use std::sync::Weak;
use tracing::trace;

/// The removal right for one registered callback.
struct Active {
    bus: Weak<Registry>,
    event_type: EventTypeId,
    id: HandlerId,
}

/// A handle to an active subscription.
///
/// When dropped, the subscription is automatically unsubscribed. Tokens are
/// move-only: there is exactly one token per registered callback, and
/// moving it transfers the right to unsubscribe. Assigning a new token over
/// an active one releases the old subscription first.
///
/// A token only holds a weak reference to its bus, so outstanding tokens
/// never keep a bus alive. Releasing a token whose bus is already gone does
/// nothing.
#[must_use = "dropping a Subscription immediately unsubscribes its callback"]
#[derive(Default)]
pub struct Subscription {
    state: Option<Active>,
}

impl Subscription {
    pub(crate) fn new(bus: Weak<Registry>, event_type: EventTypeId, id: HandlerId) -> Self {
        Self {
            state: Some(Active {
                bus,
                event_type,
                id,
            }),
        }
    }

    /// Unsubscribe now instead of at drop.
    ///
    /// Calling this on an already released token is a no-op. The token is
    /// released whether or not its bus still exists.
    pub fn unsubscribe(&mut self) {
        let Some(active) = self.state.take() else {
            return;
        };

        match active.bus.upgrade() {
            Some(registry) => {
                registry.unsubscribe(active.event_type, active.id);
            }
            None => trace!(
                event_type = %active.event_type,
                handler_id = active.id.get(),
                "Bus already dropped, nothing to unsubscribe"
            ),
        }
    }

    /// Get the handler id, or `None` once released
    pub fn id(&self) -> Option<HandlerId> {
        self.state.as_ref().map(|active| active.id)
    }

    /// Get the subscribed event type, or `None` once released
    pub fn event_type(&self) -> Option<EventTypeId> {
        self.state.as_ref().map(|active| active.event_type)
    }

    /// Check if this token still holds its subscription
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Check if the bus this token belongs to still exists
    pub fn is_bus_alive(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|active| active.bus.strong_count() > 0)
    }

    /// Weak handle to the bus this token belongs to, or `None` once released
    pub fn bus(&self) -> Option<WeakEventBus> {
        self.state
            .as_ref()
            .map(|active| WeakEventBus::from_registry(active.bus.clone()))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(active) => f
                .debug_struct("Subscription")
                .field("event_type", &active.event_type)
                .field("id", &active.id)
                .finish(),
            None => f.write_str("Subscription(released)"),
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(active) => write!(f, "Subscription {} to {}", active.id, active.event_type),
            None => write!(f, "Subscription (released)"),
        }
    }
}
