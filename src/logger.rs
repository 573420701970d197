//! A debugging listener that logs every standard input event.

use crate::event::input::{KeyPressed, KeyReleased, MouseClicked, MouseMoved, WindowResized};
use crate::event::Event;
use crate::subscription::{Subscription, SubscriptionSet};
use crate::EventBus;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Subscribes to the [`input`](crate::event::input) events and logs them.
///
/// Dropping the logger unsubscribes it.
#[derive(Debug)]
pub struct EventLogger {
    subscriptions: SubscriptionSet,
    observed: Arc<AtomicU64>,
}

impl EventLogger {
    /// Start logging input events published on `bus`
    pub fn new(bus: &EventBus) -> Self {
        let observed = Arc::new(AtomicU64::new(0));

        let subscriptions = SubscriptionSet::from_iter([
            watch::<KeyPressed>(bus, &observed),
            watch::<KeyReleased>(bus, &observed),
            watch::<MouseMoved>(bus, &observed),
            watch::<MouseClicked>(bus, &observed),
            watch::<WindowResized>(bus, &observed),
        ]);

        debug!(
            bus = %bus.name(),
            subscriptions = subscriptions.len(),
            "EventLogger attached"
        );

        Self {
            subscriptions,
            observed,
        }
    }

    /// Number of events logged so far
    pub fn event_count(&self) -> u64 {
        self.observed.load(Ordering::Relaxed)
    }

    /// Number of event types being logged
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.active_count()
    }
}

fn watch<T: Event>(bus: &EventBus, observed: &Arc<AtomicU64>) -> Subscription {
    let observed = observed.clone();
    bus.subscribe(move |event: &T| {
        observed.fetch_add(1, Ordering::Relaxed);
        debug!(event_type = T::event_type(), ?event, "Event observed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::Position;

    #[test]
    fn test_logger_counts_input_events() {
        let bus = EventBus::new();
        let logger = EventLogger::new(&bus);
        assert_eq!(logger.subscription_count(), 5);
        assert_eq!(bus.event_type_count(), 5);

        bus.publish(KeyPressed { key: 65 });
        bus.publish(MouseMoved {
            position: Position::new(10.0, 20.0),
        });
        bus.publish(WindowResized {
            width: 1280,
            height: 720,
        });
        assert_eq!(logger.event_count(), 3);
    }

    #[test]
    fn test_logger_drop_unsubscribes() {
        let bus = EventBus::new();
        let logger = EventLogger::new(&bus);
        drop(logger);

        assert_eq!(bus.event_type_count(), 0);
        bus.publish(KeyReleased { key: 65 });
        assert_eq!(bus.stats().registry.deliveries, 0);
    }
}
