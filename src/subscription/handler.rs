//! Type-erased callback cells.
//!
//! The registry stores callbacks for many payload types in one map, so each
//! bucket holds `Arc<dyn EventHandler>`. The concrete `CallbackCell<T>` is
//! recovered by the publisher, which already knows `T` statically.

use crate::event::{Event, EventTypeId};
use std::any::Any;
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of one subscription within a bus.
///
/// Ids are handed out in increasing order starting at 1 and are never reused
/// for the lifetime of the bus. Zero is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(NonZeroU64);

impl HandlerId {
    /// The first id a bus hands out
    pub const FIRST: HandlerId = HandlerId(NonZeroU64::MIN);

    /// Id allocated at position `sequence` (0-based) of a bus's counter.
    ///
    /// # Panics
    ///
    /// Panics once the id space is exhausted, since any further id would
    /// repeat one already handed out.
    pub(crate) fn from_sequence(sequence: u64) -> Self {
        match NonZeroU64::MIN.checked_add(sequence) {
            Some(id) => HandlerId(id),
            None => panic!("handler id space exhausted after {} subscriptions", sequence),
        }
    }

    /// The raw integer value
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Non-generic view of a registered callback.
///
/// This is what the registry stores and matches on. Invocation requires
/// downcasting through [`EventHandler::as_any`] to the `CallbackCell<T>` of
/// the bucket's payload type.
pub trait EventHandler: Send + Sync + 'static {
    /// The id this callback was registered under
    fn id(&self) -> HandlerId;

    /// The payload type this callback accepts
    fn event_type(&self) -> EventTypeId;

    /// Access to the concrete cell for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// A strongly-typed callback tagged with its handler id.
///
/// Cells are immutable once built; the registry and any in-flight publish
/// snapshot share them through `Arc`.
pub struct CallbackCell<T: Event> {
    id: HandlerId,
    callback: Box<dyn Fn(&T) + Send + Sync>,
}

impl<T: Event> CallbackCell<T> {
    /// Wrap a callback
    pub fn new<F>(id: HandlerId, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            id,
            callback: Box::new(callback),
        }
    }

    /// Run the callback
    pub fn call(&self, event: &T) {
        (self.callback)(event)
    }
}

impl<T: Event> EventHandler for CallbackCell<T> {
    fn id(&self) -> HandlerId {
        self.id
    }

    fn event_type(&self) -> EventTypeId {
        EventTypeId::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Event> fmt::Debug for CallbackCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackCell")
            .field("id", &self.id)
            .field("event_type", &T::event_type())
            .finish()
    }
}

impl fmt::Debug for dyn EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("id", &self.id())
            .field("event_type", &self.event_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct TestEvent {
        value: i64,
    }

    impl Event for TestEvent {}

    #[derive(Debug)]
    struct OtherEvent;

    impl Event for OtherEvent {}

    #[test]
    fn test_handler_id_sequence() {
        assert_eq!(HandlerId::from_sequence(0), HandlerId::FIRST);
        assert_eq!(HandlerId::from_sequence(0).get(), 1);
        assert_eq!(HandlerId::from_sequence(41).get(), 42);
        assert!(HandlerId::from_sequence(1) > HandlerId::FIRST);
        assert_eq!(HandlerId::from_sequence(6).to_string(), "#7");
    }

    #[test]
    fn test_handler_id_last() {
        assert_eq!(HandlerId::from_sequence(u64::MAX - 1).get(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "handler id space exhausted")]
    fn test_handler_id_exhausted() {
        HandlerId::from_sequence(u64::MAX);
    }

    #[test]
    fn test_erased_debug() {
        let bucket: Vec<Arc<dyn EventHandler>> = vec![
            Arc::new(CallbackCell::<TestEvent>::new(HandlerId::FIRST, |_| {})),
            Arc::new(CallbackCell::<OtherEvent>::new(HandlerId::from_sequence(1), |_| {})),
        ];

        let output = format!("{:?}", bucket);
        assert!(output.contains("EventHandler"));
        assert!(output.contains("HandlerId(1)"));
        assert!(output.contains("HandlerId(2)"));
        assert!(output.contains("OtherEvent"));
    }

    #[test]
    fn test_callback_cell_call() {
        let seen = Arc::new(AtomicI64::new(0));
        let seen_clone = seen.clone();
        let cell = CallbackCell::new(HandlerId::FIRST, move |event: &TestEvent| {
            seen_clone.store(event.value, Ordering::SeqCst);
        });

        cell.call(&TestEvent { value: 42 });
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_erased_downcast() {
        let erased: Arc<dyn EventHandler> =
            Arc::new(CallbackCell::<TestEvent>::new(HandlerId::FIRST, |_| {}));

        assert_eq!(erased.id(), HandlerId::FIRST);
        assert_eq!(erased.event_type(), EventTypeId::of::<TestEvent>());
        assert!(erased
            .as_any()
            .downcast_ref::<CallbackCell<TestEvent>>()
            .is_some());
        assert!(erased
            .as_any()
            .downcast_ref::<CallbackCell<OtherEvent>>()
            .is_none());
    }
}
