//! Core event system traits and types.
//!
//! This module defines the `Event` trait implemented by every payload that
//! travels over the bus, and `EventTypeId`, the runtime key the registry uses
//! to route a payload to the callbacks subscribed for its exact type.

use std::any::TypeId;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

pub mod input;

/// Core trait that all events must implement.
///
/// Events are plain data: the bus hands subscribers a shared reference to
/// the published value and never clones it. Implementing the trait is usually
/// a one-liner, since the type name defaults to the Rust type path.
///
/// # Example
///
/// ```rust
/// use sync_events::Event;
///
/// #[derive(Debug)]
/// struct ScoreChanged {
///     score: u32,
/// }
///
/// impl Event for ScoreChanged {}
///
/// #[derive(Debug)]
/// struct LevelLoaded;
///
/// impl Event for LevelLoaded {
///     fn event_type() -> &'static str {
///         "LevelLoaded"
///     }
/// }
/// ```
pub trait Event: Debug + Send + Sync + 'static {
    /// Returns the type name of this event.
    ///
    /// This is only used for logging and diagnostics; routing is done on the
    /// `TypeId`.
    fn event_type() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }

    /// Get the routing identity for this event type.
    fn type_key() -> EventTypeId
    where
        Self: Sized,
    {
        EventTypeId::of::<Self>()
    }
}

/// Stable runtime identity of an event payload type.
///
/// Two identities are equal iff they denote the same Rust type. The name is
/// carried along for diagnostics and does not take part in comparisons.
#[derive(Clone, Copy)]
pub struct EventTypeId {
    type_id: TypeId,
    name: &'static str,
}

impl EventTypeId {
    /// Identity of the event type `T`
    pub fn of<T: Event>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::event_type(),
        }
    }

    /// The underlying `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The event type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EventTypeId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EventTypeId {}

impl Hash for EventTypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl Debug for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventTypeId").field(&self.name).finish()
    }
}

impl fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct TestEvent;

    impl Event for TestEvent {
        fn event_type() -> &'static str {
            "TestEvent"
        }
    }

    #[derive(Debug)]
    struct DefaultNamed;

    impl Event for DefaultNamed {}

    #[test]
    fn test_event_type_id() {
        assert_eq!(TestEvent::type_key(), EventTypeId::of::<TestEvent>());
        assert_ne!(TestEvent::type_key(), DefaultNamed::type_key());
    }

    #[test]
    fn test_default_event_type_name() {
        assert!(DefaultNamed::event_type().ends_with("DefaultNamed"));
        assert_eq!(TestEvent::type_key().to_string(), "TestEvent");
    }

    #[test]
    fn test_hash_follows_type() {
        let mut keys = HashSet::new();
        keys.insert(TestEvent::type_key());
        keys.insert(TestEvent::type_key());
        keys.insert(DefaultNamed::type_key());

        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&EventTypeId::of::<TestEvent>()));
    }
}
