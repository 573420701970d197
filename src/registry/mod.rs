//! Event registry for mapping event types to subscribed callbacks.
//!
//! The registry owns every callback cell, grouped into one bucket per event
//! type. Buckets live in a sharded concurrent map: publish only ever holds a
//! shard read lock long enough to clone the bucket's `Arc` handles, so
//! callbacks always run with no registry lock held and may freely subscribe,
//! unsubscribe or publish again.

use crate::bus::EventBusConfig;
use crate::event::{Event, EventTypeId};
use crate::subscription::{CallbackCell, EventHandler, HandlerId, Subscription};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, trace};
use uuid::Uuid;

/// Ordered callbacks for one event type, in subscribe order
type Bucket = Vec<Arc<dyn EventHandler>>;

/// Thread-safe store of type-indexed callback buckets.
///
/// A registry is always owned through an `Arc`, shared by every
/// [`EventBus`](crate::EventBus) clone. Subscriptions only hold a `Weak`
/// reference back to it.
pub struct Registry {
    /// Unique id of this bus instance, for logs
    id: Uuid,

    /// Human readable bus name, for logs
    name: String,

    /// Whether per-publish trace logging is enabled
    trace_publish: bool,

    /// Map from event type to its callbacks; never holds an empty bucket
    buckets: DashMap<EventTypeId, Bucket>,

    /// Number of handler ids handed out so far
    next_sequence: AtomicU64,

    /// Total number of publish calls
    events_published: AtomicU64,

    /// Total number of callbacks that ran to completion
    deliveries: AtomicU64,
}

impl Registry {
    /// Create a registry from an already validated configuration
    pub(crate) fn new(config: &EventBusConfig) -> Self {
        let buckets = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };

        Self {
            id: Uuid::new_v4(),
            name: config.name.clone(),
            trace_publish: config.enable_tracing,
            buckets,
            next_sequence: AtomicU64::new(0),
            events_published: AtomicU64::new(0),
            deliveries: AtomicU64::new(0),
        }
    }

    /// Unique id of this registry
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name given to this registry's bus
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `callback` for events of type `T`.
    ///
    /// The new callback goes to the back of `T`'s bucket. Publish calls that
    /// already took their snapshot do not see it.
    pub fn subscribe<T, F>(self: &Arc<Self>, callback: F) -> Subscription
    where
        T: Event,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let event_type = EventTypeId::of::<T>();

        let (id, subscriber_count) = {
            let entry = self.buckets.entry(event_type);
            // Allocated under the shard write lock so bucket order matches id
            // order, and before inserting so an exhausted counter leaves no
            // empty bucket behind. The counter sticks at its maximum instead
            // of wrapping to an id already handed out.
            let sequence = self
                .next_sequence
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
                .unwrap_or(u64::MAX);
            let id = HandlerId::from_sequence(sequence);
            let mut bucket = entry.or_default();
            bucket.push(Arc::new(CallbackCell::<T>::new(id, callback)));
            (id, bucket.len())
        };

        debug!(
            bus = %self.name,
            bus_id = %self.id,
            event_type = %event_type,
            handler_id = id.get(),
            subscriber_count,
            "Subscribed handler"
        );

        Subscription::new(Arc::downgrade(self), event_type, id)
    }

    /// Deliver `event` to every callback currently subscribed to `T`.
    ///
    /// Callbacks run synchronously on the calling thread, in subscribe order,
    /// over a snapshot of the bucket taken before any of them runs. A panic
    /// in a callback propagates to the caller and skips the remaining ones.
    pub fn publish<T: Event>(&self, event: &T) {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        let event_type = EventTypeId::of::<T>();
        let snapshot: Bucket = match self.buckets.get(&event_type) {
            Some(bucket) if !bucket.is_empty() => bucket.value().clone(),
            _ => {
                if self.trace_publish {
                    trace!(bus = %self.name, event_type = %event_type, "No subscribers for event");
                }
                return;
            }
        };

        if self.trace_publish {
            trace!(
                bus = %self.name,
                event_type = %event_type,
                subscriber_count = snapshot.len(),
                ?event,
                "Publishing event"
            );
        }

        for handler in &snapshot {
            let Some(cell) = handler.as_any().downcast_ref::<CallbackCell<T>>() else {
                error!(
                    bus = %self.name,
                    event_type = %event_type,
                    handler_id = handler.id().get(),
                    handler_type = %handler.event_type(),
                    "Handler stored under the wrong event type"
                );
                continue;
            };

            cell.call(event);
            self.deliveries.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Remove the callback `id` from `event_type`'s bucket.
    ///
    /// Unknown ids are ignored. The bucket is pruned once it is empty.
    /// Returns whether a callback was removed.
    pub(crate) fn unsubscribe(&self, event_type: EventTypeId, id: HandlerId) -> bool {
        // Removal and pruning share one shard write lock, so no reader ever
        // sees an empty bucket.
        let removed = match self.buckets.entry(event_type) {
            Entry::Occupied(mut entry) => {
                match entry.get().iter().position(|handler| handler.id() == id) {
                    Some(index) => {
                        let cell = entry.get_mut().remove(index);
                        let pruned = entry.get().is_empty();
                        if pruned {
                            entry.remove();
                        }
                        Some((cell, pruned))
                    }
                    None => None,
                }
            }
            Entry::Vacant(_) => None,
        };

        let Some((cell, pruned)) = removed else {
            trace!(
                bus = %self.name,
                event_type = %event_type,
                handler_id = id.get(),
                "Handler already removed"
            );
            return false;
        };

        debug!(
            bus = %self.name,
            bus_id = %self.id,
            event_type = %event_type,
            handler_id = id.get(),
            pruned,
            "Unsubscribed handler"
        );

        // Dropped with no shard lock held: a callback may own other
        // subscriptions whose release re-enters this registry.
        drop(cell);
        true
    }

    /// Number of callbacks subscribed to `event_type`
    pub fn subscriber_count(&self, event_type: EventTypeId) -> usize {
        self.buckets
            .get(&event_type)
            .map(|bucket| bucket.len())
            .unwrap_or(0)
    }

    /// Number of event types with at least one subscriber
    pub fn event_type_count(&self) -> usize {
        self.buckets.len()
    }

    /// All event types with at least one subscriber
    pub fn event_types(&self) -> Vec<EventTypeId> {
        self.buckets.iter().map(|entry| *entry.key()).collect()
    }

    /// Get current registry statistics
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats {
            events_published: self.events_published.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            ..RegistryStats::default()
        };

        for entry in self.buckets.iter() {
            stats.event_types += 1;
            stats.subscriptions += entry.value().len();
        }

        stats
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("event_types", &self.buckets.len())
            .finish()
    }
}

/// Registry statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of event types with at least one subscriber
    pub event_types: usize,

    /// Total number of live subscriptions
    pub subscriptions: usize,

    /// Number of publish calls made so far
    pub events_published: u64,

    /// Number of callbacks that ran to completion
    pub deliveries: u64,
}
