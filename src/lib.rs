//! # sync-events
//!
//! A type-safe, thread-safe, synchronous event bus for decoupling the
//! subsystems of an interactive application.
//!
//! ## Features
//!
//! - **Type-safe** publishing and subscription, routed on the payload's type
//! - **Synchronous** delivery on the publishing thread, in subscribe order
//! - **RAII subscriptions**: dropping the token unsubscribes the callback
//! - **Reentrant**: callbacks may subscribe, unsubscribe and publish
//! - **Thread-safe**: any number of threads may publish concurrently
//!
//! ## Quick Example
//!
//! ```rust
//! use sync_events::{Event, EventBus};
//!
//! #[derive(Debug)]
//! struct PlayerScored {
//!     points: u32,
//! }
//!
//! impl Event for PlayerScored {}
//!
//! # fn main() -> sync_events::Result<()> {
//! let bus = EventBus::builder().name("gameplay").build()?;
//!
//! let subscription = bus.subscribe(|event: &PlayerScored| {
//!     println!("Scored {} points", event.points);
//! });
//!
//! bus.publish(PlayerScored { points: 10 });
//!
//! // Dropping the token unsubscribes the callback
//! drop(subscription);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core event system traits and types
pub mod event;

/// Error types and result aliases
pub mod error;

/// Event registry for type-to-callback mapping
pub mod registry;

/// Subscription tokens and callback cells
pub mod subscription;

/// The main event bus implementation
pub mod bus;

/// Input event logging
pub mod logger;

// Re-export commonly used types
pub use bus::{EventBus, EventBusBuilder, EventBusConfig, EventBusStats, WeakEventBus};
pub use error::{Error, Result};
pub use event::{Event, EventTypeId};
pub use logger::EventLogger;
pub use subscription::{HandlerId, Subscription, SubscriptionSet};

/// Prelude module for convenient imports
///
/// # Example
/// ```rust
/// use sync_events::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bus::{EventBus, EventBusBuilder, WeakEventBus};
    pub use crate::error::{Error, Result};
    pub use crate::event::Event;
    pub use crate::subscription::{Subscription, SubscriptionSet};
}
