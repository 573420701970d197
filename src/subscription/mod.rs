//! Subscription management for event handlers.
//!
//! A subscription is split in two halves: the type-erased [`EventHandler`]
//! cell the registry stores, and the [`Subscription`] token the subscriber
//! holds. Dropping the token removes the cell.

pub mod handle;
pub mod handler;
pub mod set;

pub use handle::Subscription;
pub use handler::{CallbackCell, EventHandler, HandlerId};
pub use set::SubscriptionSet;
