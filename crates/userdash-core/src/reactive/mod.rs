//! Single-threaded reactive state.
//!
//! Controllers expose their state as [`Signal`]s. A view reads the current
//! value with [`Signal::get`] and registers a callback with
//! [`Signal::subscribe`] to re-render whenever the controller writes.

mod signal;

pub use signal::{Signal, SubscriptionId};
