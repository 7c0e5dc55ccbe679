//! # Function-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&Event<T>)` behind the
//! [`Observer`] trait, so plain functions and captures can be registered on
//! the bus without a named type.
//!
//! The closure is `Fn`, not `FnMut`: one dispatch may reach the observer
//! from several bus clones, and re-entrant dispatch must stay legal. Shared
//! mutable state belongs in an explicit `Arc<Mutex<...>>` (or the bus
//! [`Store`](crate::Store)) inside the capture.
//!
//! ## Example
//! ```
//! use reactive_robot::{Event, ObserverFn, ObserverRef};
//!
//! let obs: ObserverRef = ObserverFn::arc(|ev: &Event| {
//!     println!("saw {}", ev.name);
//! });
//! ```

use std::sync::Arc;

use crate::events::Event;
use crate::observers::Observer;

/// Function-backed observer implementation.
///
/// Prefer [`EventBus::add_observer_fn`](crate::EventBus::add_observer_fn)
/// when registering directly; use [`ObserverFn::arc`] when you need an
/// [`ObserverRef`](crate::ObserverRef) to hold or pass around first.
pub struct ObserverFn<F> {
    f: F,
}

impl<F> ObserverFn<F> {
    /// Creates a new function-backed observer.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<T, F> Observer<T> for ObserverFn<F>
where
    F: Fn(&Event<T>) + Send + Sync,
{
    fn on_event(&self, event: &Event<T>) {
        (self.f)(event)
    }
}
