//! # Observer: the handler contract
//!
//! The [`Observer`] trait is the extension point for everything that reacts
//! to events: logging, metrics, UI refreshes, cache invalidation, test
//! probes. Observers are registered on an [`EventBus`](crate::EventBus)
//! under a caller-chosen key and invoked synchronously, on the publisher's
//! thread, for every event dispatched while the key stays registered.
//!
//! ```text
//! Event flow:
//!   publisher ── next(name, data) ──► EventBus ──► Observer::on_event(&Event)
//!                                                       │
//!                                      ┌────────────────┼────────────────┐
//!                                      ▼                ▼                ▼
//!                                  LogObserver     MetricsProbe     CustomObserver
//! ```
//!
//! Closures are the most common observers; wrap one with
//! [`ObserverFn`](crate::ObserverFn) or register it directly via
//! [`EventBus::add_observer_fn`](crate::EventBus::add_observer_fn).
//!
//! # Example: custom observer
//! ```
//! use reactive_robot::{Event, EventBus, Observer};
//! use std::sync::Arc;
//!
//! struct CountingObserver(std::sync::atomic::AtomicUsize);
//!
//! impl Observer for CountingObserver {
//!     fn on_event(&self, _event: &Event) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!     }
//! }
//!
//! let bus: EventBus = EventBus::new();
//! let counter = Arc::new(CountingObserver(Default::default()));
//! bus.add_observer("count", counter.clone());
//! bus.notify("tick");
//! assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 1);
//! ```

use std::sync::Arc;

use crate::events::{Event, Payload};

/// Contract for event observers.
///
/// Called synchronously from [`EventBus::publish`](crate::EventBus::publish)
/// on the publisher's thread; a slow observer delays the publisher and every
/// observer after it in the snapshot. Implementations that need isolation or
/// deferral should hand the event off to their own worker.
///
/// Observers may freely re-enter the bus (add, remove, publish) from inside
/// `on_event`; the in-flight dispatch keeps its snapshot.
pub trait Observer<T = Payload>: Send + Sync {
    /// Handles a single dispatched event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    fn on_event(&self, event: &Event<T>);
}

/// Shared handle to an observer (`Arc<dyn Observer<T>>`).
pub type ObserverRef<T = Payload> = Arc<dyn Observer<T>>;
