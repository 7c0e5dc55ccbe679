//! # reactive-robot
//!
//! **reactive-robot** is a minimal synchronous in-process event bus for Rust.
//!
//! It lets independent parts of an application communicate without direct
//! references to each other: subscribers register observers under string
//! keys, publishers broadcast named events, and the bus invokes every
//! registered observer on the publisher's thread.
//!
//! ## Architecture
//! ```text
//! Publishers (any code holding a bus handle):
//!   component A ──┐
//!   component B ──┼── next(name, data) ──► EventBus ──► Observer "ui"
//!   component C ──┘                       (registry,    Observer "audit"
//!                                          debug flag,  Observer "metrics"
//!                                          store)       ...in registration order
//! ```
//!
//! There is deliberately no queue, no worker, and no delivery guarantee
//! beyond "every observer registered at dispatch time runs once, in
//! registration order, before `next` returns". Handlers needing async work
//! or isolation hand events off to their own machinery.
//!
//! ## Dispatch rules
//! - One observer per key; re-adding a key replaces the observer in place.
//! - Removing an absent key is a no-op.
//! - Each dispatch walks a stable snapshot of the registry: observers may
//!   add/remove observers (or publish) from inside their own invocation, and
//!   such mutations apply to subsequent dispatches only.
//! - Fail-fast: a panicking observer unwinds through `next`; the rest of the
//!   snapshot is not invoked.
//!
//! ## Features
//! | Area          | Description                                              | Key types                      |
//! |---------------|----------------------------------------------------------|--------------------------------|
//! | **Bus**       | Keyed registry + synchronous broadcast, debug diagnostic. | [`EventBus`]                   |
//! | **Events**    | Named events with open or caller-typed data.              | [`Event`], [`Payload`]         |
//! | **Observers** | Handler contract, closure adapter, stdout demo logger.    | [`Observer`], [`ObserverFn`]   |
//! | **Store**     | Shared key→value stash alongside the bus.                 | [`Store`]                      |
//! | **Errors**    | Typed errors for store access.                            | [`StoreError`]                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use reactive_robot::{EventBus, Payload};
//!
//! // One bus per application; clones share registry, debug flag and store.
//! let bus: EventBus = EventBus::new();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! bus.add_observer_fn("recorder", move |ev| {
//!     sink.lock().unwrap().push((ev.name.to_string(), ev.data.clone()));
//! });
//!
//! bus.next("ping", Payload::new().with("v", 1));
//! bus.notify("pong"); // name-only form, empty payload
//! bus.remove_observer("recorder");
//! bus.notify("ignored");
//!
//! let seen = seen.lock().unwrap();
//! assert_eq!(
//!     *seen,
//!     vec![
//!         ("ping".to_string(), Payload::new().with("v", 1)),
//!         ("pong".to_string(), Payload::new()),
//!     ]
//! );
//! ```
//!
//! Typed buses swap [`Payload`] for any `Debug` data type:
//! ```rust
//! use reactive_robot::EventBus;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Progress { percent: u8 }
//!
//! let bus: EventBus<Progress> = EventBus::new();
//! bus.add_observer_fn("bar", |ev| {
//!     let _ = ev.data.percent; // redraw...
//! });
//! bus.next("progress", Progress { percent: 40 });
//! ```

mod error;
mod events;
mod observers;
mod store;

// ---- Public re-exports ----

pub use error::StoreError;
pub use events::{Event, EventBus, Payload};
pub use observers::{Observer, ObserverFn, ObserverRef};
pub use store::Store;

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
