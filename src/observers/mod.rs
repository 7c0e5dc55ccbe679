//! Event observers: the handler contract and built-in implementations.
//!
//! ## Contents
//! - [`Observer`] — the handler trait, generic over the event data type
//! - [`ObserverRef`] — shared handle (`Arc<dyn Observer<T>>`)
//! - [`ObserverFn`] — closure-backed observer
//! - [`LogObserver`] — stdout demo observer (feature `logging`)

mod observer;
mod observer_fn;

#[cfg(feature = "logging")]
mod log;

pub use observer::{Observer, ObserverRef};
pub use observer_fn::ObserverFn;

#[cfg(feature = "logging")]
pub use log::LogObserver;
