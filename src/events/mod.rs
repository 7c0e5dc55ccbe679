//! Events: the data model and the synchronous bus.
//!
//! This module groups the event **data model** and the **bus** that
//! dispatches events to registered observers.
//!
//! ## Contents
//! - [`Event`], [`Payload`] — one published event and its default open data
//! - [`EventBus`] — keyed observer registry + synchronous broadcast
//!
//! ## Quick reference
//! - **Publishers**: anything holding a bus handle calls
//!   [`EventBus::next`] / [`EventBus::notify`] / [`EventBus::publish`].
//! - **Consumers**: [`Observer`](crate::Observer) implementations registered
//!   via [`EventBus::add_observer`] / [`EventBus::add_observer_fn`].

mod bus;
mod event;
mod payload;

pub use bus::EventBus;
pub use event::Event;
pub use payload::Payload;
