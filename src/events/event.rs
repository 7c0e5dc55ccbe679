//! One published event: a name plus its data.

use std::sync::Arc;

use crate::events::Payload;

/// A single published event.
///
/// An event is not stored by the bus; it is constructed at publish time and
/// lives only for the duration of one dispatch, passed by reference to every
/// observer in the snapshot.
///
/// - `name`: identifies what happened (shared string, cheap to clone);
/// - `data`: the payload, [`Payload`] by default or any caller-chosen type
///   on a typed bus.
///
/// # Example
/// ```
/// use reactive_robot::{Event, Payload};
///
/// let ev = Event::new("ping", Payload::new().with("v", 1));
/// assert_eq!(&*ev.name, "ping");
/// assert_eq!(ev.data.get("v").and_then(|v| v.as_i64()), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Event<T = Payload> {
    /// Event name.
    pub name: Arc<str>,
    /// Event data.
    pub data: T,
}

impl<T> Event<T> {
    /// Creates a new event with the given name and data.
    pub fn new(name: impl Into<Arc<str>>, data: T) -> Self {
        Self { name: name.into(), data }
    }
}

impl<T: Default> Event<T> {
    /// Creates an event carrying an empty (default) payload.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_uses_default_data() {
        let ev: Event = Event::named("pong");
        assert_eq!(&*ev.name, "pong");
        assert!(ev.data.is_empty());
    }
}
