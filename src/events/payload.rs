//! Default event data: an open string→value mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open key→value data attached to an event.
///
/// `Payload` is the default data type carried by [`Event`](crate::Event).
/// It places no schema on event data: callers attach whatever keys the
/// consuming observers expect. An omitted payload is the empty mapping.
///
/// Typed applications that want a closed schema can skip `Payload` entirely
/// and instantiate the bus with their own data type
/// (`EventBus<MyEvent>` — see [`EventBus`](crate::EventBus)).
///
/// # Example
/// ```
/// use reactive_robot::Payload;
///
/// let p = Payload::new().with("user", "ada").with("attempt", 3);
/// assert_eq!(p.get("attempt").and_then(|v| v.as_u64()), Some(3));
/// assert!(Payload::new().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Attaches a value under `key`, consuming and returning the payload.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a value under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes and returns the value under `key`, if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns `true` if a value is present under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries in the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload carries no data.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the payload, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
