//! Shared key→value stash for out-of-band state.
//!
//! Events are transient: they exist only for the duration of one dispatch.
//! [`Store`] is the complementary piece — a small thread-safe map that
//! publishers and observers use to share state that outlives any single
//! event (current user, feature flags, last-seen values).
//!
//! Every [`EventBus`](crate::EventBus) owns a store, reachable via
//! [`EventBus::store`](crate::EventBus::store); a `Store` can also be used
//! standalone.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Thread-safe string→value map shared across bus handles.
///
/// Values are stored as JSON values; `set` accepts anything `Serialize` and
/// [`Store::get_as`] reads back any `DeserializeOwned` type. Cheap to clone:
/// all clones share the same underlying map.
///
/// # Example
/// ```
/// use reactive_robot::Store;
///
/// let store = Store::new();
/// store.set("retries", 3u32)?;
/// store.set("user", "ada")?;
///
/// assert_eq!(store.get_as::<u32>("retries")?, 3);
/// assert_eq!(store.get_as::<String>("user")?, "ada");
/// assert!(store.get("absent").is_none());
/// # Ok::<(), reactive_robot::StoreError>(())
/// ```
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<HashMap<String, Value>>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Fails only when `value` cannot be represented as JSON.
    pub fn set(&self, key: impl Into<String>, value: impl Serialize) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialize { source })?;
        self.inner.lock().insert(key.into(), value);
        Ok(())
    }

    /// Returns a clone of the raw value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    /// Returns the value under `key` deserialized as `V`.
    ///
    /// # Errors
    /// - [`StoreError::Missing`] when nothing is stored under `key`;
    /// - [`StoreError::Convert`] when the stored value does not match `V`.
    pub fn get_as<V: DeserializeOwned>(&self, key: &str) -> Result<V, StoreError> {
        let value = self.get(key).ok_or_else(|| StoreError::Missing { key: key.to_string() })?;
        serde_json::from_value(value).map_err(|source| StoreError::Convert {
            key: key.to_string(),
            source,
        })
    }

    /// Removes and returns the value under `key`.
    ///
    /// Removing an absent key is a no-op returning `None`.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.lock().remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("entries", &self.len()).finish()
    }
}
