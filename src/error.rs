//! Error types used by the shared store.
//!
//! Bus operations themselves cannot fail on valid inputs and return `()`;
//! the only fallible surface is [`Store`](crate::Store) access, where values
//! cross a serialization boundary.

use thiserror::Error;

/// # Errors produced by [`Store`](crate::Store) access.
///
/// `set` fails when the value cannot be represented as JSON; typed reads
/// fail when the key is absent or the stored value does not match the
/// requested type.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StoreError {
    /// No value is stored under the requested key.
    #[error("no value stored under key {key:?}")]
    Missing {
        /// The key that was looked up.
        key: String,
    },

    /// A value exists under the key but does not deserialize to the requested type.
    #[error("value under key {key:?} does not match the requested type: {source}")]
    Convert {
        /// The key that was looked up.
        key: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// The value passed to `set` could not be serialized.
    #[error("value could not be serialized for storage: {source}")]
    Serialize {
        /// The underlying serialization error.
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use reactive_robot::Store;
    ///
    /// let store = Store::new();
    /// let err = store.get_as::<u32>("missing").unwrap_err();
    /// assert_eq!(err.as_label(), "store_missing");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StoreError::Missing { .. } => "store_missing",
            StoreError::Convert { .. } => "store_convert",
            StoreError::Serialize { .. } => "store_serialize",
        }
    }

    /// Returns a human-readable message with details about the error.
    ///
    /// # Example
    /// ```
    /// use reactive_robot::Store;
    ///
    /// let store = Store::new();
    /// let err = store.get_as::<u32>("absent").unwrap_err();
    /// assert_eq!(err.as_message(), "missing: absent");
    /// ```
    pub fn as_message(&self) -> String {
        match self {
            StoreError::Missing { key } => format!("missing: {key}"),
            StoreError::Convert { key, source } => format!("convert {key}: {source}"),
            StoreError::Serialize { source } => format!("serialize: {source}"),
        }
    }
}
