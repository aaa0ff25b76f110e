//! Flat string-keyed persistence with JSON values.
//!
//! Widgets never touch the storage medium directly; they go through a
//! [`StoreHandle`] so tests can inject a [`MemoryStore`] instead of the
//! browser's `localStorage`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("write to key `{key}` rejected: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Synchronous, origin-scoped, string-keyed store.
///
/// Object-safe on purpose: the typed JSON layer lives on [`StoreHandle`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    /// Returns an error when the backend cannot accept the write (missing
    /// backend, quota exhausted).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Shared handle to a [`KeyValueStore`] carrying the `read`/`write` contract.
///
/// Cloning is cheap; equality is pointer identity so the handle can flow
/// through Yew props and context.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn KeyValueStore>);

impl StoreHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Read the JSON value at `key`, falling back to `default` when the key
    /// is absent or its contents fail to deserialize.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.0.get(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("discarding malformed value at `{key}`: {err}");
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize `value` as JSON and store it synchronously under `key`.
    ///
    /// Failures are fatal to this operation only: they are logged and the
    /// previous value (if any) is left in place.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("value for key `{key}` is not serializable: {err}");
                return;
            }
        };
        if let Err(err) = self.0.set(key, &raw) {
            log::error!("write to `{key}` failed: {err}");
        }
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoreHandle")
    }
}

/// In-memory store backing tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw (pre-serialized) entry, bypassing the JSON layer.
    pub fn seed(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
