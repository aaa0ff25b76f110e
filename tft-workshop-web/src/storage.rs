//! Bridges the core persistence abstraction to the browser, and exposes the
//! context-provided [`StoreHandle`] to components as a hook.

use tft_workshop_core::store::{MemoryStore, StoreHandle};
use yew::hook;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use tft_workshop_core::store::{KeyValueStore, StoreError};

/// `localStorage`-backed implementation of the core store contract.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        crate::dom::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = crate::dom::local_storage().map_err(|_| StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected {
                key: key.to_string(),
                reason: crate::dom::js_error_message(&err),
            })
    }
}

/// Store for the running app: `localStorage` in the browser, in-memory when
/// rendered server-side.
#[must_use]
pub fn default_store() -> StoreHandle {
    #[cfg(target_arch = "wasm32")]
    {
        StoreHandle::new(BrowserStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        StoreHandle::new(MemoryStore::new())
    }
}

/// The store provided by the app shell. Components rendered without a
/// provider (bare SSR) fall back to a fresh in-memory store.
#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().unwrap_or_else(|| StoreHandle::new(MemoryStore::new()))
}
