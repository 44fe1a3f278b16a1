//! # Browser local-storage registration store
//!
//! [`LocalStorageStore`] is the [`RegistrationStore`] used on the **web
//! platform**. The collection lives under one key of `window.localStorage` as
//! a JSON array, the same format the site has always written.
//!
//! ## Error handling
//!
//! Reads swallow every failure (no window, storage disabled, corrupt text) and
//! return an empty collection. Writes report JS exceptions, typically
//! `QuotaExceededError`, as [`StoreError::Backend`] so the caller can log them.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::models::Registration;
use crate::registry::{decode_collection, encode_collection, RegistrationStore, StoreError};

/// `window.localStorage`-backed RegistrationStore.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend(format!("{e:?}"))
}

impl RegistrationStore for LocalStorageStore {
    fn load(&self) -> Vec<Registration> {
        let Some(storage) = Self::storage() else {
            return Vec::new();
        };
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => decode_collection(&raw),
            _ => Vec::new(),
        }
    }

    fn save(&self, registrations: &[Registration]) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let json = encode_collection(registrations)?;
        storage.set_item(&self.key, &json).map_err(backend_error)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.remove_item(&self.key).map_err(backend_error)
    }
}
