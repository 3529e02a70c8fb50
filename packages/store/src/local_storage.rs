//! # Browser local-storage credential store
//!
//! [`LocalStorageStore`] is the [`CredentialStore`] used on the **web
//! platform**. The token lives in `window.localStorage` under
//! [`CREDENTIAL_KEY`], so it survives page reloads and is shared between tabs
//! of the same origin.
//!
//! `web_sys::Storage` handles are not kept: each call looks the storage up
//! again, which keeps the struct `Clone` and cheap. A missing window or a
//! storage access denied by the browser (private mode, disabled cookies) reads
//! as "no credential".

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::credential::{CredentialStore, CREDENTIAL_KEY};

/// localStorage-backed CredentialStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(CREDENTIAL_KEY).ok().flatten()
    }

    fn save(&self, credential: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, credential not persisted");
            return;
        };
        if let Err(e) = storage.set_item(CREDENTIAL_KEY, credential) {
            tracing::warn!("Failed to persist credential: {}", describe(&e));
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(CREDENTIAL_KEY) {
            tracing::warn!("Failed to remove credential: {}", describe(&e));
        }
    }
}
