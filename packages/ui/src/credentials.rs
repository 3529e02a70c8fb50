//! Platform credential store.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): `<data_dir>/workforce/token` via [`store::FileStore`]
//! - Anything else (WASM without `web`): an in-memory slot, so the session
//!   lasts until reload.

use std::rc::Rc;

use store::CredentialStore;

pub fn make_credential_store() -> Rc<dyn CredentialStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileStore::in_data_dir())
    }
}
