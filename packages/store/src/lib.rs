//! Durable client-side storage for the session credential.
//!
//! The client keeps exactly one value on disk (or in the browser): the bearer
//! token issued by the backend on login. Every backend implements
//! [`CredentialStore`]; the session layer is the only writer.

mod credential;
pub use credential::{CredentialStore, CREDENTIAL_KEY};

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;
