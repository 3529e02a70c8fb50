use std::sync::{Arc, Mutex, PoisonError};

use crate::credential::CredentialStore;

/// In-memory CredentialStore for testing and platforms without persistence.
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `credential`.
    pub fn with_credential(credential: &str) -> Self {
        let store = Self::new();
        store.save(credential);
        store
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, credential: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(credential.to_string());
    }

    fn clear(&self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        // Overwrite replaces the previous value
        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryStore::with_credential("shared");
        let other = store.clone();

        other.clear();
        assert!(store.load().is_none());

        store.save("again");
        assert_eq!(other.load().as_deref(), Some("again"));
    }
}
