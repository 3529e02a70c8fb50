//! # Filesystem-backed credential store
//!
//! [`FileStore`] is a [`CredentialStore`] that keeps the bearer token in a
//! single file so a native client stays signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token          # the raw credential, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::in_data_dir`] places the file under [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/workforce/` |
//! | Linux | `~/.local/share/workforce/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\workforce\` |

use std::path::PathBuf;

use crate::credential::{CredentialStore, CREDENTIAL_KEY};

/// Filesystem-backed CredentialStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at `<data_dir>/workforce`, falling back to the working
    /// directory when the platform has no data directory.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workforce");
        Self::new(base)
    }

    fn slot_path(&self) -> PathBuf {
        self.base.join(CREDENTIAL_KEY)
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.slot_path()).ok()?;
        let credential = content.trim();
        if credential.is_empty() {
            return None;
        }
        Some(credential.to_string())
    }

    fn save(&self, credential: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create credential directory {:?}: {}", self.base, e);
            return;
        }
        if let Err(e) = std::fs::write(self.slot_path(), credential) {
            tracing::warn!("Failed to persist credential: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.slot_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove credential: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "workforce_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = scratch_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        assert!(store.load().is_none());
        store.save("secret-token");

        // Re-open from the same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.load().as_deref(), Some("secret-token"));

        reopened.clear();
        assert!(store.load().is_none());

        // Clearing an empty slot is a no-op
        reopened.clear();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_blank_file_reads_as_absent() {
        let dir = scratch_dir("blank");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CREDENTIAL_KEY), "  \n").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
