//! # Filesystem-backed registration store
//!
//! [`FileStore`] is a [`RegistrationStore`] that keeps the collection in one
//! JSON file. It is used when the UI runs outside a browser, so registrations
//! survive restarts there too.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json          # JSON array of registrations, newest first
//! ```
//!
//! ## Platform data directories
//!
//! The UI passes `dirs::data_dir()/lumirights` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/lumirights/` |
//! | Linux | `~/.local/share/lumirights/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\lumirights\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::Registration;
use crate::registry::{decode_collection, encode_collection, RegistrationStore, StoreError};

/// Filesystem-backed RegistrationStore for native targets.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    /// Full path of the slot file.
    pub fn path(&self) -> PathBuf {
        self.base.join(format!("{}.json", self.key))
    }
}

impl RegistrationStore for FileStore {
    fn load(&self) -> Vec<Registration> {
        match std::fs::read_to_string(self.path()) {
            Ok(raw) => decode_collection(&raw),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!("Cannot read {}: {e}", self.path().display());
                }
                Vec::new()
            }
        }
    }

    fn save(&self, registrations: &[Registration]) -> Result<(), StoreError> {
        let json = encode_collection(registrations)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.path(), json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RegistrationForm;
    use crate::registry::Registry;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lumirights_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");

        let store = FileStore::new(dir.clone(), "registrations");
        let mut registry = Registry::new(store);
        let mut form = RegistrationForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            consent: true,
            ..RegistrationForm::default()
        };
        registry.submit(&mut form).unwrap();

        // Re-open from same directory
        let registry2 = Registry::new(FileStore::new(dir.clone(), "registrations"));
        assert_eq!(registry2.len(), 1);
        assert_eq!(registry2.registrations()[0].full_name, "Jane Doe");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_and_corrupt_files_load_empty() {
        let dir = temp_base("corrupt");
        let store = FileStore::new(dir.clone(), "registrations");
        assert!(store.load().is_empty());

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = temp_base("clear");
        let store = FileStore::new(dir.clone(), "registrations");
        store.save(&[]).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        // clearing twice is fine
        store.clear().unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
