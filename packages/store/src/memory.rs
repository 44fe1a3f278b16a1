use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::Registration;
use crate::registry::{decode_collection, encode_collection, RegistrationStore, StoreError};

#[derive(Debug, Default)]
struct Slot {
    raw: Option<String>,
    fail_writes: bool,
}

/// In-memory RegistrationStore for testing and non-browser fallback.
///
/// Clones share the same slot, so a test can hand one copy to a
/// [`crate::Registry`] and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Slot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary slot text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().raw = Some(raw.into());
        store
    }

    /// Current slot text, `None` when the slot is absent.
    pub fn raw(&self) -> Option<String> {
        self.lock().raw.clone()
    }

    /// Make `save` and `clear` fail, as a full quota would.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RegistrationStore for MemoryStore {
    fn load(&self) -> Vec<Registration> {
        self.lock()
            .raw
            .as_deref()
            .map(decode_collection)
            .unwrap_or_default()
    }

    fn save(&self, registrations: &[Registration]) -> Result<(), StoreError> {
        let mut slot = self.lock();
        if slot.fail_writes {
            return Err(StoreError::Backend("quota exceeded".to_string()));
        }
        slot.raw = Some(encode_collection(registrations)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.lock();
        if slot.fail_writes {
            return Err(StoreError::Backend("quota exceeded".to_string()));
        }
        slot.raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RegistrationForm;

    #[test]
    fn test_empty_slot_loads_empty() {
        assert!(MemoryStore::new().load().is_empty());
        assert!(MemoryStore::with_raw("").load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        assert!(MemoryStore::with_raw("{\"id\": 1}").load().is_empty());
        assert!(MemoryStore::with_raw("[1, 2, 3]").load().is_empty());
    }

    #[test]
    fn test_save_writes_json_array() {
        let store = MemoryStore::new();
        let form = RegistrationForm {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            consent: true,
            ..RegistrationForm::default()
        };
        let record = form.validate(chrono::Utc::now()).unwrap();
        store.save(&[record.clone()]).unwrap();

        let raw = store.raw().unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(store.load(), vec![record]);
    }

    #[test]
    fn test_failing_writes_leave_slot_untouched() {
        let store = MemoryStore::with_raw("[]");
        store.fail_writes(true);
        assert!(store.save(&[]).is_err());
        assert!(store.clear().is_err());
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }
}
