//! # Registry — the persisted registration collection
//!
//! [`Registry`] owns the newest-first list of accepted [`Registration`]s and
//! writes it through a [`RegistrationStore`] after every change. The same
//! logic runs against an in-memory store (tests), a JSON file (native), or
//! browser local storage (web).
//!
//! ## [`RegistrationStore`] trait
//!
//! Three methods over a single storage slot: `load` the whole collection,
//! `save` the whole collection, `clear` the slot. `load` never fails; missing
//! or corrupt data reads as an empty collection. Implementations live in
//! sibling modules (`memory`, `file_store`, `local_storage`) and share
//! [`decode_collection`] / [`encode_collection`] for the JSON text.
//!
//! ## Write path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`submit`](Registry::submit) | Validates the form, prepends the record, truncates to capacity, saves, resets the form. |
//! | [`reset`](Registry::reset) | Empties the collection and removes the storage slot. |
//!
//! A failed save is logged and ignored. The in-memory collection stays
//! authoritative until the page is reloaded.

use chrono::Utc;
use thiserror::Error;

use crate::config::{SiteConfig, StorageConfig};
use crate::form::{RegistrationForm, ValidationError};
use crate::models::Registration;

/// Why a storage backend could not write or clear its slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to serialize registrations: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Capability interface over the single slot holding the collection.
pub trait RegistrationStore {
    /// Read the whole collection. Missing, unavailable or corrupt data is empty.
    fn load(&self) -> Vec<Registration>;
    /// Replace the slot with the given collection.
    fn save(&self, registrations: &[Registration]) -> Result<(), StoreError>;
    /// Remove the slot entirely.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Parse slot text, falling back to an empty collection.
pub fn decode_collection(raw: &str) -> Vec<Registration> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Ignoring unreadable registrations slot: {e}");
            Vec::new()
        }
    }
}

/// Serialize the collection as a JSON array.
pub fn encode_collection(registrations: &[Registration]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(registrations)?)
}

/// One headline number for the hero section.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

/// The persisted, bounded, newest-first registration collection.
pub struct Registry<S: RegistrationStore> {
    store: S,
    config: StorageConfig,
    registrations: Vec<Registration>,
}

impl<S: RegistrationStore> Registry<S> {
    /// Open with default site settings.
    pub fn new(store: S) -> Self {
        Self::open(store, &SiteConfig::default())
    }

    /// Load the collection from `store`, keeping at most `capacity` records.
    ///
    /// A capacity of 0 is raised to 1 so an accepted submission is always kept.
    pub fn open(store: S, config: &SiteConfig) -> Self {
        let mut config = config.storage.clone();
        if config.capacity == 0 {
            tracing::warn!("Storage capacity 0 is not usable, keeping 1 record");
            config.capacity = 1;
        }
        let mut registrations = store.load();
        registrations.truncate(config.capacity);
        tracing::debug!("Loaded {} registrations", registrations.len());
        Self {
            store,
            config,
            registrations,
        }
    }

    /// Newest-first view of every record.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The `n` most recent records.
    pub fn recent(&self, n: usize) -> &[Registration] {
        &self.registrations[..n.min(self.registrations.len())]
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn recent_limit(&self) -> usize {
        self.config.recent_limit
    }

    /// Headline numbers; only the first is live.
    pub fn stats(&self) -> Vec<Stat> {
        vec![
            Stat {
                label: "People registered",
                value: self.len().to_string(),
            },
            Stat {
                label: "Support circles",
                value: "24+".to_string(),
            },
            Stat {
                label: "Legal referrals",
                value: "180+".to_string(),
            },
        ]
    }

    /// Validate and store the form, then clear it.
    ///
    /// On rejection neither the collection nor the form is modified.
    pub fn submit(&mut self, form: &mut RegistrationForm) -> Result<Registration, ValidationError> {
        let registration = form.validate(Utc::now())?;

        self.registrations.insert(0, registration.clone());
        self.registrations.truncate(self.config.capacity);
        self.persist();
        form.reset();

        tracing::info!("Accepted registration {}", registration.id);
        Ok(registration)
    }

    /// Drop every record, in memory and in storage.
    pub fn reset(&mut self) {
        self.registrations.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear registrations slot: {e}");
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.registrations) {
            tracing::warn!("Failed to persist registrations: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Interest;

    fn jane() -> RegistrationForm {
        RegistrationForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            consent: true,
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn test_empty_name_is_rejected_without_side_effects() {
        let store = MemoryStore::new();
        let mut registry = Registry::new(store.clone());
        registry.submit(&mut jane()).unwrap();

        let mut form = jane();
        form.full_name = String::new();
        let before = form.clone();

        assert_eq!(registry.submit(&mut form), Err(ValidationError::NameRequired));
        assert_eq!(registry.len(), 1);
        assert_eq!(store.load().len(), 1);
        assert_eq!(form, before);
    }

    #[test]
    fn test_invalid_email_creates_no_record() {
        let mut registry = Registry::new(MemoryStore::new());
        let mut form = jane();
        form.email = "not-an-email".to_string();

        assert_eq!(registry.submit(&mut form), Err(ValidationError::InvalidEmail));
        assert!(registry.is_empty());
        assert_eq!(form.email, "not-an-email");
    }

    #[test]
    fn test_missing_consent_creates_no_record() {
        let store = MemoryStore::new();
        let mut registry = Registry::new(store.clone());
        let mut form = jane();
        form.consent = false;

        assert_eq!(registry.submit(&mut form), Err(ValidationError::ConsentRequired));
        assert!(registry.is_empty());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_submit_prepends_and_resets_form() {
        let store = MemoryStore::new();
        let mut registry = Registry::new(store.clone());

        let mut first = jane();
        first.full_name = "First".to_string();
        registry.submit(&mut first).unwrap();

        let mut form = jane();
        form.interests.clear();
        let record = registry.submit(&mut form).unwrap();

        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.interests, vec![Interest::Updates]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.registrations()[0], record);
        assert_eq!(registry.registrations()[1].full_name, "First");
        assert_eq!(form, RegistrationForm::default());

        // persisted copy matches memory
        assert_eq!(store.load(), registry.registrations());
    }

    #[test]
    fn test_collection_is_bounded_newest_first() {
        let mut registry = Registry::new(MemoryStore::new());
        for i in 0..251 {
            let mut form = jane();
            form.full_name = format!("Person {i}");
            registry.submit(&mut form).unwrap();
        }

        assert_eq!(registry.len(), 250);
        assert_eq!(registry.registrations()[0].full_name, "Person 250");
        assert_eq!(registry.registrations()[249].full_name, "Person 1");
        assert!(registry
            .registrations()
            .iter()
            .all(|r| r.full_name != "Person 0"));

        let mut ids: Vec<&str> = registry.registrations().iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 250);
    }

    #[test]
    fn test_custom_capacity() {
        let config = SiteConfig::default().with_capacity(3);
        let mut registry = Registry::open(MemoryStore::new(), &config);
        for _ in 0..5 {
            registry.submit(&mut jane()).unwrap();
        }
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.capacity(), 3);
    }

    #[test]
    fn test_reset_clears_memory_and_slot() {
        let store = MemoryStore::new();
        let mut registry = Registry::new(store.clone());
        registry.submit(&mut jane()).unwrap();
        assert!(store.raw().is_some());

        registry.reset();

        assert!(registry.is_empty());
        assert!(store.raw().is_none());
        assert!(Registry::new(store).is_empty());
    }

    #[test]
    fn test_invalid_json_loads_empty() {
        let store = MemoryStore::with_raw("{ this is not json");
        let registry = Registry::new(store);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reopen_sees_saved_records() {
        let store = MemoryStore::new();
        let mut registry = Registry::new(store.clone());
        registry.submit(&mut jane()).unwrap();

        let reopened = Registry::new(store);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.registrations()[0].email, "jane@example.com");
    }

    #[test]
    fn test_failed_write_keeps_memory_authoritative() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let mut registry = Registry::new(store.clone());

        let mut form = jane();
        registry.submit(&mut form).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(form, RegistrationForm::default());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_recent_and_stats() {
        let mut registry = Registry::new(MemoryStore::new());
        assert!(registry.recent(6).is_empty());
        for _ in 0..8 {
            registry.submit(&mut jane()).unwrap();
        }
        assert_eq!(registry.recent(registry.recent_limit()).len(), 6);
        assert_eq!(registry.recent(100).len(), 8);

        let stats = registry.stats();
        assert_eq!(stats[0].label, "People registered");
        assert_eq!(stats[0].value, "8");
    }

    #[test]
    fn test_open_truncates_oversized_slot() {
        let store = MemoryStore::new();
        let mut big = Registry::new(store.clone());
        for _ in 0..5 {
            big.submit(&mut jane()).unwrap();
        }
        let small = Registry::open(store, &SiteConfig::default().with_capacity(2));
        assert_eq!(small.len(), 2);
    }

    #[test]
    fn test_zero_capacity_still_keeps_latest_record() {
        let store = MemoryStore::new();
        let config = SiteConfig::from_toml("[storage]\ncapacity = 0\n").unwrap();
        let mut registry = Registry::open(store.clone(), &config);
        assert_eq!(registry.capacity(), 1);

        registry.submit(&mut jane()).unwrap();
        let mut second = jane();
        second.full_name = "Sam".to_string();
        registry.submit(&mut second).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.registrations()[0].full_name, "Sam");
        assert_eq!(Registry::new(store).len(), 1);
    }
}
