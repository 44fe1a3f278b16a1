//! # Site configuration — `lumirights.toml`
//!
//! Branding and storage settings for the site. Every field has a default, so a
//! missing or empty file is equivalent to [`SiteConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [brand]
//! name = "LumiRights"
//! tagline = "Dignity. Safety. Equal Rights — for every lesbian, everywhere."
//!
//! [storage]
//! key = "lumirights_registrations"   # local-storage key / file stem
//! capacity = 250                     # newest records kept
//! recent_limit = 6                   # records shown in the recent list
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`BrandConfig`] | Organisation name and tagline used by the hero and navbar. |
//! | [`StorageConfig`] | Storage slot key and collection bounds used by [`crate::Registry`]. |

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `lumirights.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Branding shown in the page chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

/// Where and how many registrations are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key of the single storage slot.
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Maximum number of records retained, newest first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// How many records the recent-registrations list shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_brand_name() -> String {
    "LumiRights".to_string()
}

fn default_tagline() -> String {
    "Dignity. Safety. Equal Rights — for every lesbian, everywhere.".to_string()
}

fn default_storage_key() -> String {
    "lumirights_registrations".to_string()
}

fn default_capacity() -> usize {
    250
}

fn default_recent_limit() -> usize {
    6
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            tagline: default_tagline(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            capacity: default_capacity(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl SiteConfig {
    /// Builder method to set the collection capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.storage.capacity = capacity;
        self
    }

    /// Builder method to set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage.key = key.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse a bundled config file, falling back to the defaults when it is
    /// malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid lumirights.toml, using defaults: {e}");
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.storage.key, "lumirights_registrations");
        assert_eq!(config.storage.capacity, 250);
        assert_eq!(config.storage.recent_limit, 6);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml("[storage]\ncapacity = 10\n").unwrap();
        assert_eq!(config.storage.capacity, 10);
        assert_eq!(config.storage.key, "lumirights_registrations");
        assert_eq!(config.brand.name, "LumiRights");
    }

    #[test]
    fn test_malformed_toml_falls_back_to_default() {
        let config = SiteConfig::from_toml_or_default("[storage]\ncapacity = \"lots\"\n");
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::from_toml_or_default("[brand]\nname = \"Lumi\"\n");
        assert_eq!(config.brand.name, "Lumi");
        assert_eq!(config.storage.capacity, 250);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SiteConfig::default()
            .with_capacity(42)
            .with_storage_key("other_key");
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
