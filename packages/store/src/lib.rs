pub mod config;
pub mod content;
pub mod email;
pub mod form;
pub mod models;
pub mod news;
pub mod registry;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::SiteConfig;
pub use email::is_valid_email;
pub use form::{FormStatus, RegistrationForm, ValidationError};
pub use models::{Anonymity, Interest, Registration};
pub use news::{default_news, filter_news, NewsItem};
pub use registry::{Registry, RegistrationStore, Stat, StoreError};
