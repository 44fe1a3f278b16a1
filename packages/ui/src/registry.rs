//! Registry context shared by every section of the page.
//!
//! [`RegistryProvider`] opens a [`store::Registry`] backed by the
//! platform-appropriate [`store::RegistrationStore`] and exposes it, together
//! with the [`SiteConfig`] parsed from the bundled `lumirights.toml`, through
//! Dioxus context:
//! - **Web** (WASM + `web` feature): browser local storage via [`store::LocalStorageStore`]
//! - **Native**: one JSON file via [`store::FileStore`]

use dioxus::prelude::*;
use store::{Registry, SiteConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

const SITE_CONFIG_TOML: &str = include_str!("../lumirights.toml");

/// Shared handle to the page's registry.
pub type RegistrySignal = Signal<Registry<PlatformStore>>;

/// Create a registry on the platform-appropriate store.
///
/// - **Web**: local-storage key `config.storage.key`
/// - **Native**: `<data_dir>/lumirights/<key>.json`
pub fn make_registry(config: &SiteConfig) -> Registry<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Registry::open(store::LocalStorageStore::new(&config.storage.key), config)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("lumirights");
        Registry::open(store::FileStore::new(base, &config.storage.key), config)
    }
}

/// Site settings compiled into the binary from `lumirights.toml`.
pub fn bundled_site_config() -> SiteConfig {
    SiteConfig::from_toml_or_default(SITE_CONFIG_TOML)
}

/// Get the registry signal provided by [`RegistryProvider`].
pub fn use_registry() -> RegistrySignal {
    use_context::<RegistrySignal>()
}

/// Get the site configuration provided by [`RegistryProvider`].
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Provider component that loads the registry once and shares it.
/// Wrap your app with this component.
#[component]
pub fn RegistryProvider(children: Element) -> Element {
    let config = use_hook(bundled_site_config);
    let registry = use_signal({
        let config = config.clone();
        move || make_registry(&config)
    });

    use_context_provider(|| registry);
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
