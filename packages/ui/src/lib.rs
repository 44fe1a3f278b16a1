//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod registry;
pub use registry::{
    bundled_site_config, make_registry, use_registry, use_site_config, PlatformStore,
    RegistryProvider, RegistrySignal,
};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod sections;
pub use sections::{Contact, Events, Footer, Mission, Work};

mod news;
pub use news::NewsSection;

mod register;
pub use register::RegisterSection;
