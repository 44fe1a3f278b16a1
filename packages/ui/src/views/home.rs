use dioxus::prelude::*;

use crate::{Contact, Events, Footer, Hero, Mission, Navbar, NewsSection, RegisterSection, Work};

/// The single landing page: every section in scroll order.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            id: "page-top",
            class: "page",
            div { class: "page-background" }
            Navbar {}
            main {
                Hero {}
                Mission {}
                Work {}
                Events {}
                NewsSection {}
                RegisterSection {}
                Contact {}
            }
            Footer {}
        }
    }
}
