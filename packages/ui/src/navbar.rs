use dioxus::prelude::*;

use crate::icons::FaHeart;
use crate::registry::use_site_config;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const LINKS: &[(&str, &str)] = &[
    ("mission", "Mission"),
    ("work", "Our Work"),
    ("events", "Events"),
    ("news", "News"),
    ("register", "Register"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> Element {
    let config = use_site_config();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "#page-top",
                aria_label: "{config.brand.name} home",
                span {
                    class: "navbar-logo",
                    Icon { icon: FaHeart, width: 18, height: 18 }
                }
                span {
                    class: "navbar-brand-text",
                    strong { "{config.brand.name}" }
                    small { "Lesbian Rights Network" }
                }
            }
            div {
                class: "navbar-links",
                for (id, label) in LINKS {
                    a { key: "{id}", href: "#{id}", "{label}" }
                }
                a { class: "button ghost", href: "#register", "Join" }
            }
        }
    }
}
