use dioxus::prelude::*;

use crate::components::{Card, Pill, Tag};
use crate::icons::{FaArrowRight, FaLock, FaShieldHalved, FaWandMagicSparkles};
use crate::registry::{use_registry, use_site_config};
use crate::Icon;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Confidential support circles", "Trained facilitators + peer care."),
    ("Rapid referrals", "Legal, housing, healthcare navigation."),
    ("Policy advocacy", "Letters, meetings, campaigns."),
    ("Safety resources", "Documentation + planning toolkits."),
];

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    let registry = use_registry();
    let stats = registry.read().stats();

    rsx! {
        document::Stylesheet { href: HERO_CSS }

        header {
            id: "hero",
            div {
                class: "hero-copy",
                div {
                    class: "hero-pills",
                    Pill { label: "Safety-first", Icon { icon: FaShieldHalved, width: 14, height: 14 } }
                    Pill { label: "Privacy-respecting", Icon { icon: FaLock, width: 14, height: 14 } }
                    Pill { label: "Community-powered", Icon { icon: FaWandMagicSparkles, width: 14, height: 14 } }
                }
                h1 {
                    "Love is a right. "
                    span { class: "gradient-text", "Safety is a right." }
                }
                p {
                    class: "hero-lead",
                    "{config.brand.tagline} Join the network to get updates, attend support circles, volunteer, or access resources."
                }
                div {
                    class: "hero-actions",
                    a {
                        class: "button primary",
                        href: "#register",
                        "Register now"
                        Icon { icon: FaArrowRight, width: 14, height: 14 }
                    }
                    a { class: "button ghost", href: "#work", "See how we fight" }
                }
                div {
                    class: "hero-stats",
                    for stat in stats {
                        Card {
                            key: "{stat.label}",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
                p {
                    class: "hero-note",
                    "We keep this space welcoming and built on trust. You can choose anonymity below. Never share sensitive details if it could put you at risk."
                }
            }

            Card {
                class: "hero-panel",
                h3 { "Direct support, legal navigation, and advocacy — built with confidentiality." }
                ul {
                    for (title, detail) in HIGHLIGHTS {
                        li {
                            key: "{title}",
                            strong { "{title}" }
                            span { "{detail}" }
                        }
                    }
                }
                div {
                    class: "tag-row",
                    for label in ["Legal", "Safety", "Community", "Mutual Aid"] {
                        Tag { key: "{label}", label: "{label}" }
                    }
                }
            }
        }
    }
}
