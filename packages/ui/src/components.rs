//! Small presentational building blocks used across sections.

use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}

#[component]
pub fn Tag(label: String) -> Element {
    rsx! {
        span { class: "tag", "{label}" }
    }
}

/// Rounded badge; `children` is the leading icon.
#[component]
pub fn Pill(label: String, children: Element) -> Element {
    rsx! {
        span {
            class: "pill",
            {children}
            "{label}"
        }
    }
}

#[component]
pub fn SectionTitle(eyebrow: String, title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "section-title",
            p { class: "section-eyebrow", "{eyebrow}" }
            h2 { "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
