//! News section with a free-text search box.

use dioxus::prelude::*;
use store::{default_news, filter_news, NewsItem};

use crate::components::{Card, SectionTitle, Tag};
use crate::icons::{FaMagnifyingGlass, FaNewspaper, FaUpRightFromSquare};
use crate::Icon;

#[component]
pub fn NewsSection() -> Element {
    let news = use_signal(default_news);
    let mut query = use_signal(String::new);

    let news = news.read();
    let visible: Vec<&NewsItem> = filter_news(&news, &query());

    rsx! {
        section {
            id: "news",
            div {
                class: "news-header",
                SectionTitle {
                    eyebrow: "News",
                    title: "Updates from the movement",
                    subtitle: "Sample posts for now. Connect this section to a feed for live news.",
                }
                label {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search: legal, safety, mutual aid…",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
            }

            div {
                class: "grid three",
                for item in visible.iter() {
                    Card {
                        key: "{item.id}",
                        div {
                            class: "news-meta",
                            Icon { icon: FaNewspaper, width: 14, height: 14 }
                            span { " {item.source} · {item.date}" }
                        }
                        h3 { "{item.title}" }
                        p { "{item.summary}" }
                        div {
                            class: "tag-row",
                            for tag in item.tags.iter() {
                                Tag { key: "{tag}", label: "{tag}" }
                            }
                        }
                        a {
                            class: "news-link",
                            href: "{item.url}",
                            "Read more "
                            Icon { icon: FaUpRightFromSquare, width: 12, height: 12 }
                        }
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state", "No news items match your search." }
            }
        }
    }
}
