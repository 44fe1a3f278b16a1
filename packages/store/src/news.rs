//! Static news catalog and the free-text filter behind the news search box.

use serde::{Deserialize, Serialize};

/// A read-only news post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub summary: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewsItem {
    /// Title, summary, source and tags joined and lower-cased.
    fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.summary, &self.source];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Whether this item matches an already trimmed, lower-cased query.
    fn matches(&self, needle: &str) -> bool {
        self.searchable_text().contains(needle)
    }
}

/// Items whose searchable text contains `query`, case-insensitively.
///
/// A blank query returns every item. Original order is always preserved.
pub fn filter_news<'a>(items: &'a [NewsItem], query: &str) -> Vec<&'a NewsItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

fn item(id: &str, title: &str, source: &str, date: &str, summary: &str, tags: &[&str]) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        source: source.to_string(),
        date: date.to_string(),
        summary: summary.to_string(),
        url: "#".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The posts shipped with the site.
pub fn default_news() -> Vec<NewsItem> {
    vec![
        item(
            "n1",
            "Community legal aid hours expanded this month",
            "LumiRights Updates",
            "2025-12-10",
            "New weekly office hours for name-change support, workplace discrimination guidance, and safety planning.",
            &["Legal", "Support"],
        ),
        item(
            "n2",
            "New mutual-aid fund cycle opens for applications",
            "LumiRights Updates",
            "2025-12-03",
            "Small grants for housing, healthcare travel, and emergency safety needs — reviewed confidentially.",
            &["Mutual Aid"],
        ),
        item(
            "n3",
            "Toolkit: safer reporting + documentation for harassment",
            "LumiRights Resources",
            "2025-11-21",
            "A step-by-step guide to document incidents, preserve evidence, and get support without compromising privacy.",
            &["Safety", "Guide"],
        ),
    ]
}
