//! Syntactic email check. No DNS or deliverability lookup.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Returns true when the trimmed input looks like `local@domain.tld`.
///
/// Both sides of the `@` must be non-empty and free of whitespace and further
/// `@` signs, and the domain must contain a `.` with text on each side.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input.trim())
}
