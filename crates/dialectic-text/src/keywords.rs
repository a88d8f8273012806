//! Keyword extraction

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Words never counted as keywords
pub const STOP_WORDS: [&str; 12] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "is", "was", "for", "it",
];

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercase words longer than two characters that are not stop words
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Size of the intersection of two keyword sets
pub fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.intersection(b).count()
}
