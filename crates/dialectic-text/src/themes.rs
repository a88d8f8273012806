//! Theme phrase extraction

use regex::Regex;
use std::sync::LazyLock;

/// Themes must be strictly longer than this many characters
pub const MIN_THEME_LEN: usize = 10;

/// Themes must be strictly shorter than this many characters
pub const MAX_THEME_LEN: usize = 50;

/// Anything that is not a letter or a blank, or a coordinating conjunction
static THEME_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^A-Za-z \t]+|\b(?:and|but|however|therefore)\b").unwrap()
});

/// Split `text` into letter/space runs and keep those strictly between the bounds
///
/// Phrases are lowercased with inner whitespace collapsed, deduplicated,
/// and returned in order of first appearance.
pub fn extract_themes(text: &str, min_len: usize, max_len: usize) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();
    for fragment in THEME_BOUNDARY_RE.split(text) {
        let phrase = fragment
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let len = phrase.chars().count();
        if len > min_len && len < max_len && !themes.contains(&phrase) {
            themes.push(phrase);
        }
    }
    themes
}
