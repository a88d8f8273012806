//! Default [`TextAnalyzer`] built from the lexical heuristics

use crate::keywords::extract_keywords;
use crate::patterns;
use crate::themes::{extract_themes, MAX_THEME_LEN, MIN_THEME_LEN};
use dialectic_domain::{Fallacy, TextAnalyzer};
use std::collections::BTreeSet;

/// Keyword/regex text analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalAnalyzer {
    min_theme_len: usize,
    max_theme_len: usize,
}

impl LexicalAnalyzer {
    /// Analyzer with the standard theme bounds (exclusive 10..50)
    pub fn new() -> Self {
        Self::with_theme_bounds(MIN_THEME_LEN, MAX_THEME_LEN)
    }

    /// Analyzer with custom exclusive theme length bounds
    pub fn with_theme_bounds(min_theme_len: usize, max_theme_len: usize) -> Self {
        Self {
            min_theme_len,
            max_theme_len,
        }
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer for LexicalAnalyzer {
    fn keywords(&self, text: &str) -> BTreeSet<String> {
        extract_keywords(text)
    }

    fn fallacies(&self, text: &str) -> Vec<Fallacy> {
        patterns::detect_fallacies(text)
    }

    fn has_statistic(&self, text: &str) -> bool {
        patterns::has_statistic(text)
    }

    fn has_citation(&self, text: &str) -> bool {
        patterns::has_citation(text)
    }

    fn has_hedge(&self, text: &str) -> bool {
        patterns::has_hedge(text)
    }

    fn has_negation(&self, text: &str) -> bool {
        patterns::has_negation(text)
    }

    fn value_terms(&self, text: &str) -> BTreeSet<String> {
        patterns::value_terms(text)
    }

    fn themes(&self, text: &str) -> Vec<String> {
        extract_themes(text, self.min_theme_len, self.max_theme_len)
    }

    fn integration_matches(&self, text: &str) -> usize {
        patterns::integration_matches(text)
    }
}
