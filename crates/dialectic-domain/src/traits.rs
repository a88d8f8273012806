//! Trait definitions for swappable infrastructure
//!
//! Scoring formulas only talk to text through [`TextAnalyzer`], so the lexical
//! heuristics can be replaced by a better NLP backend without touching them.
//! The default implementation lives in `dialectic-text`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reasoning fallacy kinds recognised by lexical heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallacy {
    /// Attacking the people holding a view rather than the view
    AdHominem,

    /// Misrepresenting an opposing view as universally (un)held
    StrawMan,

    /// Presenting only two options where more exist
    FalseDichotomy,
}

impl Fallacy {
    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            Fallacy::AdHominem => "possible ad hominem",
            Fallacy::StrawMan => "possible straw man",
            Fallacy::FalseDichotomy => "possible false dichotomy",
        }
    }
}

/// Lexical analysis used by evaluation and synthesis
///
/// Implementations must be deterministic: the same text always yields the
/// same result.
pub trait TextAnalyzer {
    /// Lowercase content words of the text
    fn keywords(&self, text: &str) -> BTreeSet<String>;

    /// Fallacy kinds detected in the text, each reported at most once
    fn fallacies(&self, text: &str) -> Vec<Fallacy>;

    /// Whether the text carries a numeric or statistical marker
    fn has_statistic(&self, text: &str) -> bool;

    /// Whether the text carries a citation-like marker
    fn has_citation(&self, text: &str) -> bool;

    /// Whether the text contains a hedge word
    fn has_hedge(&self, text: &str) -> bool;

    /// Whether the text contains a negation word
    fn has_negation(&self, text: &str) -> bool;

    /// Value-vocabulary terms mentioned in the text
    fn value_terms(&self, text: &str) -> BTreeSet<String>;

    /// Candidate theme phrases, normalized, in order of appearance
    fn themes(&self, text: &str) -> Vec<String>;

    /// Number of integration-word occurrences in the text
    fn integration_matches(&self, text: &str) -> usize;
}
