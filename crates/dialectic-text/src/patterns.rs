//! Regex heuristics for fallacies, evidence markers and vocabulary

use dialectic_domain::Fallacy;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Shared values a reconcilable conflict must have in common
pub const VALUE_TERMS: [&str; 7] = [
    "justice",
    "equality",
    "freedom",
    "security",
    "prosperity",
    "sustainability",
    "welfare",
];

/// "people who believe/think/say ..."
static AD_HOMINEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpeople\s+who\s+(?:believe|think|say)\b").unwrap());

/// "nobody/no one/everyone thinks/believes/says ..."
static STRAW_MAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:nobody|no\s+one|everyone)\s+(?:thinks|believes|says)\b").unwrap()
});

/// "either/only ... or ...", also across line breaks
static FALSE_DICHOTOMY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\b(?:either|only)\b.*?\bor\b").unwrap());

/// Percentages and research vocabulary
static STATISTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d\s*%|\b(?:percent|data|study|research|evidence)\b").unwrap()
});

/// "(2019)", "et al.", "according to"
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\d{4}\)|\bet al\.|\baccording to\b").unwrap());

static HEDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:might|may|could|possibly|perhaps|likely|probably|generally|tends\s+to)\b",
    )
    .unwrap()
});

static NEGATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:not|no|never|none|isn't|aren't|doesn't|don't)\b").unwrap()
});

/// Word stems signalling integrative language
static INTEGRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)integrat|combin|balanc|reconcil|harmoniz").unwrap());

/// Fallacy kinds present in `text`, each at most once, in a fixed order
pub(crate) fn detect_fallacies(text: &str) -> Vec<Fallacy> {
    let checks: [(&LazyLock<Regex>, Fallacy); 3] = [
        (&AD_HOMINEM_RE, Fallacy::AdHominem),
        (&STRAW_MAN_RE, Fallacy::StrawMan),
        (&FALSE_DICHOTOMY_RE, Fallacy::FalseDichotomy),
    ];
    checks
        .into_iter()
        .filter(|(re, _)| re.is_match(text))
        .map(|(_, fallacy)| fallacy)
        .collect()
}

pub(crate) fn has_statistic(text: &str) -> bool {
    STATISTIC_RE.is_match(text)
}

pub(crate) fn has_citation(text: &str) -> bool {
    CITATION_RE.is_match(text)
}

pub(crate) fn has_hedge(text: &str) -> bool {
    HEDGE_RE.is_match(text)
}

pub(crate) fn has_negation(text: &str) -> bool {
    NEGATION_RE.is_match(text)
}

pub(crate) fn integration_matches(text: &str) -> usize {
    INTEGRATION_RE.find_iter(text).count()
}

/// Value terms appearing anywhere in `text` (substring, case-insensitive)
pub(crate) fn value_terms(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    VALUE_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| term.to_string())
        .collect()
}
