//! Quality assessment of a synthesis draft

use crate::SynthesizerConfig;
use dialectic_domain::{Argument, ArgumentDraft, TextAnalyzer};
use dialectic_text::overlap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Integration-word matches at which the advancement bonus saturates
const INTEGRATION_SATURATION: f64 = 5.0;
const NOVELTY_WEIGHT: f64 = 0.6;
const INTEGRATION_WEIGHT: f64 = 0.4;
const COHERENCE_RATIO_WEIGHT: f64 = 0.4;
const COHERENCE_BASE: f64 = 0.2;

/// How well a draft covers, holds together and moves past its sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisQuality {
    /// Share of source keywords the draft keeps, [0, 1]
    pub coverage: f64,
    /// Claim and conclusion grounding in the premises, [0, 1]
    pub coherence: f64,
    /// Novel vocabulary and integrative language, [0, 1]
    pub advancement: f64,
    /// Weighted overall score
    pub overall_score: f64,
}

pub(crate) fn assess<A: TextAnalyzer>(
    analyzer: &A,
    config: &SynthesizerConfig,
    draft: &ArgumentDraft,
    originals: &[&Argument],
) -> SynthesisQuality {
    let draft_text = draft_text(draft);
    let draft_keywords = analyzer.keywords(&draft_text);
    let original_keywords: BTreeSet<String> = originals
        .iter()
        .flat_map(|a| analyzer.keywords(&a.full_text()))
        .collect();

    let coverage = ratio(overlap(&original_keywords, &draft_keywords), original_keywords.len());

    let premise_keywords = analyzer.keywords(&draft.premises.join("\n"));
    let claim_keywords = analyzer.keywords(&draft.claim);
    let conclusion_keywords = analyzer.keywords(&draft.conclusion);
    let coherence = (COHERENCE_RATIO_WEIGHT
        * ratio(overlap(&claim_keywords, &premise_keywords), claim_keywords.len())
        + COHERENCE_RATIO_WEIGHT
            * ratio(
                overlap(&conclusion_keywords, &premise_keywords),
                conclusion_keywords.len(),
            )
        + COHERENCE_BASE)
        .min(1.0);

    let novel = draft_keywords.difference(&original_keywords).count();
    let integration = analyzer.integration_matches(&draft_text) as f64;
    let advancement = NOVELTY_WEIGHT * ratio(novel, draft_keywords.len())
        + INTEGRATION_WEIGHT * (integration / INTEGRATION_SATURATION).min(1.0);

    let overall_score = coverage * config.coverage_weight
        + coherence * config.coherence_weight
        + advancement * config.advancement_weight;

    SynthesisQuality {
        coverage,
        coherence,
        advancement,
        overall_score,
    }
}

fn draft_text(draft: &ArgumentDraft) -> String {
    let mut parts = Vec::with_capacity(draft.premises.len() + 2);
    parts.push(draft.claim.as_str());
    parts.extend(draft.premises.iter().map(String::as_str));
    parts.push(draft.conclusion.as_str());
    parts.join("\n")
}

/// `part / whole`, zero for an empty whole
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
