//! Argument scoring logic

use crate::EvaluatorConfig;
use dialectic_domain::{Argument, ArgumentId, Fallacy, TextAnalyzer};
use dialectic_graph::ArgumentGraph;
use dialectic_text::{overlap, LexicalAnalyzer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Conclusion/premise keyword overlap contribution
const OVERLAP_WEIGHT: f64 = 0.4;
/// Penalty per detected fallacy kind
const FALLACY_PENALTY: f64 = 0.1;
/// Bonus when the claim shares enough keywords with the body
const COHERENCE_BONUS: f64 = 0.3;
/// Claim keywords that must recur in premises or conclusion
const COHERENCE_MIN_SHARED: usize = 2;
/// Bonus for having at least two premises
const MULTI_PREMISE_BONUS: f64 = 0.2;

const STATISTIC_BONUS: f64 = 0.2;
const CITATION_BONUS: f64 = 0.15;
const HEDGE_BONUS: f64 = 0.1;

const SUPPORTER_STEP: f64 = 0.2;
const SUPPORTER_CAP: f64 = 0.6;
const CONTRADICTOR_STEP: f64 = 0.15;
const CONTRADICTOR_CAP: f64 = 0.45;
const SUPPORTER_CONFIDENCE_WEIGHT: f64 = 0.2;

/// Quality assessment of one argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Structural soundness, [0, 1]
    pub logical_score: f64,
    /// Evidential backing of the premises, [0, 1]
    pub evidence_score: f64,
    /// Backing from related arguments, [0, 1]
    pub support_score: f64,
    /// Weighted overall score, [0, 1]
    pub score: f64,
    /// Findings in favour
    pub strengths: Vec<String>,
    /// Findings against
    pub weaknesses: Vec<String>,
}

/// Scores arguments against their graph context
pub struct Evaluator<A: TextAnalyzer = LexicalAnalyzer> {
    config: EvaluatorConfig,
    analyzer: A,
}

impl Evaluator<LexicalAnalyzer> {
    /// Create an Evaluator with the lexical analyzer
    pub fn new(config: EvaluatorConfig) -> Self {
        Self::with_analyzer(config, LexicalAnalyzer::new())
    }

    /// Create an Evaluator with default configuration
    pub fn default_config() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl<A: TextAnalyzer> Evaluator<A> {
    /// Create an Evaluator over a custom text analyzer
    pub fn with_analyzer(config: EvaluatorConfig, analyzer: A) -> Self {
        Self { config, analyzer }
    }

    /// Active configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score an argument and list its strengths and weaknesses
    pub fn evaluate_argument(&self, argument: &Argument, graph: &ArgumentGraph) -> Evaluation {
        let logical_score = self.logical_score(argument);
        let evidence_score = self.evidence_score(argument);
        let support_score = self.support_score(argument.id(), graph);

        let score = logical_score * self.config.logical_weight
            + evidence_score * self.config.evidence_weight
            + support_score * self.config.support_weight;

        let premise_count = argument.premises().len();
        let confidence = argument.confidence();
        let cfg = &self.config;

        let mut strengths = Vec::new();
        if logical_score > cfg.strong_logic_threshold {
            strengths.push("strong logical structure".to_string());
        }
        if evidence_score > cfg.strong_evidence_threshold {
            strengths.push("well-supported with evidence".to_string());
        }
        if support_score > cfg.strong_support_threshold {
            strengths.push("strong support from related arguments".to_string());
        }
        if confidence > cfg.high_confidence_threshold {
            strengths.push("high confidence level".to_string());
        }
        if premise_count >= cfg.comprehensive_premise_count {
            strengths.push("comprehensive premise set".to_string());
        }

        let mut weaknesses = Vec::new();
        if logical_score < cfg.weak_logic_threshold {
            weaknesses.push("weak logical connection between premises and conclusion".to_string());
        }
        if evidence_score < cfg.weak_evidence_threshold {
            weaknesses.push("insufficient evidence or data".to_string());
        }
        if support_score < cfg.weak_support_threshold {
            weaknesses.push("lack of supporting arguments".to_string());
        }
        if confidence < cfg.low_confidence_threshold {
            weaknesses.push("low confidence level".to_string());
        }
        if premise_count < cfg.min_premise_count {
            weaknesses.push("insufficient premises".to_string());
        }
        if premise_count == 1 {
            weaknesses.push("overly dependent on single premise".to_string());
        }

        tracing::trace!(
            argument_id = %argument.id(),
            logical_score,
            evidence_score,
            support_score,
            score,
            "argument evaluated"
        );

        Evaluation {
            logical_score,
            evidence_score,
            support_score,
            score,
            strengths,
            weaknesses,
        }
    }

    /// Evaluate every argument in the graph, in insertion order
    pub fn evaluate_all(&self, graph: &ArgumentGraph) -> Vec<(ArgumentId, Evaluation)> {
        graph
            .arguments()
            .iter()
            .map(|a| (a.id().clone(), self.evaluate_argument(a, graph)))
            .collect()
    }

    /// Fallacy kinds detected anywhere in the argument's text
    pub fn detected_fallacies(&self, argument: &Argument) -> Vec<Fallacy> {
        self.analyzer.fallacies(&argument.full_text())
    }

    /// Keyword overlap, coherence and premise-count heuristics, clamped to [0, 1]
    pub fn logical_score(&self, argument: &Argument) -> f64 {
        let claim_keywords = self.analyzer.keywords(argument.claim());
        let conclusion_keywords = self.analyzer.keywords(argument.conclusion());
        let premise_keywords: BTreeSet<String> = argument
            .premises()
            .iter()
            .flat_map(|p| self.analyzer.keywords(p))
            .collect();

        let mut score = 0.0;

        if !conclusion_keywords.is_empty() {
            let shared = overlap(&conclusion_keywords, &premise_keywords) as f64;
            score += shared / conclusion_keywords.len() as f64 * OVERLAP_WEIGHT;
        }

        score -= self.detected_fallacies(argument).len() as f64 * FALLACY_PENALTY;

        let body_keywords: BTreeSet<String> =
            premise_keywords.union(&conclusion_keywords).cloned().collect();
        if overlap(&claim_keywords, &body_keywords) >= COHERENCE_MIN_SHARED {
            score += COHERENCE_BONUS;
        }

        if argument.premises().len() >= 2 {
            score += MULTI_PREMISE_BONUS;
        }

        score.clamp(0.0, 1.0)
    }

    /// Statistic, citation and hedge markers summed over premises, capped at 1
    pub fn evidence_score(&self, argument: &Argument) -> f64 {
        let total: f64 = argument
            .premises()
            .iter()
            .map(|premise| {
                let mut s = 0.0;
                if self.analyzer.has_statistic(premise) {
                    s += STATISTIC_BONUS;
                }
                if self.analyzer.has_citation(premise) {
                    s += CITATION_BONUS;
                }
                if self.analyzer.has_hedge(premise) {
                    s += HEDGE_BONUS;
                }
                s
            })
            .sum();
        total.min(1.0)
    }

    /// Direct supporters raise the score, direct contradictors lower it
    pub fn support_score(&self, id: &ArgumentId, graph: &ArgumentGraph) -> f64 {
        let supporters = graph.get_supporters(id);
        let contradictors = graph.get_contradictors(id);

        let avg_confidence = if supporters.is_empty() {
            0.0
        } else {
            supporters.iter().map(|a| a.confidence()).sum::<f64>() / supporters.len() as f64
        };

        let score = (supporters.len() as f64 * SUPPORTER_STEP).min(SUPPORTER_CAP)
            - (contradictors.len() as f64 * CONTRADICTOR_STEP).min(CONTRADICTOR_CAP)
            + avg_confidence * SUPPORTER_CONFIDENCE_WEIGHT;
        score.clamp(0.0, 1.0)
    }
}
