//! Synthesis construction

use crate::analysis::{analyze, SynthesisAnalysis};
use crate::quality::{assess, SynthesisQuality};
use crate::SynthesizerConfig;
use dialectic_domain::{
    Argument, ArgumentDraft, ArgumentId, ArgumentType, DialecticError, RelationshipType, Result,
    TextAnalyzer,
};
use dialectic_graph::ArgumentGraph;
use dialectic_text::LexicalAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stand-in theme when the inputs share none
const FALLBACK_THEME: &str = "multiple perspectives";

/// A draft synthesis with the analysis that produced it and its quality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Unvalidated synthesis argument
    pub draft: ArgumentDraft,
    /// Relationship analysis of the inputs
    pub analysis: SynthesisAnalysis,
    /// Quality of `draft` against the inputs
    pub quality: SynthesisQuality,
}

/// Merges two or more arguments into a synthesis draft
pub struct Synthesizer<A: TextAnalyzer = LexicalAnalyzer> {
    config: SynthesizerConfig,
    analyzer: A,
}

impl Synthesizer<LexicalAnalyzer> {
    /// Create a Synthesizer whose theme bounds follow the config
    pub fn new(config: SynthesizerConfig) -> Self {
        let analyzer =
            LexicalAnalyzer::with_theme_bounds(config.min_theme_len, config.max_theme_len);
        Self::with_analyzer(config, analyzer)
    }

    /// Create a Synthesizer with default configuration
    pub fn default_config() -> Self {
        Self::new(SynthesizerConfig::default())
    }
}

impl<A: TextAnalyzer> Synthesizer<A> {
    /// Create a Synthesizer over a custom text analyzer
    pub fn with_analyzer(config: SynthesizerConfig, analyzer: A) -> Self {
        Self { config, analyzer }
    }

    /// Active configuration
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Analyze `arguments`, build a synthesis draft and assess it
    ///
    /// # Errors
    ///
    /// `InvalidInput` when fewer than two arguments are given.
    pub fn generate_synthesis(
        &self,
        arguments: &[&Argument],
        graph: &ArgumentGraph,
    ) -> Result<SynthesisResult> {
        if arguments.len() < 2 {
            return Err(DialecticError::InvalidInput(format!(
                "synthesis requires at least 2 arguments, got {}",
                arguments.len()
            )));
        }

        let mut analysis = analyze(&self.analyzer, arguments);
        analysis.direct_contradictions = direct_contradictions(arguments, graph);

        let draft = self.build_draft(arguments, &analysis);
        let quality = assess(&self.analyzer, &self.config, &draft, arguments);

        debug!(
            inputs = arguments.len(),
            shared_themes = analysis.shared_themes.len(),
            irreconcilable = analysis.irreconcilable.len(),
            confidence = draft.confidence,
            overall = quality.overall_score,
            "Generated synthesis draft"
        );

        Ok(SynthesisResult {
            draft,
            analysis,
            quality,
        })
    }

    /// Resolve ids in `graph`, then synthesize
    ///
    /// # Errors
    ///
    /// `UnknownReference` for an id not in the graph, otherwise as
    /// [`generate_synthesis`](Self::generate_synthesis).
    pub fn synthesize_ids(
        &self,
        ids: &[ArgumentId],
        graph: &ArgumentGraph,
    ) -> Result<SynthesisResult> {
        let arguments = ids
            .iter()
            .map(|id| {
                graph
                    .get_argument(id)
                    .ok_or_else(|| DialecticError::UnknownReference(id.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        self.generate_synthesis(&arguments, graph)
    }

    fn build_draft(&self, arguments: &[&Argument], analysis: &SynthesisAnalysis) -> ArgumentDraft {
        let primary = analysis
            .shared_themes
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_THEME);

        let claim = match analysis.reconcilable.len() {
            0 => format!(
                "A comprehensive integration of {} perspectives on {}",
                arguments.len(),
                primary
            ),
            n => format!(
                "A synthesis of {} that reconciles {} apparent {}",
                primary,
                n,
                plural(n, "difference", "differences")
            ),
        };

        let mut premises: Vec<String> = analysis
            .shared_premises
            .iter()
            .map(|p| format!("Commonly accepted: {}", p))
            .collect();
        premises.extend(
            analysis
                .complementary
                .iter()
                .map(|pair| format!("{} complements {}", pair.first_premise, pair.second_premise)),
        );
        premises.extend(
            analysis
                .reconcilable
                .iter()
                .map(|c| format!("Balancing {} with {}", c.first_claim, c.second_claim)),
        );

        let mut conclusion = match analysis.irreconcilable.len() {
            0 => {
                "A unified approach can address the core concerns of every perspective".to_string()
            }
            n => format!(
                "An integrated approach is possible, but {} irreconcilable {} must be acknowledged",
                n,
                plural(n, "difference", "differences")
            ),
        };
        if !analysis.shared_themes.is_empty() {
            conclusion.push_str(", building on shared themes: ");
            conclusion.push_str(&analysis.shared_themes.join(", "));
        }

        let mut draft = ArgumentDraft::new(ArgumentType::Synthesis, claim, conclusion)
            .with_premises(premises)
            .with_confidence(self.confidence(arguments, analysis));
        draft.supports = arguments.iter().map(|a| a.id().clone()).collect();
        draft
    }

    /// Mean input confidence plus capped theme and complement bonuses, minus a
    /// capped conflict penalty
    fn confidence(&self, arguments: &[&Argument], analysis: &SynthesisAnalysis) -> f64 {
        let c = &self.config;
        let mean = arguments.iter().map(|a| a.confidence()).sum::<f64>() / arguments.len() as f64;
        let themes =
            (analysis.shared_themes.len() as f64 * c.shared_theme_step).min(c.shared_theme_cap);
        let complements =
            (analysis.complementary.len() as f64 * c.complementary_step).min(c.complementary_cap);
        let conflicts = (analysis.irreconcilable.len() as f64 * c.irreconcilable_step)
            .min(c.irreconcilable_cap);

        (mean * c.base_confidence_weight + themes + complements - conflicts).clamp(0.0, 1.0)
    }
}

/// Ordered input pairs joined by a contradicts edge
fn direct_contradictions(arguments: &[&Argument], graph: &ArgumentGraph) -> usize {
    let mut count = 0;
    for (i, from) in arguments.iter().enumerate() {
        for (j, to) in arguments.iter().enumerate() {
            if i != j && graph.has_relationship(from.id(), to.id(), RelationshipType::Contradicts) {
                count += 1;
            }
        }
    }
    count
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
