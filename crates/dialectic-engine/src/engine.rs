//! Dialectical engine: owns the graph, logs insertions, proposes syntheses

use crate::history::{EngineHistory, HistoryAction, HistoryEntry};
use crate::EngineConfig;
use dialectic_domain::{
    current_timestamp, Argument, ArgumentDraft, ArgumentId, ArgumentType, DialecticError,
    RelationshipType, Result, TextAnalyzer,
};
use dialectic_evaluator::{Evaluation, Evaluator};
use dialectic_graph::ArgumentGraph;
use dialectic_synthesizer::{SynthesisResult, Synthesizer};
use dialectic_text::LexicalAnalyzer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

const SHARED_CONCEPT_WEIGHT: f64 = 0.3;
const RESOLVABLE_WEIGHT: f64 = 0.4;
const CONFIDENCE_WEIGHT: f64 = 0.15;
const QUALITY_WEIGHT: f64 = 0.15;

/// Resolvability when neither side contradicts the other
const NO_DIRECT_CONTRADICTION: f64 = 0.5;
/// Resolvability when confidences are close
const CLOSE_CONFIDENCE: f64 = 0.3;
/// Confidence gap below which two sides count as close
const CLOSE_CONFIDENCE_GAP: f64 = 0.3;
/// Resolvability when at least one concept is shared
const COMMON_CONCEPT: f64 = 0.2;

/// Added to the weaker side's confidence in a two-argument synthesis
const PAIR_SYNTHESIS_BONUS: f64 = 0.1;

/// A thesis/antithesis pair worth synthesizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisCandidate {
    /// Thesis side
    pub thesis: ArgumentId,
    /// Antithesis side
    pub antithesis: ArgumentId,
    /// Claim and conclusion keywords both sides use
    pub shared_concepts: Vec<String>,
    /// Resolvability score in [0, 1]
    pub resolvable_differences: f64,
    /// Synthesis potential in [0, 1]
    pub potential: f64,
}

/// Orchestrates a debate held in its own [`ArgumentGraph`]
///
/// # Examples
///
/// ```
/// use dialectic_domain::{ArgumentDraft, ArgumentType};
/// use dialectic_engine::DialecticalEngine;
///
/// let mut engine = DialecticalEngine::default_config();
/// assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Thesis);
///
/// let draft = ArgumentDraft::new(ArgumentType::Thesis, "Ban cars downtown", "Pedestrianize");
/// engine.add_argument(draft.with_id("t")).unwrap();
/// assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Antithesis);
/// assert_eq!(engine.history().len(), 1);
/// ```
pub struct DialecticalEngine<A: TextAnalyzer + Clone = LexicalAnalyzer> {
    config: EngineConfig,
    graph: ArgumentGraph,
    history: EngineHistory,
    analyzer: A,
    evaluator: Evaluator<A>,
    synthesizer: Synthesizer<A>,
}

impl DialecticalEngine<LexicalAnalyzer> {
    /// Create an engine with an empty graph
    pub fn new(config: EngineConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.evaluator.clone()),
            synthesizer: Synthesizer::new(config.synthesizer.clone()),
            analyzer: LexicalAnalyzer::new(),
            graph: ArgumentGraph::new(),
            history: EngineHistory::new(),
            config,
        }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<A: TextAnalyzer + Clone> DialecticalEngine<A> {
    /// Create an engine whose scoring, synthesis and candidate search all use `analyzer`
    pub fn with_analyzer(config: EngineConfig, analyzer: A) -> Self {
        Self {
            evaluator: Evaluator::with_analyzer(config.evaluator.clone(), analyzer.clone()),
            synthesizer: Synthesizer::with_analyzer(config.synthesizer.clone(), analyzer.clone()),
            analyzer,
            graph: ArgumentGraph::new(),
            history: EngineHistory::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The owned graph
    pub fn graph(&self) -> &ArgumentGraph {
        &self.graph
    }

    /// Mutable access to the owned graph
    ///
    /// Insertions made here bypass the history log.
    pub fn graph_mut(&mut self) -> &mut ArgumentGraph {
        &mut self.graph
    }

    /// Insertion log
    pub fn history(&self) -> &EngineHistory {
        &self.history
    }

    /// Validate and insert an argument, then log it
    ///
    /// # Errors
    ///
    /// Whatever [`ArgumentGraph::add_argument`] rejects; nothing is logged then.
    pub fn add_argument(&mut self, draft: ArgumentDraft) -> Result<ArgumentId> {
        let (argument_id, argument_type) = {
            let argument = self.graph.add_argument(draft)?;
            (argument.id().clone(), argument.argument_type())
        };

        let entry = HistoryEntry {
            timestamp: current_timestamp(),
            action: HistoryAction::Added,
            argument_id: argument_id.clone(),
            argument_type,
            context: self.ids_by_type(),
        };
        self.history.record(entry);

        debug!(
            argument_id = %argument_id,
            argument_type = %argument_type,
            total = self.graph.len(),
            "Added argument"
        );
        Ok(argument_id)
    }

    /// Insert a synthesis draft produced by either synthesis path
    ///
    /// # Errors
    ///
    /// `Validation` if the draft is not of type synthesis or fails argument
    /// validation (for example a two-argument synthesis with confidence above 1).
    pub fn add_synthesis(&mut self, draft: ArgumentDraft) -> Result<ArgumentId> {
        if draft.argument_type != ArgumentType::Synthesis {
            return Err(DialecticError::Validation(format!(
                "expected a synthesis draft, got {}",
                draft.argument_type
            )));
        }
        self.add_argument(draft)
    }

    /// Number of arguments of each type; every type is present
    pub fn type_counts(&self) -> BTreeMap<ArgumentType, usize> {
        let mut counts: BTreeMap<ArgumentType, usize> =
            ArgumentType::ALL.iter().map(|t| (*t, 0)).collect();
        for argument in self.graph.arguments() {
            *counts.entry(argument.argument_type()).or_insert(0) += 1;
        }
        counts
    }

    /// Recommend the type of the next argument
    ///
    /// First matching rule wins: no thesis, no antithesis, no synthesis, fewer
    /// objections than theses plus antitheses, fewer rebuttals than
    /// objections, otherwise synthesis.
    pub fn suggest_next_argument_type(&self) -> ArgumentType {
        let counts = self.type_counts();
        let count = |t: ArgumentType| counts.get(&t).copied().unwrap_or(0);

        let theses = count(ArgumentType::Thesis);
        let antitheses = count(ArgumentType::Antithesis);
        let objections = count(ArgumentType::Objection);

        if theses == 0 {
            ArgumentType::Thesis
        } else if antitheses == 0 {
            ArgumentType::Antithesis
        } else if count(ArgumentType::Synthesis) == 0 {
            ArgumentType::Synthesis
        } else if objections < theses + antitheses {
            ArgumentType::Objection
        } else if count(ArgumentType::Rebuttal) < objections {
            ArgumentType::Rebuttal
        } else {
            ArgumentType::Synthesis
        }
    }

    /// Connected thesis/antithesis pairs without a synthesis yet, best first
    pub fn find_synthesis_candidates(&self) -> Vec<SynthesisCandidate> {
        let theses = self.graph.get_arguments_by_type(ArgumentType::Thesis);
        let antitheses = self.graph.get_arguments_by_type(ArgumentType::Antithesis);
        let syntheses = self.graph.get_arguments_by_type(ArgumentType::Synthesis);

        let mut candidates = Vec::new();
        for thesis in &theses {
            for antithesis in &antitheses {
                if !self.connected(thesis.id(), antithesis.id()) {
                    continue;
                }
                let already_synthesized = syntheses.iter().any(|s| {
                    self.graph.has_relationship(s.id(), thesis.id(), RelationshipType::Supports)
                        && self.graph.has_relationship(
                            s.id(),
                            antithesis.id(),
                            RelationshipType::Supports,
                        )
                });
                if already_synthesized {
                    trace!(
                        thesis = %thesis.id(),
                        antithesis = %antithesis.id(),
                        "Pair already synthesized"
                    );
                    continue;
                }
                candidates.push(self.score_pair(thesis, antithesis));
            }
        }

        candidates.sort_by(|a, b| b.potential.total_cmp(&a.potential));
        debug!(candidates = candidates.len(), "Found synthesis candidates");
        candidates
    }

    /// Merge a thesis and an antithesis into a synthesis draft
    ///
    /// The draft's confidence is the weaker side's confidence plus 0.1 and is
    /// not clamped, so it can exceed 1. Such a draft fails validation when
    /// inserted.
    ///
    /// # Errors
    ///
    /// `UnknownReference` if either id is not in the graph.
    pub fn generate_synthesis(
        &self,
        thesis_id: &ArgumentId,
        antithesis_id: &ArgumentId,
    ) -> Result<ArgumentDraft> {
        let thesis = self.require(thesis_id)?;
        let antithesis = self.require(antithesis_id)?;

        let shared = self.shared_concepts(thesis, antithesis);
        let premises: Vec<String> = thesis
            .premises()
            .iter()
            .chain(antithesis.premises())
            .filter(|premise| {
                let lowered = premise.to_lowercase();
                shared.iter().any(|concept| lowered.contains(concept.as_str()))
            })
            .cloned()
            .collect();

        let claim = format!(
            "Integration of \"{}\" and \"{}\"",
            thesis.claim(),
            antithesis.claim()
        );
        let conclusion = format!(
            "A balanced position holds that {} while recognizing that {}",
            thesis.conclusion(),
            antithesis.conclusion()
        );

        let confidence = thesis.confidence().min(antithesis.confidence()) + PAIR_SYNTHESIS_BONUS;
        let mut draft = ArgumentDraft::new(ArgumentType::Synthesis, claim, conclusion)
            .with_premises(premises)
            .with_confidence(confidence);
        draft.supports = vec![thesis_id.clone(), antithesis_id.clone()];
        Ok(draft)
    }

    /// Score one stored argument
    ///
    /// # Errors
    ///
    /// `UnknownReference` if `id` is not in the graph.
    pub fn evaluate(&self, id: &ArgumentId) -> Result<Evaluation> {
        let argument = self.require(id)?;
        Ok(self.evaluator.evaluate_argument(argument, &self.graph))
    }

    /// Score one stored argument and attach its strengths and weaknesses
    pub fn record_evaluation(&mut self, id: &ArgumentId) -> Result<Evaluation> {
        let evaluation = self.evaluate(id)?;
        let argument = self
            .graph
            .get_argument_mut(id)
            .ok_or_else(|| DialecticError::UnknownReference(id.clone()))?;
        argument.attach_evaluation(&evaluation.strengths, &evaluation.weaknesses);
        Ok(evaluation)
    }

    /// Run the general synthesizer over stored arguments
    pub fn synthesize(&self, ids: &[ArgumentId]) -> Result<SynthesisResult> {
        self.synthesizer.synthesize_ids(ids, &self.graph)
    }

    /// Directed paths between two arguments, bounded by `max_path_nodes`
    pub fn find_paths(&self, start: &ArgumentId, end: &ArgumentId) -> Vec<Vec<ArgumentId>> {
        let bound = self.config.max_path_nodes.unwrap_or(usize::MAX);
        self.graph.find_paths_bounded(start, end, bound)
    }

    fn require(&self, id: &ArgumentId) -> Result<&Argument> {
        self.graph
            .get_argument(id)
            .ok_or_else(|| DialecticError::UnknownReference(id.clone()))
    }

    fn ids_by_type(&self) -> BTreeMap<ArgumentType, Vec<ArgumentId>> {
        let mut context: BTreeMap<ArgumentType, Vec<ArgumentId>> =
            ArgumentType::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for argument in self.graph.arguments() {
            context
                .entry(argument.argument_type())
                .or_default()
                .push(argument.id().clone());
        }
        context
    }

    /// Responds-to or contradicts edge in either direction
    fn connected(&self, a: &ArgumentId, b: &ArgumentId) -> bool {
        [RelationshipType::RespondsTo, RelationshipType::Contradicts]
            .into_iter()
            .any(|kind| {
                self.graph.has_relationship(a, b, kind) || self.graph.has_relationship(b, a, kind)
            })
    }

    fn directly_contradicting(&self, a: &ArgumentId, b: &ArgumentId) -> bool {
        self.graph.has_relationship(a, b, RelationshipType::Contradicts)
            || self.graph.has_relationship(b, a, RelationshipType::Contradicts)
    }

    fn concepts(&self, argument: &Argument) -> BTreeSet<String> {
        self.analyzer
            .keywords(&format!("{} {}", argument.claim(), argument.conclusion()))
    }

    fn shared_concepts(&self, a: &Argument, b: &Argument) -> Vec<String> {
        let first = self.concepts(a);
        let second = self.concepts(b);
        first.intersection(&second).cloned().collect()
    }

    fn score_pair(&self, thesis: &Argument, antithesis: &Argument) -> SynthesisCandidate {
        let shared_concepts = self.shared_concepts(thesis, antithesis);

        let mut resolvable = 0.0;
        if !self.directly_contradicting(thesis.id(), antithesis.id()) {
            resolvable += NO_DIRECT_CONTRADICTION;
        }
        if (thesis.confidence() - antithesis.confidence()).abs() < CLOSE_CONFIDENCE_GAP {
            resolvable += CLOSE_CONFIDENCE;
        }
        if !shared_concepts.is_empty() {
            resolvable += COMMON_CONCEPT;
        }

        let avg_confidence = (thesis.confidence() + antithesis.confidence()) / 2.0;
        let avg_quality = (quality_delta(thesis) + quality_delta(antithesis)) / 2.0;

        let potential = (shared_concepts.len() as f64 * SHARED_CONCEPT_WEIGHT
            + resolvable * RESOLVABLE_WEIGHT
            + avg_confidence * CONFIDENCE_WEIGHT
            + avg_quality * QUALITY_WEIGHT)
            .clamp(0.0, 1.0);

        SynthesisCandidate {
            thesis: thesis.id().clone(),
            antithesis: antithesis.id().clone(),
            shared_concepts,
            resolvable_differences: resolvable,
            potential,
        }
    }
}

/// Net balance of recorded strengths over weaknesses, in (-1, 1)
fn quality_delta(argument: &Argument) -> f64 {
    let strengths = argument.strengths().len() as f64;
    let weaknesses = argument.weaknesses().len() as f64;
    (strengths - weaknesses) / (strengths + weaknesses + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_domain::Fallacy;

    fn thesis(id: &str, claim: &str, conclusion: &str, confidence: f64) -> ArgumentDraft {
        ArgumentDraft::new(ArgumentType::Thesis, claim, conclusion)
            .with_id(id)
            .with_confidence(confidence)
    }

    fn antithesis(id: &str, claim: &str, conclusion: &str, confidence: f64) -> ArgumentDraft {
        ArgumentDraft::new(ArgumentType::Antithesis, claim, conclusion)
            .with_id(id)
            .with_confidence(confidence)
    }

    fn add_typed(engine: &mut DialecticalEngine, id: &str, argument_type: ArgumentType) {
        engine
            .add_argument(
                ArgumentDraft::new(argument_type, format!("claim {}", id), "conclusion")
                    .with_id(id),
            )
            .unwrap();
    }

    #[test]
    fn test_history_snapshot_per_insert() {
        let mut engine = DialecticalEngine::default_config();
        add_typed(&mut engine, "t1", ArgumentType::Thesis);
        add_typed(&mut engine, "a1", ArgumentType::Antithesis);

        let entries = engine.history().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].context[&ArgumentType::Thesis], vec![ArgumentId::new("t1")]);
        assert!(entries[0].context[&ArgumentType::Antithesis].is_empty());
        assert_eq!(entries[1].argument_type, ArgumentType::Antithesis);
        assert_eq!(entries[1].context[&ArgumentType::Antithesis], vec![ArgumentId::new("a1")]);
        assert_eq!(entries[1].context.len(), 5);
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn test_failed_insert_not_logged() {
        let mut engine = DialecticalEngine::default_config();
        add_typed(&mut engine, "t1", ArgumentType::Thesis);
        let err = engine
            .add_argument(ArgumentDraft::new(ArgumentType::Thesis, "again", "again").with_id("t1"))
            .unwrap_err();
        assert_eq!(err, DialecticError::DuplicateId(ArgumentId::new("t1")));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_suggestion_sequence() {
        let mut engine = DialecticalEngine::default_config();
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Thesis);

        add_typed(&mut engine, "t1", ArgumentType::Thesis);
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Antithesis);

        add_typed(&mut engine, "a1", ArgumentType::Antithesis);
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Synthesis);

        add_typed(&mut engine, "s1", ArgumentType::Synthesis);
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Objection);

        add_typed(&mut engine, "o1", ArgumentType::Objection);
        // 1 objection < 2 theses+antitheses
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Objection);

        add_typed(&mut engine, "o2", ArgumentType::Objection);
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Rebuttal);

        add_typed(&mut engine, "r1", ArgumentType::Rebuttal);
        add_typed(&mut engine, "r2", ArgumentType::Rebuttal);
        assert_eq!(engine.suggest_next_argument_type(), ArgumentType::Synthesis);
    }

    #[test]
    fn test_type_counts_cover_all_types() {
        let mut engine = DialecticalEngine::default_config();
        add_typed(&mut engine, "t1", ArgumentType::Thesis);
        let counts = engine.type_counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&ArgumentType::Thesis], 1);
        assert_eq!(counts[&ArgumentType::Rebuttal], 0);
    }

    #[test]
    fn test_candidate_requires_connection() {
        let mut engine = DialecticalEngine::default_config();
        engine.add_argument(thesis("t", "Solar power scales", "Invest in solar", 0.8)).unwrap();
        engine.add_argument(antithesis("a", "Coal is cheaper", "Keep coal", 0.6)).unwrap();
        assert!(engine.find_synthesis_candidates().is_empty());

        engine
            .graph_mut()
            .add_responds_to_relationship(&"a".into(), &"t".into())
            .unwrap();
        assert_eq!(engine.find_synthesis_candidates().len(), 1);
    }

    #[test]
    fn test_candidate_potential_formula() {
        let mut engine = DialecticalEngine::default_config();
        engine
            .add_argument(thesis("t", "Remote work boosts output", "Allow remote work", 0.8))
            .unwrap();
        engine
            .add_argument(
                antithesis("a", "Office work builds culture", "Require office work", 0.6)
                    .contradicting("t"),
            )
            .unwrap();

        let candidates = engine.find_synthesis_candidates();
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        // shared: "work"; contradiction present; |0.8 - 0.6| < 0.3
        assert_eq!(c.shared_concepts, vec!["work"]);
        assert!((c.resolvable_differences - 0.5).abs() < 1e-9);
        let expected = 0.3 + 0.5 * 0.4 + 0.7 * 0.15;
        assert!((c.potential - expected).abs() < 1e-9);
    }

    #[test]
    fn test_candidate_from_thesis_side_edges() {
        let mut engine = DialecticalEngine::default_config();
        engine
            .add_argument(thesis("t", "Remote work boosts output", "Allow remote work", 0.8))
            .unwrap();
        engine
            .add_argument(antithesis("a", "Office work builds culture", "Require office work", 0.6))
            .unwrap();
        assert!(engine.find_synthesis_candidates().is_empty());

        engine
            .graph_mut()
            .add_responds_to_relationship(&"t".into(), &"a".into())
            .unwrap();
        let candidates = engine.find_synthesis_candidates();
        assert_eq!(candidates.len(), 1);
        // no contradiction, close confidences, shared "work"
        assert!((candidates[0].resolvable_differences - 1.0).abs() < 1e-9);
        assert!((candidates[0].potential - (0.3 + 0.4 + 0.7 * 0.15)).abs() < 1e-9);

        engine
            .graph_mut()
            .add_contradicts_relationship(&"t".into(), &"a".into())
            .unwrap();
        let candidates = engine.find_synthesis_candidates();
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].resolvable_differences - 0.5).abs() < 1e-9);
        assert!((candidates[0].potential - (0.3 + 0.2 + 0.7 * 0.15)).abs() < 1e-9);
    }

    #[test]
    fn test_existing_synthesis_excludes_pair() {
        let mut engine = DialecticalEngine::default_config();
        engine.add_argument(thesis("t", "Tax wealth", "Raise taxes", 0.7)).unwrap();
        engine
            .add_argument(antithesis("a", "Wealth flees", "Lower taxes", 0.7).responding_to("t"))
            .unwrap();
        assert_eq!(engine.find_synthesis_candidates().len(), 1);

        let draft = engine.generate_synthesis(&"t".into(), &"a".into()).unwrap();
        engine.add_synthesis(draft).unwrap();
        assert!(engine.find_synthesis_candidates().is_empty());
    }

    #[test]
    fn test_candidates_sorted_descending() {
        let mut engine = DialecticalEngine::default_config();
        engine.add_argument(thesis("t1", "Trains beat planes", "Build trains", 0.9)).unwrap();
        engine.add_argument(thesis("t2", "Cities need parks", "Plant trees", 0.2)).unwrap();
        engine
            .add_argument(
                antithesis("a", "Planes beat trains", "Build airports", 0.9)
                    .responding_to("t1")
                    .contradicting("t2"),
            )
            .unwrap();

        let candidates = engine.find_synthesis_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].thesis, ArgumentId::new("t1"));
        assert!(candidates[0].potential >= candidates[1].potential);
    }

    #[test]
    fn test_pair_synthesis_shape() {
        let mut engine = DialecticalEngine::default_config();
        engine
            .add_argument(
                thesis("t", "Remote work boosts output", "Allow remote work", 0.8)
                    .with_premises(["Commutes waste time", "Focus work needs quiet"]),
            )
            .unwrap();
        engine
            .add_argument(
                antithesis("a", "Office work builds culture", "Require office work", 0.6)
                    .with_premise("Work friendships form in person"),
            )
            .unwrap();

        let draft = engine.generate_synthesis(&"t".into(), &"a".into()).unwrap();
        assert_eq!(
            draft.claim,
            "Integration of \"Remote work boosts output\" and \"Office work builds culture\""
        );
        assert_eq!(
            draft.premises,
            vec!["Focus work needs quiet", "Work friendships form in person"]
        );
        assert_eq!(
            draft.conclusion,
            "A balanced position holds that Allow remote work while recognizing that Require office work"
        );
        assert!((draft.confidence - 0.7).abs() < 1e-9);
        assert_eq!(draft.argument_type, ArgumentType::Synthesis);
        assert_eq!(draft.supports, vec![ArgumentId::new("t"), ArgumentId::new("a")]);
    }

    #[test]
    fn test_pair_synthesis_unknown_id() {
        let mut engine = DialecticalEngine::default_config();
        engine.add_argument(thesis("t", "Claim", "Conclusion", 0.5)).unwrap();
        let err = engine.generate_synthesis(&"t".into(), &"ghost".into()).unwrap_err();
        assert_eq!(err, DialecticError::UnknownReference(ArgumentId::new("ghost")));
    }

    #[test]
    fn test_add_synthesis_rejects_other_types() {
        let mut engine = DialecticalEngine::default_config();
        let err = engine
            .add_synthesis(ArgumentDraft::new(ArgumentType::Thesis, "Claim", "Conclusion"))
            .unwrap_err();
        assert!(matches!(err, DialecticError::Validation(_)));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_record_evaluation_attaches_findings() {
        let mut engine = DialecticalEngine::default_config();
        engine.add_argument(thesis("t", "Claim here", "Conclusion here", 0.2)).unwrap();

        let evaluation = engine.record_evaluation(&"t".into()).unwrap();
        let stored = engine.graph().get_argument(&"t".into()).unwrap();
        assert_eq!(stored.weaknesses(), evaluation.weaknesses.as_slice());
        assert!(stored.weaknesses().iter().any(|w| w == "low confidence level"));

        // attaching twice does not duplicate
        engine.record_evaluation(&"t".into()).unwrap();
        let stored = engine.graph().get_argument(&"t".into()).unwrap();
        assert_eq!(stored.weaknesses().len(), evaluation.weaknesses.len());
    }

    #[test]
    fn test_quality_delta() {
        let mut argument = Argument::from_draft(
            ArgumentDraft::new(ArgumentType::Thesis, "Claim", "Conclusion"),
        )
        .unwrap();
        assert_eq!(quality_delta(&argument), 0.0);
        argument.add_strength("clear");
        argument.add_strength("cited");
        argument.add_weakness("thin");
        assert!((quality_delta(&argument) - 0.25).abs() < 1e-9);
    }

    /// Sees one concept everywhere and a statistic in every premise
    #[derive(Clone)]
    struct EnergyAnalyzer;

    impl TextAnalyzer for EnergyAnalyzer {
        fn keywords(&self, _text: &str) -> BTreeSet<String> {
            BTreeSet::from(["energy".to_string()])
        }
        fn fallacies(&self, _text: &str) -> Vec<Fallacy> {
            Vec::new()
        }
        fn has_statistic(&self, _text: &str) -> bool {
            true
        }
        fn has_citation(&self, _text: &str) -> bool {
            false
        }
        fn has_hedge(&self, _text: &str) -> bool {
            false
        }
        fn has_negation(&self, _text: &str) -> bool {
            false
        }
        fn value_terms(&self, _text: &str) -> BTreeSet<String> {
            BTreeSet::new()
        }
        fn themes(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
        fn integration_matches(&self, _text: &str) -> usize {
            0
        }
    }

    fn solar_debate<A: TextAnalyzer + Clone>(engine: &mut DialecticalEngine<A>) {
        engine
            .add_argument(
                thesis("t", "Solar power scales", "Invest in solar", 0.8)
                    .with_premise("Panels cut energy bills"),
            )
            .unwrap();
        engine
            .add_argument(
                antithesis("a", "Coal is cheaper", "Keep coal", 0.6)
                    .with_premise("Coal plants run at night")
                    .responding_to("t"),
            )
            .unwrap();
    }

    #[test]
    fn test_custom_analyzer_drives_concepts() {
        let mut lexical = DialecticalEngine::default_config();
        solar_debate(&mut lexical);
        let candidates = lexical.find_synthesis_candidates();
        assert!(candidates[0].shared_concepts.is_empty());
        let draft = lexical.generate_synthesis(&"t".into(), &"a".into()).unwrap();
        assert!(draft.premises.is_empty());
        assert_eq!(lexical.evaluate(&"t".into()).unwrap().evidence_score, 0.0);

        let mut engine = DialecticalEngine::with_analyzer(EngineConfig::default(), EnergyAnalyzer);
        solar_debate(&mut engine);
        let candidates = engine.find_synthesis_candidates();
        assert_eq!(candidates[0].shared_concepts, vec!["energy"]);
        assert!((candidates[0].resolvable_differences - 1.0).abs() < 1e-9);
        assert!((candidates[0].potential - (0.3 + 0.4 + 0.7 * 0.15)).abs() < 1e-9);

        let draft = engine.generate_synthesis(&"t".into(), &"a".into()).unwrap();
        assert_eq!(draft.premises, vec!["Panels cut energy bills"]);
        assert!((engine.evaluate(&"t".into()).unwrap().evidence_score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_find_paths_respects_bound() {
        let config = EngineConfig {
            max_path_nodes: Some(2),
            ..Default::default()
        };
        let mut engine = DialecticalEngine::new(config);
        engine.add_argument(thesis("t", "A", "A", 0.5)).unwrap();
        engine
            .add_argument(
                ArgumentDraft::new(ArgumentType::Objection, "B", "B")
                    .with_id("o")
                    .responding_to("t"),
            )
            .unwrap();
        engine
            .add_argument(
                ArgumentDraft::new(ArgumentType::Rebuttal, "C", "C")
                    .with_id("r")
                    .responding_to("o"),
            )
            .unwrap();

        assert!(engine.find_paths(&"r".into(), &"t".into()).is_empty());
        assert_eq!(engine.find_paths(&"o".into(), &"t".into()).len(), 1);
    }
}
