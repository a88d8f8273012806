//! Dialectic Synthesizer
//!
//! Merges two or more arguments into a draft synthesis argument.
//!
//! # Pipeline
//!
//! 1. **Themes**: letter runs shared by more than one input
//! 2. **Pairwise analysis**: complementary premises and conflicting claims,
//!    split into reconcilable (hedged, shared value) and irreconcilable
//! 3. **Draft**: templated claim, premises and conclusion with a capped
//!    confidence estimate; `supports` lists every input
//! 4. **Quality**: coverage, coherence and advancement of the draft
//!
//! The synthesizer never touches the graph. The returned draft is unvalidated;
//! callers insert it when they want it kept.
//!
//! # Examples
//!
//! ```
//! use dialectic_domain::{ArgumentDraft, ArgumentType};
//! use dialectic_graph::ArgumentGraph;
//! use dialectic_synthesizer::Synthesizer;
//!
//! let mut graph = ArgumentGraph::new();
//! let thesis = ArgumentDraft::new(ArgumentType::Thesis, "Raise taxes", "Fund schools");
//! let a = graph.add_argument(thesis).unwrap().id().clone();
//! let antithesis = ArgumentDraft::new(ArgumentType::Antithesis, "Cut taxes", "Grow business");
//! let b = graph.add_argument(antithesis).unwrap().id().clone();
//!
//! let synthesizer = Synthesizer::default_config();
//! let result = synthesizer.synthesize_ids(&[a.clone(), b.clone()], &graph).unwrap();
//! assert_eq!(result.draft.supports, vec![a, b]);
//! ```

#![warn(missing_docs)]

mod analysis;
mod config;
mod quality;
mod synthesizer;

pub use analysis::{ClaimConflict, ComplementaryPair, SynthesisAnalysis};
pub use config::SynthesizerConfig;
pub use quality::SynthesisQuality;
pub use synthesizer::{SynthesisResult, Synthesizer};
