//! Dialectic Evaluator
//!
//! Heuristic quality scoring for arguments.
//!
//! The Evaluator provides:
//! - Logical score (conclusion/premise keyword overlap, coherence, fallacy penalties)
//! - Evidence score (statistics, citations and hedges in premises)
//! - Support score (direct supporters and contradictors in the graph)
//! - Human-readable strengths and weaknesses
//!
//! Scoring is pure and deterministic: it reads the argument and the graph and
//! never mutates either. Attaching the findings to the argument is left to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use dialectic_domain::{ArgumentDraft, ArgumentType};
//! use dialectic_evaluator::Evaluator;
//! use dialectic_graph::ArgumentGraph;
//!
//! let mut graph = ArgumentGraph::new();
//! let draft = ArgumentDraft::new(
//!     ArgumentType::Thesis,
//!     "Cycling lanes reduce traffic",
//!     "Build cycling lanes",
//! );
//! let argument = graph.add_argument(draft).unwrap().clone();
//!
//! let evaluator = Evaluator::default_config();
//! let evaluation = evaluator.evaluate_argument(&argument, &graph);
//! assert!(evaluation.weaknesses.iter().any(|w| w == "insufficient premises"));
//! ```

#![warn(missing_docs)]

mod config;
mod evaluator;

pub use config::EvaluatorConfig;
pub use evaluator::{Evaluation, Evaluator};
