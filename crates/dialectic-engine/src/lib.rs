//! Dialectic Engine
//!
//! Orchestrates a debate: owns an [`ArgumentGraph`](dialectic_graph::ArgumentGraph),
//! logs every insertion, recommends what to argue next and proposes syntheses.
//!
//! # Overview
//!
//! The engine is responsible for:
//! - **History**: an append-only log with a per-type snapshot after each insertion
//! - **Sequencing**: which argument type the debate needs next
//! - **Candidate search**: connected thesis/antithesis pairs ranked by synthesis potential
//! - **Pair synthesis**: a simple deterministic merge of one thesis and one antithesis
//! - **Delegation**: evaluation and N-argument synthesis over the owned graph
//!
//! # Usage
//!
//! ```
//! use dialectic_domain::{ArgumentDraft, ArgumentType};
//! use dialectic_engine::DialecticalEngine;
//!
//! let mut engine = DialecticalEngine::default_config();
//! let thesis = engine.add_argument(
//!     ArgumentDraft::new(ArgumentType::Thesis, "Homework improves learning", "Assign homework")
//!         .with_confidence(0.7),
//! ).unwrap();
//! let antithesis = engine.add_argument(
//!     ArgumentDraft::new(ArgumentType::Antithesis, "Homework harms learning", "Abolish homework")
//!         .with_confidence(0.6)
//!         .contradicting(thesis.clone()),
//! ).unwrap();
//!
//! let best = &engine.find_synthesis_candidates()[0];
//! let draft = engine.generate_synthesis(&best.thesis, &best.antithesis).unwrap();
//! let synthesis = engine.add_synthesis(draft).unwrap();
//!
//! assert!(engine.find_synthesis_candidates().is_empty());
//! assert_eq!(engine.history().len(), 3);
//! # let _ = (antithesis, synthesis);
//! ```
//!
//! # Configuration
//!
//! All component settings load from one TOML file:
//!
//! ```toml
//! max_path_nodes = 16
//!
//! [evaluator]
//! logical_weight = 0.4
//! weak_logic_threshold = 0.4
//!
//! [synthesizer]
//! min_theme_len = 10
//! irreconcilable_cap = 0.3
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod history;

pub use config::EngineConfig;
pub use engine::{DialecticalEngine, SynthesisCandidate};
pub use error::ConfigError;
pub use history::{EngineHistory, HistoryAction, HistoryEntry};
