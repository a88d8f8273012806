//! Dialectic Domain Layer
//!
//! This crate contains the core domain model for dialectical reasoning.
//! It defines the fundamental concepts, value objects, and trait interfaces
//! that the graph, evaluator, synthesizer, and engine crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Argument**: a typed proposition with claim, premises, conclusion and confidence
//! - **Argument Type**: thesis, antithesis, synthesis, objection, rebuttal
//! - **Relationships**: supports / contradicts / responds-to edges between arguments
//! - **Interchange**: the document shape external import/export collaborators use
//!
//! ## Architecture
//!
//! - Pure domain logic only, no I/O
//! - Storage and scoring live in other crates
//! - Trait definitions for swappable text analysis

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod argument_type;
pub mod error;
pub mod interchange;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use argument::{Argument, ArgumentDraft, ArgumentId};
pub use argument_type::ArgumentType;
pub use error::{DialecticError, Result};
pub use interchange::{ArgumentRecord, GraphDocument, RelationshipEdge};
pub use relationship::{RelationRecord, RelationshipType};
pub use traits::{Fallacy, TextAnalyzer};

/// Current timestamp in milliseconds since the Unix epoch
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
