//! Interchange document shape
//!
//! `{ arguments: [ArgumentRecord...], relationships: [{from, to, type}...] }`
//! is what external import/export collaborators produce and consume. This crate
//! only defines the shape; it never reads or writes files.

use crate::argument::{dedup, validate_confidence};
use crate::{Argument, ArgumentId, ArgumentType, DialecticError, RelationshipType};
use serde::{Deserialize, Serialize};

/// A whole graph in interchange form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Arguments in insertion order
    pub arguments: Vec<ArgumentRecord>,

    /// Edges in insertion order of their source argument
    pub relationships: Vec<RelationshipEdge>,
}

/// One edge in interchange form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Source argument
    pub from: ArgumentId,

    /// Target argument
    pub to: ArgumentId,

    /// Edge kind
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
}

/// Every field of an [`Argument`] in interchange form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentRecord {
    /// Unique identifier
    pub id: ArgumentId,
    /// Central proposition
    pub claim: String,
    /// Supporting statements
    #[serde(default)]
    pub premises: Vec<String>,
    /// Conclusion
    pub conclusion: String,
    /// Dialectical role
    #[serde(rename = "type")]
    pub argument_type: ArgumentType,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Responded-to argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responds_to: Option<ArgumentId>,
    /// Declared supports
    #[serde(default)]
    pub supports: Vec<ArgumentId>,
    /// Declared contradictions
    #[serde(default)]
    pub contradicts: Vec<ArgumentId>,
    /// Attached strengths
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Attached weaknesses
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Creation timestamp (ms)
    pub created_at: u64,
    /// Last mutation timestamp (ms)
    pub last_modified: u64,
}

impl From<&Argument> for ArgumentRecord {
    fn from(argument: &Argument) -> Self {
        Self {
            id: argument.id.clone(),
            claim: argument.claim.clone(),
            premises: argument.premises.clone(),
            conclusion: argument.conclusion.clone(),
            argument_type: argument.argument_type,
            confidence: argument.confidence,
            responds_to: argument.responds_to.clone(),
            supports: argument.supports.clone(),
            contradicts: argument.contradicts.clone(),
            strengths: argument.strengths.clone(),
            weaknesses: argument.weaknesses.clone(),
            created_at: argument.created_at,
            last_modified: argument.last_modified,
        }
    }
}

impl TryFrom<ArgumentRecord> for Argument {
    type Error = DialecticError;

    /// Rebuild an argument, keeping its id, timestamps and attached findings
    fn try_from(record: ArgumentRecord) -> Result<Self, Self::Error> {
        if record.id.as_str().trim().is_empty() {
            return Err(DialecticError::Validation("id must not be empty".to_string()));
        }
        if record.claim.trim().is_empty() {
            return Err(DialecticError::Validation("claim must not be empty".to_string()));
        }
        if record.conclusion.trim().is_empty() {
            return Err(DialecticError::Validation(
                "conclusion must not be empty".to_string(),
            ));
        }
        validate_confidence(record.confidence)?;

        Ok(Argument {
            id: record.id,
            claim: record.claim,
            premises: record.premises,
            conclusion: record.conclusion,
            argument_type: record.argument_type,
            confidence: record.confidence,
            responds_to: record.responds_to,
            supports: dedup(record.supports),
            contradicts: dedup(record.contradicts),
            strengths: record.strengths,
            weaknesses: record.weaknesses,
            created_at: record.created_at,
            last_modified: record.last_modified.max(record.created_at),
        })
    }
}
