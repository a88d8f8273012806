//! Error types shared by every dialectic crate

use crate::ArgumentId;
use thiserror::Error;

/// Result type alias for dialectic operations.
pub type Result<T> = std::result::Result<T, DialecticError>;

/// Errors raised by argument construction, graph integrity checks and synthesis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialecticError {
    /// Missing required field or out-of-range value
    #[error("Validation error: {0}")]
    Validation(String),

    /// An argument with this id is already registered
    #[error("Duplicate argument id: {0}")]
    DuplicateId(ArgumentId),

    /// A relationship or lookup named an id that is not in the graph
    #[error("Unknown argument reference: {0}")]
    UnknownReference(ArgumentId),

    /// Operation called with unusable input (e.g. too few arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
