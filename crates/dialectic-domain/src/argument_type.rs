//! Argument type module - the five dialectical roles

use serde::{Deserialize, Serialize};

/// Role an argument plays in the dialectic
///
/// There is no structural difference between types beyond this tag:
/// - Thesis: an initial position
/// - Antithesis: a position opposing a thesis
/// - Synthesis: a reconciling argument over two or more others
/// - Objection: a challenge raised against a position
/// - Rebuttal: a response to an objection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    /// Initial position
    Thesis,

    /// Opposing position
    Antithesis,

    /// Reconciling position
    Synthesis,

    /// Challenge to a position
    Objection,

    /// Answer to an objection
    Rebuttal,
}

impl ArgumentType {
    /// All types, in canonical order
    pub const ALL: [ArgumentType; 5] = [
        ArgumentType::Thesis,
        ArgumentType::Antithesis,
        ArgumentType::Synthesis,
        ArgumentType::Objection,
        ArgumentType::Rebuttal,
    ];

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::Thesis => "thesis",
            ArgumentType::Antithesis => "antithesis",
            ArgumentType::Synthesis => "synthesis",
            ArgumentType::Objection => "objection",
            ArgumentType::Rebuttal => "rebuttal",
        }
    }

    /// Parse a type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "thesis" => Some(ArgumentType::Thesis),
            "antithesis" => Some(ArgumentType::Antithesis),
            "synthesis" => Some(ArgumentType::Synthesis),
            "objection" => Some(ArgumentType::Objection),
            "rebuttal" => Some(ArgumentType::Rebuttal),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArgumentType {
    type Err = crate::DialecticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::DialecticError::Validation(format!("Invalid argument type: {}", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parse_round_trip() {
        for ty in ArgumentType::ALL {
            assert_eq!(ArgumentType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(ArgumentType::parse("  Thesis "), Some(ArgumentType::Thesis));
    }

    #[test]
    fn test_invalid_type_is_validation_error() {
        let err = "conjecture".parse::<ArgumentType>().unwrap_err();
        assert!(matches!(err, crate::DialecticError::Validation(_)));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ArgumentType::Antithesis).unwrap();
        assert_eq!(json, "\"antithesis\"");
    }
}
