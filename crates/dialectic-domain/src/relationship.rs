//! Relationship module - directed edges between arguments

use crate::ArgumentId;
use serde::{Deserialize, Serialize};

/// Kind of edge between two arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    /// Source argument supports the target
    #[serde(rename = "support")]
    Supports,

    /// Source argument contradicts the target
    #[serde(rename = "contradict")]
    Contradicts,

    /// Source argument responds to the target
    #[serde(rename = "respond")]
    RespondsTo,
}

impl RelationshipType {
    /// Interchange name of the relationship kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Supports => "support",
            RelationshipType::Contradicts => "contradict",
            RelationshipType::RespondsTo => "respond",
        }
    }
}

/// Outgoing relationships of one argument
///
/// One fixed-shape record per argument id. Lists keep insertion order and
/// never hold the same target twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationRecord {
    /// Targets this argument supports
    pub supports: Vec<ArgumentId>,

    /// Targets this argument contradicts
    pub contradicts: Vec<ArgumentId>,

    /// Target this argument responds to
    pub responds_to: Option<ArgumentId>,
}

impl RelationRecord {
    /// Record an edge of the given kind; returns false if it was already present
    pub fn insert(&mut self, kind: RelationshipType, target: ArgumentId) -> bool {
        match kind {
            RelationshipType::Supports => push_unique(&mut self.supports, target),
            RelationshipType::Contradicts => push_unique(&mut self.contradicts, target),
            RelationshipType::RespondsTo => {
                if self.responds_to.as_ref() == Some(&target) {
                    return false;
                }
                self.responds_to = Some(target);
                true
            }
        }
    }

    /// Whether this record points at `target` with the given kind
    pub fn references(&self, kind: RelationshipType, target: &ArgumentId) -> bool {
        match kind {
            RelationshipType::Supports => self.supports.contains(target),
            RelationshipType::Contradicts => self.contradicts.contains(target),
            RelationshipType::RespondsTo => self.responds_to.as_ref() == Some(target),
        }
    }

    /// All outgoing edges, supports first, then contradicts, then responds-to
    pub fn edges(&self) -> impl Iterator<Item = (RelationshipType, &ArgumentId)> {
        self.supports
            .iter()
            .map(|id| (RelationshipType::Supports, id))
            .chain(self.contradicts.iter().map(|id| (RelationshipType::Contradicts, id)))
            .chain(self.responds_to.iter().map(|id| (RelationshipType::RespondsTo, id)))
    }
}

fn push_unique(list: &mut Vec<ArgumentId>, target: ArgumentId) -> bool {
    if list.contains(&target) {
        return false;
    }
    list.push(target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut record = RelationRecord::default();
        assert!(record.insert(RelationshipType::Supports, ArgumentId::new("a")));
        assert!(!record.insert(RelationshipType::Supports, ArgumentId::new("a")));
        assert_eq!(record.supports.len(), 1);
    }

    #[test]
    fn test_responds_to_replaced() {
        let mut record = RelationRecord::default();
        record.insert(RelationshipType::RespondsTo, ArgumentId::new("a"));
        record.insert(RelationshipType::RespondsTo, ArgumentId::new("b"));
        assert_eq!(record.responds_to, Some(ArgumentId::new("b")));
    }

    #[test]
    fn test_edges_order() {
        let mut record = RelationRecord::default();
        record.insert(RelationshipType::RespondsTo, ArgumentId::new("r"));
        record.insert(RelationshipType::Contradicts, ArgumentId::new("c"));
        record.insert(RelationshipType::Supports, ArgumentId::new("s"));
        let kinds: Vec<_> = record.edges().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                RelationshipType::Supports,
                RelationshipType::Contradicts,
                RelationshipType::RespondsTo
            ]
        );
    }

    #[test]
    fn test_interchange_names() {
        assert_eq!(serde_json::to_string(&RelationshipType::Supports).unwrap(), "\"support\"");
        assert_eq!(RelationshipType::RespondsTo.as_str(), "respond");
    }
}
