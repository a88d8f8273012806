//! Dialectic Argument Graph
//!
//! In-memory store for arguments and the directed edges between them.
//!
//! # Architecture
//!
//! - Arguments live in an insertion-ordered arena indexed by id
//! - Each id owns one fixed-shape [`RelationRecord`] (supports, contradicts, responds-to)
//! - The graph only grows: no argument or edge is ever removed
//!
//! # Integrity
//!
//! - Ids are unique ([`DialecticError::DuplicateId`])
//! - Edges may only point at arguments already present
//!   ([`DialecticError::UnknownReference`]); there are no forward references
//! - A failed insert leaves the graph unchanged
//!
//! # Thread Safety
//!
//! Mutation assumes a single writer. Wrap the graph in a lock if several
//! threads insert concurrently.
//!
//! # Examples
//!
//! ```
//! use dialectic_domain::{ArgumentDraft, ArgumentType};
//! use dialectic_graph::ArgumentGraph;
//!
//! let mut graph = ArgumentGraph::new();
//! graph.add_argument(
//!     ArgumentDraft::new(ArgumentType::Thesis, "Tax carbon", "Carbon should be taxed")
//!         .with_id("t1"),
//! ).unwrap();
//! graph.add_argument(
//!     ArgumentDraft::new(ArgumentType::Objection, "Taxes hurt the poor", "Do not tax carbon")
//!         .with_id("o1")
//!         .contradicting("t1"),
//! ).unwrap();
//!
//! assert_eq!(graph.get_contradictors(&"t1".into()).len(), 1);
//! ```

#![warn(missing_docs)]

mod interchange;
mod paths;

use dialectic_domain::{
    Argument, ArgumentDraft, ArgumentId, ArgumentType, DialecticError, RelationRecord,
    RelationshipEdge, RelationshipType, Result,
};
use std::collections::HashMap;

/// Arguments plus their relationship table
#[derive(Debug, Clone, Default)]
pub struct ArgumentGraph {
    arguments: Vec<Argument>,
    index: HashMap<ArgumentId, usize>,
    relationships: HashMap<ArgumentId, RelationRecord>,
}

impl ArgumentGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft, register it, and create its declared edges
    ///
    /// # Errors
    /// - [`DialecticError::Validation`] if the draft is invalid
    /// - [`DialecticError::DuplicateId`] if the id is already present
    /// - [`DialecticError::UnknownReference`] if a declared supports,
    ///   contradicts or responds-to id is not yet in the graph
    pub fn add_argument(&mut self, draft: ArgumentDraft) -> Result<&Argument> {
        let argument = Argument::from_draft(draft)?;
        self.insert(argument)
    }

    /// Register an already-built argument (same checks as [`Self::add_argument`])
    pub fn insert(&mut self, argument: Argument) -> Result<&Argument> {
        if self.index.contains_key(argument.id()) {
            return Err(DialecticError::DuplicateId(argument.id().clone()));
        }

        // Check every reference up front so a failure applies nothing
        let declared: Vec<(RelationshipType, ArgumentId)> = argument
            .supports()
            .iter()
            .map(|id| (RelationshipType::Supports, id.clone()))
            .chain(
                argument
                    .contradicts()
                    .iter()
                    .map(|id| (RelationshipType::Contradicts, id.clone())),
            )
            .chain(
                argument
                    .responds_to()
                    .map(|id| (RelationshipType::RespondsTo, id.clone())),
            )
            .collect();
        for (_, target) in &declared {
            self.require(target)?;
        }

        let mut record = RelationRecord::default();
        for (kind, target) in declared {
            record.insert(kind, target);
        }

        let id = argument.id().clone();
        tracing::debug!(
            argument_id = %id,
            argument_type = %argument.argument_type(),
            edges = record.edges().count(),
            "argument added"
        );

        let position = self.arguments.len();
        self.index.insert(id.clone(), position);
        self.relationships.insert(id, record);
        self.arguments.push(argument);
        Ok(&self.arguments[position])
    }

    /// Look up an argument
    pub fn get_argument(&self, id: &ArgumentId) -> Option<&Argument> {
        self.index.get(id).map(|&i| &self.arguments[i])
    }

    /// Look up an argument for confidence updates or strength/weakness appends
    pub fn get_argument_mut(&mut self, id: &ArgumentId) -> Option<&mut Argument> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.arguments[i]),
            None => None,
        }
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &ArgumentId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether the graph holds no arguments
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// All arguments in insertion order
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// All ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &ArgumentId> {
        self.arguments.iter().map(Argument::id)
    }

    /// Arguments of one type, in insertion order
    pub fn get_arguments_by_type(&self, argument_type: ArgumentType) -> Vec<&Argument> {
        self.arguments
            .iter()
            .filter(|a| a.argument_type() == argument_type)
            .collect()
    }

    /// Outgoing relationship record of `id`
    pub fn relationships_of(&self, id: &ArgumentId) -> Option<&RelationRecord> {
        self.relationships.get(id)
    }

    /// Every edge, grouped by source in insertion order
    pub fn relationships(&self) -> Vec<RelationshipEdge> {
        self.arguments
            .iter()
            .filter_map(|a| self.relationships.get(a.id()).map(|r| (a.id(), r)))
            .flat_map(|(from, record)| {
                record.edges().map(move |(kind, to)| RelationshipEdge {
                    from: from.clone(),
                    to: to.clone(),
                    relationship_type: kind,
                })
            })
            .collect()
    }

    /// Arguments whose record supports `id`
    pub fn get_supporters(&self, id: &ArgumentId) -> Vec<&Argument> {
        self.referencing(id, RelationshipType::Supports)
    }

    /// Arguments whose record contradicts `id`
    pub fn get_contradictors(&self, id: &ArgumentId) -> Vec<&Argument> {
        self.referencing(id, RelationshipType::Contradicts)
    }

    /// Arguments whose record responds to `id`
    pub fn get_responders(&self, id: &ArgumentId) -> Vec<&Argument> {
        self.referencing(id, RelationshipType::RespondsTo)
    }

    /// Whether `from` has an edge of `kind` to `to`
    pub fn has_relationship(
        &self,
        from: &ArgumentId,
        to: &ArgumentId,
        kind: RelationshipType,
    ) -> bool {
        self.relationships
            .get(from)
            .is_some_and(|record| record.references(kind, to))
    }

    /// Add an edge between two registered arguments
    ///
    /// Adding an edge that already exists is a no-op. A responds-to edge
    /// replaces the previous responds-to target of `from`.
    ///
    /// # Errors
    /// [`DialecticError::UnknownReference`] unless both ids are registered.
    pub fn add_relationship(
        &mut self,
        from: &ArgumentId,
        to: &ArgumentId,
        kind: RelationshipType,
    ) -> Result<()> {
        self.require(from)?;
        self.require(to)?;
        let record = self.relationships.entry(from.clone()).or_default();
        if record.insert(kind, to.clone()) {
            tracing::debug!(from = %from, to = %to, kind = kind.as_str(), "relationship added");
        }
        Ok(())
    }

    /// `from` supports `to`
    pub fn add_supports_relationship(&mut self, from: &ArgumentId, to: &ArgumentId) -> Result<()> {
        self.add_relationship(from, to, RelationshipType::Supports)
    }

    /// `from` contradicts `to`
    pub fn add_contradicts_relationship(
        &mut self,
        from: &ArgumentId,
        to: &ArgumentId,
    ) -> Result<()> {
        self.add_relationship(from, to, RelationshipType::Contradicts)
    }

    /// `from` responds to `to`
    pub fn add_responds_to_relationship(
        &mut self,
        from: &ArgumentId,
        to: &ArgumentId,
    ) -> Result<()> {
        self.add_relationship(from, to, RelationshipType::RespondsTo)
    }

    fn referencing(&self, target: &ArgumentId, kind: RelationshipType) -> Vec<&Argument> {
        self.arguments
            .iter()
            .filter(|a| {
                self.relationships
                    .get(a.id())
                    .is_some_and(|record| record.references(kind, target))
            })
            .collect()
    }

    fn require(&self, id: &ArgumentId) -> Result<()> {
        if self.index.contains_key(id) {
            Ok(())
        } else {
            Err(DialecticError::UnknownReference(id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, ty: ArgumentType) -> ArgumentDraft {
        ArgumentDraft::new(ty, format!("claim {}", id), format!("conclusion {}", id)).with_id(id)
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        let err = graph.add_argument(draft("a", ArgumentType::Antithesis)).unwrap_err();
        assert_eq!(err, DialecticError::DuplicateId("a".into()));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_forward_reference_rejected_without_partial_insert() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        let err = graph
            .add_argument(draft("b", ArgumentType::Objection).contradicting("a").supporting("zzz"))
            .unwrap_err();
        assert_eq!(err, DialecticError::UnknownReference("zzz".into()));
        assert!(!graph.contains(&"b".into()));
        assert!(graph.get_contradictors(&"a".into()).is_empty());
    }

    #[test]
    fn test_invalid_draft_rejected() {
        let mut graph = ArgumentGraph::new();
        let err = graph
            .add_argument(draft("a", ArgumentType::Thesis).with_confidence(-0.5))
            .unwrap_err();
        assert!(matches!(err, DialecticError::Validation(_)));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_declared_edges_registered() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("t", ArgumentType::Thesis)).unwrap();
        graph
            .add_argument(
                draft("a", ArgumentType::Antithesis)
                    .responding_to("t")
                    .contradicting("t"),
            )
            .unwrap();
        graph.add_argument(draft("s", ArgumentType::Objection).supporting("a")).unwrap();

        let t = ArgumentId::new("t");
        let a = ArgumentId::new("a");
        assert_eq!(graph.get_responders(&t)[0].id(), &a);
        assert_eq!(graph.get_contradictors(&t)[0].id(), &a);
        assert_eq!(graph.get_supporters(&a)[0].id().as_str(), "s");
        assert!(graph.get_supporters(&t).is_empty());
    }

    #[test]
    fn test_relationship_add_requires_both_ids() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        let a = ArgumentId::new("a");
        let b = ArgumentId::new("b");
        assert_eq!(
            graph.add_supports_relationship(&a, &b),
            Err(DialecticError::UnknownReference(b.clone()))
        );
        assert_eq!(
            graph.add_contradicts_relationship(&b, &a),
            Err(DialecticError::UnknownReference(b.clone()))
        );
        assert!(graph.add_responds_to_relationship(&a, &b).is_err());

        graph.add_argument(draft("b", ArgumentType::Antithesis)).unwrap();
        graph.add_contradicts_relationship(&b, &a).unwrap();
        graph.add_contradicts_relationship(&b, &a).unwrap();
        assert_eq!(graph.get_contradictors(&a).len(), 1);
        assert!(graph.has_relationship(&b, &a, RelationshipType::Contradicts));
        assert!(!graph.has_relationship(&a, &b, RelationshipType::Contradicts));
    }

    #[test]
    fn test_later_edges_may_point_forward() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        graph.add_argument(draft("b", ArgumentType::Thesis)).unwrap();
        graph.add_supports_relationship(&"a".into(), &"b".into()).unwrap();
        assert_eq!(graph.get_supporters(&"b".into())[0].id().as_str(), "a");
    }

    #[test]
    fn test_arguments_by_type_in_insertion_order() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("t1", ArgumentType::Thesis)).unwrap();
        graph.add_argument(draft("x", ArgumentType::Antithesis)).unwrap();
        graph.add_argument(draft("t2", ArgumentType::Thesis)).unwrap();

        let theses: Vec<_> = graph
            .get_arguments_by_type(ArgumentType::Thesis)
            .into_iter()
            .map(|a| a.id().as_str())
            .collect();
        assert_eq!(theses, vec!["t1", "t2"]);
        assert!(graph.get_arguments_by_type(ArgumentType::Rebuttal).is_empty());
    }

    #[test]
    fn test_get_argument_mut_updates_confidence() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        let id = ArgumentId::new("a");
        graph.get_argument_mut(&id).unwrap().update_confidence(0.9).unwrap();
        assert_eq!(graph.get_argument(&id).unwrap().confidence(), 0.9);
        assert!(graph.get_argument_mut(&"missing".into()).is_none());
    }

    #[test]
    fn test_relationships_flattened_in_order() {
        let mut graph = ArgumentGraph::new();
        graph.add_argument(draft("a", ArgumentType::Thesis)).unwrap();
        graph
            .add_argument(
                draft("b", ArgumentType::Antithesis)
                    .contradicting("a")
                    .responding_to("a"),
            )
            .unwrap();
        let edges = graph.relationships();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].relationship_type, RelationshipType::Contradicts);
        assert_eq!(edges[1].relationship_type, RelationshipType::RespondsTo);
        assert_eq!(edges[0].from.as_str(), "b");
    }
}
