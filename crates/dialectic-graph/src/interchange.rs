//! Export to and rebuild from the interchange document

use crate::ArgumentGraph;
use dialectic_domain::{Argument, ArgumentRecord, GraphDocument, Result};

impl ArgumentGraph {
    /// Snapshot the graph as an interchange document
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            arguments: self.arguments().iter().map(ArgumentRecord::from).collect(),
            relationships: self.relationships(),
        }
    }

    /// Rebuild a graph by replaying a document in order
    ///
    /// Arguments are inserted first (their declared edges must point
    /// backwards, as with [`ArgumentGraph::add_argument`]), then every listed
    /// relationship is added. Ids, timestamps, strengths and weaknesses are
    /// preserved.
    ///
    /// # Errors
    /// Any validation, duplicate-id or unknown-reference error from the replay.
    pub fn from_document(document: GraphDocument) -> Result<Self> {
        let mut graph = ArgumentGraph::new();
        for record in document.arguments {
            graph.insert(Argument::try_from(record)?)?;
        }
        for edge in &document.relationships {
            graph.add_relationship(&edge.from, &edge.to, edge.relationship_type)?;
        }
        tracing::debug!(
            arguments = graph.len(),
            relationships = document.relationships.len(),
            "graph rebuilt from document"
        );
        Ok(graph)
    }
}
