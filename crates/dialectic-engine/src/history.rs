//! Append-only log of engine insertions

use dialectic_domain::{ArgumentId, ArgumentType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What happened to the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// An argument was inserted
    Added,
}

/// One logged insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Always [`HistoryAction::Added`] today
    pub action: HistoryAction,
    /// Inserted argument
    pub argument_id: ArgumentId,
    /// Type of the inserted argument
    pub argument_type: ArgumentType,
    /// Ids of every type right after the insertion; all five types are present
    pub context: BTreeMap<ArgumentType, Vec<ArgumentId>>,
}

/// Insertion history of a [`DialecticalEngine`](crate::DialecticalEngine)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineHistory {
    entries: Vec<HistoryEntry>,
}

impl EngineHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Additions per argument type
    pub fn additions_by_type(&self) -> BTreeMap<ArgumentType, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.argument_type).or_insert(0) += 1;
        }
        counts
    }

    /// Human-readable report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Dialectic History Summary".to_string(),
            "=========================".to_string(),
            format!("Entries: {}", self.entries.len()),
        ];

        let counts = self.additions_by_type();
        if !counts.is_empty() {
            lines.push(String::new());
            lines.push("Additions by type:".to_string());
            for (argument_type, count) in &counts {
                lines.push(format!("  {}: {}", argument_type, count));
            }
        }

        lines.join("\n")
    }
}
