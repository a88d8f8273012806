//! Simple-path enumeration

use crate::ArgumentGraph;
use dialectic_domain::ArgumentId;
use std::collections::HashSet;

impl ArgumentGraph {
    /// Every simple path from `start` to `end`
    ///
    /// Follows outgoing supports, contradicts and responds-to edges alike.
    /// A node never repeats within one path, though it may appear in several
    /// paths. The search is exponential on dense graphs; use
    /// [`Self::find_paths_bounded`] when the graph is not known to be small.
    ///
    /// Returns no paths if either id is unknown. A path from a node to itself
    /// is the single-node path.
    pub fn find_paths(&self, start: &ArgumentId, end: &ArgumentId) -> Vec<Vec<ArgumentId>> {
        self.find_paths_bounded(start, end, usize::MAX)
    }

    /// Like [`Self::find_paths`], but only paths with at most `max_nodes` nodes
    pub fn find_paths_bounded(
        &self,
        start: &ArgumentId,
        end: &ArgumentId,
        max_nodes: usize,
    ) -> Vec<Vec<ArgumentId>> {
        let mut paths = Vec::new();
        if !self.contains(start) || !self.contains(end) || max_nodes == 0 {
            return paths;
        }

        let mut path = vec![start.clone()];
        let mut visited: HashSet<&ArgumentId> = HashSet::from([start]);
        self.walk(start, end, max_nodes, &mut path, &mut visited, &mut paths);

        tracing::trace!(start = %start, end = %end, found = paths.len(), "paths enumerated");
        paths
    }

    fn walk<'a>(
        &'a self,
        current: &'a ArgumentId,
        end: &ArgumentId,
        max_nodes: usize,
        path: &mut Vec<ArgumentId>,
        visited: &mut HashSet<&'a ArgumentId>,
        paths: &mut Vec<Vec<ArgumentId>>,
    ) {
        if current == end {
            paths.push(path.clone());
            return;
        }
        if path.len() >= max_nodes {
            return;
        }

        for next in self.neighbours(current) {
            if visited.contains(next) {
                continue;
            }
            visited.insert(next);
            path.push(next.clone());
            self.walk(next, end, max_nodes, path, visited, paths);
            path.pop();
            visited.remove(next);
        }
    }

    /// Distinct outgoing targets of `id`, in edge order
    fn neighbours(&self, id: &ArgumentId) -> Vec<&ArgumentId> {
        let mut out: Vec<&ArgumentId> = Vec::new();
        if let Some(record) = self.relationships_of(id) {
            for (_, target) in record.edges() {
                if !out.contains(&target) {
                    out.push(target);
                }
            }
        }
        out
    }
}
