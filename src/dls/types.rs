//! Reversible search state.

use crate::graph::VertexId;
use std::collections::HashSet;

/// Partially-built path and visited set with strictly reversible mutation.
///
/// [`mark`](Self::mark) and [`rollback`](Self::rollback) pair up
/// last-in-first-out: a branch that rolls back everything it marked leaves
/// the state exactly as it found it. [`complete`](Self::complete) appends
/// the found target; the search ends there, so that entry is never undone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    path: Vec<VertexId>,
    visited: HashSet<VertexId>,
}

impl SearchState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `vertex` is currently marked on the explored path.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }

    /// Appends `vertex` to the path and marks it visited.
    pub fn mark(&mut self, vertex: VertexId) {
        self.visited.insert(vertex);
        self.path.push(vertex);
    }

    /// Undoes the most recent [`mark`](Self::mark). No-op on an empty
    /// state.
    pub fn rollback(&mut self) {
        if let Some(vertex) = self.path.pop() {
            self.visited.remove(&vertex);
        }
    }

    /// Appends the found target to the path without a visited mark.
    pub fn complete(&mut self, target: VertexId) {
        self.path.push(target);
    }

    /// Path from the start vertex so far, in order.
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    /// Number of vertices currently on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Consumes the state, yielding the accumulated path.
    pub fn into_path(self) -> Vec<VertexId> {
        self.path
    }
}
