//! DLS execution.

use super::types::SearchState;
use crate::graph::{Graph, VertexId};

/// Result of a depth-limited search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DlsResult {
    /// Path from start to target inclusive; empty when the target was not
    /// found within the limit.
    pub path: Vec<VertexId>,

    /// Whether the target was reached.
    pub found: bool,

    /// Vertices expanded, counting re-expansion across backtracked
    /// branches.
    pub expanded: usize,
}

/// Depth-limited search runner.
pub struct DlsRunner;

impl DlsRunner {
    /// Searches for `target` from `start`, descending at most
    /// `depth_limit` edges.
    ///
    /// Finding the target at the current vertex always succeeds, even when
    /// the budget is exhausted or negative; in particular
    /// `start == target` yields the singleton path at any limit. A failed
    /// branch is fully rolled back before its siblings run, and a failed
    /// search leaves nothing behind: the result path is simply empty.
    /// Unknown vertices have no neighbors, so an absent `target` degrades
    /// to an empty result, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_unisearch::dls::DlsRunner;
    /// use u_unisearch::graph::Graph;
    ///
    /// let graph: Graph = [(1, 2), (2, 4), (4, 5)].into_iter().collect();
    ///
    /// assert_eq!(DlsRunner::run(&graph, 1, 5, 3).path, vec![1, 2, 4, 5]);
    /// assert!(DlsRunner::run(&graph, 1, 5, 2).path.is_empty());
    /// ```
    pub fn run(graph: &Graph, start: VertexId, target: VertexId, depth_limit: i64) -> DlsResult {
        let mut state = SearchState::new();
        let mut expanded = 0;
        let found = search(graph, start, target, depth_limit, &mut state, &mut expanded);
        let path = if found { state.into_path() } else { Vec::new() };
        DlsResult {
            path,
            found,
            expanded,
        }
    }
}

/// One step of the bounded descent. On failure the state is returned to
/// exactly its pre-call contents.
fn search(
    graph: &Graph,
    vertex: VertexId,
    target: VertexId,
    budget: i64,
    state: &mut SearchState,
    expanded: &mut usize,
) -> bool {
    *expanded += 1;

    // The target check precedes the budget check: finding the target at
    // the current vertex succeeds even with nothing left to spend.
    if vertex == target {
        state.complete(vertex);
        return true;
    }
    if budget <= 0 {
        return false;
    }

    state.mark(vertex);
    for &neighbor in graph.neighbors(vertex) {
        if !state.is_visited(neighbor) && search(graph, neighbor, target, budget - 1, state, expanded) {
            return true;
        }
    }
    state.rollback();
    false
}
