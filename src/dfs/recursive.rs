//! Pre-order recursive DFS.

use crate::graph::{Graph, VertexId};
use crate::trace::{TraceEvent, TraceSink};
use std::collections::HashSet;

/// Result of a recursive depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsResult {
    /// Vertices in visitation (pre-)order.
    pub order: Vec<VertexId>,

    /// One [`TraceEvent::Visit`] per vertex, carrying its recursion
    /// depth. Empty when the events were streamed to a sink instead.
    pub events: Vec<TraceEvent>,

    /// Deepest recursion level reached.
    pub max_depth: u32,
}

/// Recursive depth-first traversal runner.
pub struct RecursiveDfs;

impl RecursiveDfs {
    /// Traverses the connected component of `start` in pre-order.
    ///
    /// Neighbors are explored in list (insertion) order; each vertex is
    /// produced exactly once. An unknown `start` has no neighbors and
    /// yields the singleton `[start]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_unisearch::dfs::RecursiveDfs;
    /// use u_unisearch::graph::Graph;
    ///
    /// let graph: Graph = [(1, 2), (1, 6), (2, 3)].into_iter().collect();
    /// let result = RecursiveDfs::run(&graph, 1);
    ///
    /// assert_eq!(result.order, vec![1, 2, 3, 6]);
    /// ```
    pub fn run(graph: &Graph, start: VertexId) -> DfsResult {
        let mut events = Vec::new();
        let mut result = Self::run_with_sink(graph, start, &mut |event| events.push(event));
        result.events = events;
        result
    }

    /// Like [`run`](Self::run), but streams `Visit` events into `sink` as
    /// they happen; the returned `events` field is left empty.
    pub fn run_with_sink<S: TraceSink>(graph: &Graph, start: VertexId, sink: &mut S) -> DfsResult {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut max_depth = 0;
        visit(graph, start, 0, &mut visited, &mut order, &mut max_depth, sink);
        DfsResult {
            order,
            events: Vec::new(),
            max_depth,
        }
    }
}

fn visit<S: TraceSink>(
    graph: &Graph,
    vertex: VertexId,
    depth: u32,
    visited: &mut HashSet<VertexId>,
    order: &mut Vec<VertexId>,
    max_depth: &mut u32,
    sink: &mut S,
) {
    visited.insert(vertex);
    order.push(vertex);
    *max_depth = (*max_depth).max(depth);
    sink.record(TraceEvent::Visit { vertex, depth });
    for &neighbor in graph.neighbors(vertex) {
        if !visited.contains(&neighbor) {
            visit(graph, neighbor, depth + 1, visited, order, max_depth, sink);
        }
    }
}
