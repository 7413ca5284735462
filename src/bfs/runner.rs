//! BFS execution loop.

use crate::graph::{Graph, VertexId};
use crate::trace::{TraceEvent, TraceSink};
use std::collections::{HashSet, VecDeque};

/// Result of a breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsResult {
    /// Vertices in visitation (level) order.
    pub order: Vec<VertexId>,

    /// One [`TraceEvent::Visit`] per vertex, carrying its BFS level.
    /// Empty when the events were streamed to a sink instead.
    pub events: Vec<TraceEvent>,

    /// Deepest level reached.
    pub max_level: u32,
}

impl BfsResult {
    /// Level at which `vertex` was produced, if it was reached.
    ///
    /// Equals the shortest-hop distance from the start vertex. Only
    /// available when events were collected (the default
    /// [`BfsRunner::run`]), not streamed.
    pub fn level_of(&self, vertex: VertexId) -> Option<u32> {
        self.events.iter().find_map(|event| match event {
            TraceEvent::Visit { vertex: v, depth } if *v == vertex => Some(*depth),
            _ => None,
        })
    }
}

/// Breadth-first traversal runner.
pub struct BfsRunner;

impl BfsRunner {
    /// Traverses the connected component of `start` in level order.
    ///
    /// Each neighbor is marked visited at enqueue time, so a vertex
    /// reachable through several parents is queued only once, by whichever
    /// parent dequeues first. An unknown `start` yields the singleton
    /// `[start]` at level 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_unisearch::bfs::BfsRunner;
    /// use u_unisearch::graph::Graph;
    ///
    /// let graph: Graph = [(1, 2), (2, 3), (3, 4)].into_iter().collect();
    /// let result = BfsRunner::run(&graph, 1);
    ///
    /// assert_eq!(result.order, vec![1, 2, 3, 4]);
    /// assert_eq!(result.level_of(4), Some(3));
    /// ```
    pub fn run(graph: &Graph, start: VertexId) -> BfsResult {
        let mut events = Vec::new();
        let mut result = Self::run_with_sink(graph, start, &mut |event| events.push(event));
        result.events = events;
        result
    }

    /// Like [`run`](Self::run), but streams `Visit` events into `sink`;
    /// the returned `events` field is left empty.
    pub fn run_with_sink<S: TraceSink>(graph: &Graph, start: VertexId, sink: &mut S) -> BfsResult {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut max_level = 0;

        visited.insert(start);
        queue.push_back((start, 0u32));

        while let Some((vertex, level)) = queue.pop_front() {
            order.push(vertex);
            max_level = max_level.max(level);
            sink.record(TraceEvent::Visit { vertex, depth: level });
            for &neighbor in graph.neighbors(vertex) {
                // Mark at enqueue time, not dequeue time: a vertex seen
                // through a second parent must not enter the queue again.
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, level + 1));
                }
            }
        }

        BfsResult {
            order,
            events: Vec::new(),
            max_level,
        }
    }
}
