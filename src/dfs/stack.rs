//! Explicit-stack DFS.

use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Result of an explicit-stack depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterativeDfsResult {
    /// Vertices in visitation order, identical to the recursive variant's.
    pub order: Vec<VertexId>,

    /// Total stack pushes. A vertex is pushed once per discovery, so this
    /// exceeds `order.len()` whenever branches share neighbors.
    pub pushes: usize,

    /// High-water mark of the stack.
    pub max_stack_len: usize,
}

/// Explicit-stack depth-first traversal runner.
pub struct IterativeDfs;

impl IterativeDfs {
    /// Traverses the connected component of `start`.
    ///
    /// Neighbors are pushed in reverse list order so that popping explores
    /// them left to right, reproducing
    /// [`RecursiveDfs`](crate::dfs::RecursiveDfs) visitation order
    /// exactly. A vertex can sit on the stack several times (once per
    /// discovering parent); the visited check on pop discards the
    /// duplicates, so each vertex is still produced exactly once.
    pub fn run(graph: &Graph, start: VertexId) -> IterativeDfsResult {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut pushes = 1;
        let mut max_stack_len = 1;

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex);
            for &neighbor in graph.neighbors(vertex).iter().rev() {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                    pushes += 1;
                }
            }
            max_stack_len = max_stack_len.max(stack.len());
        }

        IterativeDfsResult {
            order,
            pushes,
            max_stack_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfs::RecursiveDfs;

    fn sample_graph() -> Graph {
        [(1, 2), (1, 6), (2, 3), (2, 4), (6, 7), (6, 8), (4, 5), (7, 5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_matches_recursive_order_on_sample_graph() {
        let graph = sample_graph();

        assert_eq!(
            IterativeDfs::run(&graph, 1).order,
            RecursiveDfs::run(&graph, 1).order
        );
        assert_eq!(IterativeDfs::run(&graph, 1).order, vec![1, 2, 3, 4, 5, 7, 6, 8]);
    }

    #[test]
    fn test_matches_recursive_order_from_every_start() {
        let graph = sample_graph();
        for start in 1..=8 {
            assert_eq!(
                IterativeDfs::run(&graph, start).order,
                RecursiveDfs::run(&graph, start).order,
                "orders diverge for start {start}"
            );
        }
    }

    #[test]
    fn test_shared_neighbor_is_pushed_twice_but_emitted_once() {
        // 6 is discovered from 1 and again from 7 before its first copy
        // is popped, so it sits on the stack twice.
        let result = IterativeDfs::run(&sample_graph(), 1);

        assert_eq!(result.pushes, result.order.len() + 1);
        assert_eq!(
            result.order.iter().filter(|&&v| v == 6).count(),
            1,
            "duplicate pushes must not duplicate emission"
        );
    }

    #[test]
    fn test_unknown_start_yields_singleton() {
        let result = IterativeDfs::run(&Graph::new(), 7);

        assert_eq!(result.order, vec![7]);
        assert_eq!(result.pushes, 1);
        assert_eq!(result.max_stack_len, 1);
    }

    #[test]
    fn test_cycle_with_self_loop_terminates() {
        let graph: Graph = [(1, 2), (2, 3), (3, 1), (1, 1)].into_iter().collect();
        let result = IterativeDfs::run(&graph, 1);

        assert_eq!(result.order, vec![1, 2, 3]);
    }
}
