//! Cross-strategy properties checked over randomized graphs.

use proptest::prelude::*;
use std::collections::HashMap;
use u_unisearch::bfs::BfsRunner;
use u_unisearch::dfs::{IterativeDfs, RecursiveDfs};
use u_unisearch::dls::DlsRunner;
use u_unisearch::graph::{Graph, VertexId};
use u_unisearch::iddfs::IddfsRunner;
use u_unisearch::trace::TraceEvent;

fn arb_edges() -> impl Strategy<Value = Vec<(VertexId, VertexId)>> {
    prop::collection::vec((0..12i64, 0..12i64), 0..40)
}

/// Shortest-hop distances computed by plain relaxation to a fixpoint,
/// independent of the BFS under test.
fn hop_distances(graph: &Graph, start: VertexId) -> HashMap<VertexId, usize> {
    let mut dist = HashMap::new();
    dist.insert(start, 0usize);
    loop {
        let mut changed = false;
        let frontier: Vec<(VertexId, usize)> = dist.iter().map(|(&v, &d)| (v, d)).collect();
        for (vertex, d) in frontier {
            for &neighbor in graph.neighbors(vertex) {
                if dist.get(&neighbor).is_none_or(|&dn| dn > d + 1) {
                    dist.insert(neighbor, d + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

proptest! {
    #[test]
    fn edge_insertion_is_symmetric(edges in arb_edges()) {
        let graph: Graph = edges.iter().copied().collect();
        for &(u, v) in &edges {
            prop_assert!(graph.neighbors(u).contains(&v));
            prop_assert!(graph.neighbors(v).contains(&u));
        }
    }

    #[test]
    fn dfs_variants_agree(edges in arb_edges(), start in 0..12i64) {
        let graph: Graph = edges.iter().copied().collect();
        let recursive = RecursiveDfs::run(&graph, start);
        let iterative = IterativeDfs::run(&graph, start);
        prop_assert_eq!(recursive.order, iterative.order);
    }

    #[test]
    fn dfs_emits_each_vertex_exactly_once(edges in arb_edges(), start in 0..12i64) {
        let graph: Graph = edges.iter().copied().collect();
        let order = RecursiveDfs::run(&graph, start).order;
        let mut sorted = order.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), order.len(), "a vertex was emitted twice");
    }

    #[test]
    fn bfs_levels_are_shortest_hop_distances(edges in arb_edges(), start in 0..12i64) {
        let graph: Graph = edges.iter().copied().collect();
        let result = BfsRunner::run(&graph, start);
        let distances = hop_distances(&graph, start);

        prop_assert_eq!(result.order.len(), distances.len());
        for event in &result.events {
            if let TraceEvent::Visit { vertex, depth } = event {
                prop_assert_eq!(Some(&(*depth as usize)), distances.get(vertex));
            }
        }
    }

    #[test]
    fn bfs_and_dfs_cover_the_same_component(edges in arb_edges(), start in 0..12i64) {
        let graph: Graph = edges.iter().copied().collect();
        let mut bfs_order = BfsRunner::run(&graph, start).order;
        let mut dfs_order = RecursiveDfs::run(&graph, start).order;
        bfs_order.sort_unstable();
        dfs_order.sort_unstable();
        prop_assert_eq!(bfs_order, dfs_order);
    }

    #[test]
    fn dls_is_unaffected_by_prior_calls(
        edges in arb_edges(),
        start in 0..12i64,
        target in 0..12i64,
        limit in -2..8i64,
    ) {
        let graph: Graph = edges.iter().copied().collect();
        let baseline = DlsRunner::run(&graph, start, target, limit);
        // Interleave calls with other parameters, then repeat.
        let _ = DlsRunner::run(&graph, start, target, limit - 1);
        let _ = DlsRunner::run(&graph, target, start, limit);
        let repeat = DlsRunner::run(&graph, start, target, limit);
        prop_assert_eq!(baseline, repeat);
    }

    #[test]
    fn dls_success_is_monotone_in_the_limit(
        edges in arb_edges(),
        start in 0..12i64,
        target in 0..12i64,
        limit in 0..6i64,
    ) {
        let graph: Graph = edges.iter().copied().collect();
        if DlsRunner::run(&graph, start, target, limit).found {
            for extra in 1..=3 {
                prop_assert!(
                    DlsRunner::run(&graph, start, target, limit + extra).found,
                    "success at limit {} but failure at {}",
                    limit,
                    limit + extra
                );
            }
        }
    }

    #[test]
    fn dls_path_connects_start_to_target(
        edges in arb_edges(),
        start in 0..12i64,
        target in 0..12i64,
        limit in 0..8i64,
    ) {
        let graph: Graph = edges.iter().copied().collect();
        let result = DlsRunner::run(&graph, start, target, limit);
        if result.found {
            prop_assert_eq!(result.path.first(), Some(&start));
            prop_assert_eq!(result.path.last(), Some(&target));
            for window in result.path.windows(2) {
                prop_assert!(
                    graph.neighbors(window[0]).contains(&window[1]),
                    "{} and {} are not adjacent",
                    window[0],
                    window[1]
                );
            }
        } else {
            prop_assert!(result.path.is_empty());
        }
    }

    #[test]
    fn iddfs_succeeds_at_the_minimal_workable_depth(
        edges in arb_edges(),
        start in 0..12i64,
        target in 0..12i64,
        max_depth in 0..8i64,
    ) {
        let graph: Graph = edges.iter().copied().collect();
        let result = IddfsRunner::run(&graph, start, target, max_depth);
        let minimal = (0..=max_depth).find(|&d| DlsRunner::run(&graph, start, target, d).found);

        prop_assert_eq!(result.successful_depth, minimal);
        match minimal {
            Some(depth) => {
                prop_assert!(result.found);
                prop_assert_eq!(
                    result.path,
                    DlsRunner::run(&graph, start, target, depth).path
                );
            }
            None => {
                prop_assert!(!result.found);
                prop_assert!(result.path.is_empty());
                prop_assert_eq!(result.attempts as i64, max_depth + 1);
            }
        }
    }
}
