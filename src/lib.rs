//! Uninformed graph search toolkit.
//!
//! Provides four interchangeable search strategies over one undirected
//! adjacency-list graph:
//!
//! - **DFS**: pre-order depth-first traversal, in recursive
//!   ([`dfs::RecursiveDfs`]) and explicit-stack ([`dfs::IterativeDfs`])
//!   form; both produce the same visitation order.
//! - **BFS** ([`bfs::BfsRunner`]): breadth-first traversal reporting each
//!   vertex's level, i.e. its shortest-hop distance from the start.
//! - **DLS** ([`dls::DlsRunner`]): depth-first search for a target vertex
//!   under a depth budget, with fully reversible backtracking.
//! - **IDDFS** ([`iddfs::IddfsRunner`]): depth-limited search re-run with
//!   growing limits until the target is found, yielding a path at the
//!   smallest workable depth.
//!
//! All strategies are deterministic and total: exploration follows
//! neighbor insertion order, and "not found" is an empty result, never an
//! error. Search progress an interactive front-end would display (visit
//! levels, attempted depth limits) is surfaced as [`trace::TraceEvent`]
//! values rather than printed.
//!
//! # Architecture
//!
//! [`graph::Graph`] is the only stateful component; every runner borrows
//! it read-only and owns its per-call visited set, so one graph serves any
//! number of searches. Construction and querying are single-threaded by
//! design — the store carries no synchronization.

pub mod bfs;
pub mod dfs;
pub mod dls;
pub mod graph;
pub mod iddfs;
pub mod trace;
