//! Breadth-first traversal with level tracking.
//!
//! Visits the connected component of the start vertex level by level. The
//! level reported for a vertex equals its shortest-hop distance from the
//! start, since the graph is unweighted.

mod runner;

pub use runner::{BfsResult, BfsRunner};
