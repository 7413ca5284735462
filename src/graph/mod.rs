//! Undirected adjacency-list graph store.
//!
//! The single stateful component of the crate: every search strategy
//! borrows a [`Graph`] read-only and keeps its own per-call bookkeeping.

mod store;

pub use store::{Graph, VertexId};
