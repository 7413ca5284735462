//! Depth-limited search (DLS).
//!
//! Depth-first search for a target vertex under a remaining-steps budget,
//! with explicit backtracking: every mark a failed branch made is undone
//! before the branch reports failure, so the search state is strictly
//! reversible and sibling branches never see residue.
//!
//! Recursion depth is bounded by the depth limit itself (the budget
//! strictly decreases on descent), so the call stack grows with the limit,
//! not with the graph.

mod runner;
mod types;

pub use runner::{DlsResult, DlsRunner};
pub use types::SearchState;
