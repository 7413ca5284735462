//! Iterative-deepening DFS (IDDFS).
//!
//! Runs [depth-limited search](crate::dls) with limits 0, 1, 2, … up to a
//! maximum and returns the first hit. Every attempt starts from a fresh
//! search state, so the shallow levels are re-explored on each deeper
//! attempt; with branching factor `b` the attempt at depth `d` costs
//! O(b^d). That re-exploration is the classical space/time tradeoff of
//! the algorithm and is deliberately not optimized away.

mod runner;

pub use runner::{IddfsResult, IddfsRunner};
