//! Depth-first traversal.
//!
//! Two mechanically different implementations of the same strategy:
//!
//! - [`RecursiveDfs`]: pre-order recursion; the call stack holds the
//!   frontier, so the recursion depth equals the depth of the explored
//!   path and very deep graphs are bound by the thread stack size.
//! - [`IterativeDfs`]: an explicit stack with neighbors pushed in reverse
//!   list order, which reproduces the recursive visitation order exactly
//!   while keeping the frontier on the heap.
//!
//! Both visit the full connected component of the start vertex, each
//! vertex exactly once, in the same order.

mod recursive;
mod stack;

pub use recursive::{DfsResult, RecursiveDfs};
pub use stack::{IterativeDfs, IterativeDfsResult};
