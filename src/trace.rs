//! Search observability events.
//!
//! The runners are free of I/O side effects: everything an interactive
//! front-end would print while a search runs (visit levels, attempted
//! depth limits) is modeled as a [`TraceEvent`] value instead. Runners
//! collect events into their result by default, or stream them into a
//! caller-supplied [`TraceSink`].

use crate::graph::VertexId;
use std::fmt;

/// A single observable step of a running search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    /// A vertex was produced at the given depth (DFS recursion level or
    /// BFS level).
    Visit {
        /// The vertex that was visited.
        vertex: VertexId,
        /// Depth at which it was produced.
        depth: u32,
    },

    /// The iterative-deepening driver is about to try a depth limit.
    DepthAttempt {
        /// The limit passed to the underlying depth-limited search.
        limit: i64,
    },
}

impl fmt::Display for TraceEvent {
    /// Renders the event as the console line the original front-end
    /// printed, so a CLI can replay a trace verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Visit { vertex, depth } => write!(f, "Node: {vertex} Level: {depth}"),
            TraceEvent::DepthAttempt { limit } => write!(f, "Trying depth limit: {limit}"),
        }
    }
}

/// Receives trace events as a search runs.
///
/// Implemented for any `FnMut(TraceEvent)` closure; accumulating into a
/// `Vec` is a one-liner (`|event| events.push(event)`), which is exactly
/// how the runners' collecting `run` entry points are built on their
/// streaming `run_with_sink` counterparts.
pub trait TraceSink {
    /// Records one event.
    fn record(&mut self, event: TraceEvent);
}

impl<F: FnMut(TraceEvent)> TraceSink for F {
    fn record(&mut self, event: TraceEvent) {
        self(event)
    }
}
