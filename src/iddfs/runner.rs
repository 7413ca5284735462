//! IDDFS driver loop.

use crate::dls::DlsRunner;
use crate::graph::{Graph, VertexId};
use crate::trace::{TraceEvent, TraceSink};

/// Result of an iterative-deepening search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IddfsResult {
    /// Path from start to target inclusive; empty when no attempt
    /// succeeded.
    pub path: Vec<VertexId>,

    /// Whether the target was reached within the maximum depth.
    pub found: bool,

    /// The depth limit at which the target was first found, i.e. the
    /// smallest limit for which the underlying depth-limited search
    /// succeeds.
    pub successful_depth: Option<i64>,

    /// Number of depth-limited attempts made.
    pub attempts: usize,

    /// Vertices expanded, summed over all attempts.
    pub expanded: usize,

    /// One [`TraceEvent::DepthAttempt`] per tried limit. Empty when the
    /// events were streamed to a sink instead.
    pub events: Vec<TraceEvent>,
}

/// Iterative-deepening search runner.
pub struct IddfsRunner;

impl IddfsRunner {
    /// Searches for `target` from `start` with depth limits
    /// `0..=max_depth`, returning the first successful path.
    ///
    /// Attempts are fully independent: each gets a fresh visited set and
    /// path, and nothing carries over between depth iterations. A negative
    /// `max_depth` makes no attempts at all. Because the limits grow one
    /// at a time, the successful attempt is the smallest limit that works.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_unisearch::iddfs::IddfsRunner;
    /// use u_unisearch::graph::Graph;
    ///
    /// let graph: Graph = [(1, 2), (2, 4), (4, 5)].into_iter().collect();
    /// let result = IddfsRunner::run(&graph, 1, 5, 10);
    ///
    /// assert_eq!(result.path, vec![1, 2, 4, 5]);
    /// assert_eq!(result.successful_depth, Some(3));
    /// ```
    pub fn run(graph: &Graph, start: VertexId, target: VertexId, max_depth: i64) -> IddfsResult {
        let mut events = Vec::new();
        let mut result =
            Self::run_with_sink(graph, start, target, max_depth, &mut |event| events.push(event));
        result.events = events;
        result
    }

    /// Like [`run`](Self::run), but streams a `DepthAttempt` event into
    /// `sink` before each attempt; the returned `events` field is left
    /// empty.
    pub fn run_with_sink<S: TraceSink>(
        graph: &Graph,
        start: VertexId,
        target: VertexId,
        max_depth: i64,
        sink: &mut S,
    ) -> IddfsResult {
        let mut attempts = 0;
        let mut expanded = 0;

        for limit in 0..=max_depth {
            sink.record(TraceEvent::DepthAttempt { limit });
            attempts += 1;

            let attempt = DlsRunner::run(graph, start, target, limit);
            expanded += attempt.expanded;
            if attempt.found {
                return IddfsResult {
                    path: attempt.path,
                    found: true,
                    successful_depth: Some(limit),
                    attempts,
                    expanded,
                    events: Vec::new(),
                };
            }
        }

        IddfsResult {
            path: Vec::new(),
            found: false,
            successful_depth: None,
            attempts,
            expanded,
            events: Vec::new(),
        }
    }
}
