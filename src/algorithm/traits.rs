use num_traits::{Float, Zero};
use serde::Serialize;
use std::fmt::Debug;

use crate::graph::model::Graph;
use crate::trace::{DistanceMap, DistanceTracker, TraceEntry};
use crate::Result;

/// Result of a single engine invocation, consumed by the replay and
/// highlighting views. The trace is the complete ordered event log; the
/// path is empty when no end was requested, the end is unreached, or a
/// negative cycle was detected.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub trace: Vec<TraceEntry<W>>,
    pub distances: DistanceMap<W>,
    pub path: Vec<String>,
}

impl<W> RunResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The documented short-circuit for a start id that is not a declared
    /// node: empty trace, all-infinite distances, empty path. Both engines
    /// return this rather than an error.
    pub fn unknown_start(graph: &Graph<W>) -> Self {
        let (distances, _) = DistanceTracker::new(graph.node_ids()).into_parts();
        RunResult {
            trace: Vec::new(),
            distances,
            path: Vec::new(),
        }
    }
}

/// Trait for shortest path engines
pub trait ShortestPathEngine<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `start`, tracing every event, and
    /// reconstruct the path to `end` when one is requested.
    fn run(&self, graph: &Graph<W>, start: &str, end: Option<&str>) -> Result<RunResult<W>>;
}
