use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::path;
use crate::algorithm::{RunResult, ShortestPathEngine};
use crate::graph::model::{EdgeOrientation, Graph};
use crate::trace::{DistanceTracker, TraceRecorder, TraceStep};
use crate::{Error, Result};

/// Classic Dijkstra over undirected traversal of the edges.
///
/// Minimum selection is a deliberate linear scan in input node order, O(V²)
/// overall. The graphs this crate serves are small interactive router
/// networks, and the scan makes the visitation order fully deterministic:
/// on a distance tie the node that appears earliest in the input ordering
/// is selected.
///
/// Negative edge weights violate the algorithm's precondition and are
/// rejected up front with [`Error::NegativeWeight`] rather than silently
/// producing wrong distances.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathEngine<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(&self, graph: &Graph<W>, start: &str, end: Option<&str>) -> Result<RunResult<W>> {
        for edge in &graph.edges {
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight(
                    edge.source.clone(),
                    edge.target.clone(),
                ));
            }
        }

        if !graph.has_node(start) {
            log::debug!("dijkstra: start {} is not a declared node", start);
            return Ok(RunResult::unknown_start(graph));
        }

        let adjacency = graph.adjacency(EdgeOrientation::Undirected);
        let order: Vec<&str> = graph.node_ids().collect();

        let mut tracker = DistanceTracker::new(graph.node_ids());
        tracker.seed(start);

        let mut recorder = TraceRecorder::new();
        recorder.record(TraceStep::Init, &tracker);

        let mut settled: HashSet<&str> = HashSet::new();

        // Each iteration settles exactly one node, so this runs at most
        // V times.
        while settled.len() < order.len() {
            // Linear scan for the unvisited node with minimum distance.
            // Strict < keeps the earliest input-order node on ties and
            // never selects a node still at infinity.
            let mut selected: Option<&str> = None;
            let mut best = W::infinity();
            for &id in &order {
                if !settled.contains(id) && tracker.distance(id) < best {
                    best = tracker.distance(id);
                    selected = Some(id);
                }
            }

            let Some(current) = selected else {
                break;
            };

            settled.insert(current);
            recorder.record(TraceStep::Visit(current.to_string()), &tracker);

            for (neighbor, weight) in adjacency.neighbors(current) {
                let candidate = tracker.distance(current) + *weight;
                if candidate < tracker.distance(neighbor) {
                    log::debug!(
                        "dijkstra: relax {} -> {} to {:?}",
                        current,
                        neighbor,
                        candidate
                    );
                    tracker.improve(neighbor, candidate, current);
                    recorder.record(
                        TraceStep::Relax {
                            from: current.to_string(),
                            to: neighbor.clone(),
                        },
                        &tracker,
                    );
                }
            }
        }

        let route = match end {
            Some(end) => path::reconstruct(&tracker, start, end, graph.node_count()),
            None => Vec::new(),
        };

        let (distances, _) = tracker.into_parts();
        Ok(RunResult {
            trace: recorder.into_entries(),
            distances,
            path: route,
        })
    }
}
