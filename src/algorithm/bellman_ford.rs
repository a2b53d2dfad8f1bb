use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use crate::algorithm::path;
use crate::algorithm::{RunResult, ShortestPathEngine};
use crate::graph::model::{EdgeOrientation, Graph};
use crate::trace::{DistanceTracker, TraceRecorder, TraceStep};
use crate::Result;

/// Queue-driven Bellman-Ford (SPFA-style worklist) over directed edges.
///
/// Instead of the classical fixed V-1 passes over every edge, nodes are
/// enqueued only when their distance improves, which exits early on settled
/// graphs. Weights may be negative. A node whose enqueue count reaches the
/// total node count can only be riding a negative cycle: the engine then
/// emits a `negative cycle detected` entry, clears the worklist, and aborts
/// relaxation. No path is returned in that case, even if the end node had
/// already been improved.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford engine instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W> ShortestPathEngine<W> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn run(&self, graph: &Graph<W>, start: &str, end: Option<&str>) -> Result<RunResult<W>> {
        if !graph.has_node(start) {
            log::debug!("bellman-ford: start {} is not a declared node", start);
            return Ok(RunResult::unknown_start(graph));
        }

        let adjacency = graph.adjacency(EdgeOrientation::Directed);
        let node_count = graph.node_count();

        let mut tracker: DistanceTracker<W> = DistanceTracker::new(graph.node_ids());
        tracker.seed(start);

        let mut recorder = TraceRecorder::new();
        recorder.record(TraceStep::Init, &tracker);

        let mut queue: VecDeque<String> = VecDeque::new();
        let mut in_queue: HashSet<String> = HashSet::new();
        let mut relax_counts: HashMap<String, usize> = HashMap::new();
        let mut cycle_detected = false;

        queue.push_back(start.to_string());
        in_queue.insert(start.to_string());

        'worklist: while let Some(current) = queue.pop_front() {
            in_queue.remove(&current);

            for (to, weight) in adjacency.neighbors(&current) {
                let from_dist = tracker.distance(&current);
                if !from_dist.is_finite() {
                    continue;
                }

                let candidate = from_dist + *weight;
                if candidate < tracker.distance(to) {
                    log::debug!(
                        "bellman-ford: relax {} -> {} to {:?}",
                        current,
                        to,
                        candidate
                    );
                    tracker.improve(to, candidate, &current);
                    recorder.record(
                        TraceStep::Relax {
                            from: current.clone(),
                            to: to.clone(),
                        },
                        &tracker,
                    );

                    if !in_queue.contains(to) {
                        queue.push_back(to.clone());
                        in_queue.insert(to.clone());

                        let count = relax_counts.entry(to.clone()).or_insert(0);
                        *count += 1;
                        // A node can be re-enqueued at most V-1 times on
                        // cycle-free improvements; reaching V means a
                        // negative cycle is feeding it.
                        if *count >= node_count {
                            log::warn!("bellman-ford: negative cycle reached via {}", to);
                            recorder.record(TraceStep::NegativeCycle, &tracker);
                            queue.clear();
                            cycle_detected = true;
                            break 'worklist;
                        }
                    }
                }
            }

            recorder.record(TraceStep::Settled(current), &tracker);
        }

        let route = match (cycle_detected, end) {
            (false, Some(end)) => path::reconstruct(&tracker, start, end, node_count),
            _ => Vec::new(),
        };

        let (distances, _) = tracker.into_parts();
        Ok(RunResult {
            trace: recorder.into_entries(),
            distances,
            path: route,
        })
    }
}
