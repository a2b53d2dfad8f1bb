//! Route Trace - Traceable Shortest-Path Engines
//!
//! This library is the computation core behind a router-network visualizer.
//! Given a caller-owned graph of routers, an algorithm choice, a start id,
//! and an optional end id, it computes distances, predecessor links, a
//! reconstructed path, and a complete ordered trace of every algorithmic
//! event (initialization, edge relaxation, node settlement, negative-cycle
//! detection) suitable for step-by-step replay.
//!
//! Two engines are provided: classic Dijkstra over undirected non-negative
//! edges, and a queue-driven (SPFA-style) Bellman-Ford over directed edges
//! with negative-cycle detection.

pub mod algorithm;
pub mod graph;
pub mod trace;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, Algorithm, RunResult, ShortestPathEngine,
};
/// Re-export main types for convenient use
pub use graph::model::{AdjacencyMap, Edge, EdgeOrientation, Graph, Node};
pub use trace::{DistanceMap, PredecessorMap, TraceEntry, TraceStep};

use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight on {0} -> {1} (not allowed under Dijkstra)")]
    NegativeWeight(String, String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// The single operation exposed to the presentation layer.
///
/// Runs the chosen engine over `graph` from `start` and returns the full
/// trace, the final distance map, and the reconstructed path to `end` (empty
/// when `end` is absent or unreached). An unknown `start` id short-circuits
/// to an empty trace, an all-infinite distance map, and an empty path for
/// both engines; the only error this returns is a negative edge weight
/// handed to Dijkstra.
pub fn compute_shortest_path<W>(
    graph: &Graph<W>,
    algorithm: Algorithm,
    start: &str,
    end: Option<&str>,
) -> Result<RunResult<W>>
where
    W: Float + Zero + Debug + Copy,
{
    match algorithm {
        Algorithm::Dijkstra => Dijkstra::new().run(graph, start, end),
        Algorithm::BellmanFord => BellmanFord::new().run(graph, start, end),
    }
}
