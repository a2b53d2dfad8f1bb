pub mod bellman_ford;
pub mod dijkstra;
pub mod path;
pub mod traits;

pub use traits::{RunResult, ShortestPathEngine};

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The algorithm selector the presentation layer hands to
/// [`crate::compute_shortest_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" => Ok(Algorithm::BellmanFord),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}
