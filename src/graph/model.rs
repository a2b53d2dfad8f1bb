use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A router in the network. Identity is the id; uniqueness of ids within a
/// graph is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

/// A weighted link between two routers. Direction only matters under
/// Bellman-Ford; Dijkstra traverses every edge both ways. Negative weights
/// are only meaningful under Bellman-Ford.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub source: String,
    pub target: String,
    pub weight: W,
}

/// A caller-owned router network. The engines read it once per run and
/// never mutate it; no self-loop or multi-edge restriction is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<W>>,
}

/// Controls how edges are inserted when building adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Each edge is inserted in both directions (Dijkstra semantics).
    Undirected,
    /// Each edge is inserted source -> target only (Bellman-Ford semantics).
    Directed,
}

impl<W> Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Declares a router with the given id
    pub fn add_node(&mut self, id: impl Into<String>) {
        self.nodes.push(Node { id: id.into() });
    }

    /// Adds a weighted link between two routers
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>, weight: W) {
        self.edges.push(Edge {
            source: source.into(),
            target: target.into(),
            weight,
        });
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Returns the declared router ids in input order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    /// Builds a fresh adjacency map keyed by every declared node id, so
    /// isolated routers map to an empty neighbor list. Edges referencing an
    /// undeclared endpoint are dropped with a warning; callers are expected
    /// to pre-validate their graphs.
    pub fn adjacency(&self, orientation: EdgeOrientation) -> AdjacencyMap<W> {
        let mut neighbors: BTreeMap<String, Vec<(String, W)>> = BTreeMap::new();

        for node in &self.nodes {
            neighbors.entry(node.id.clone()).or_default();
        }

        for edge in &self.edges {
            if !neighbors.contains_key(&edge.source) || !neighbors.contains_key(&edge.target) {
                log::warn!(
                    "dropping edge {} -> {}: endpoint not declared as a node",
                    edge.source,
                    edge.target
                );
                continue;
            }

            if let Some(out) = neighbors.get_mut(&edge.source) {
                out.push((edge.target.clone(), edge.weight));
            }
            if orientation == EdgeOrientation::Undirected {
                if let Some(back) = neighbors.get_mut(&edge.target) {
                    back.push((edge.source.clone(), edge.weight));
                }
            }
        }

        AdjacencyMap { neighbors }
    }
}

/// Mapping from node id to its ordered neighbor list. Built fresh for each
/// engine run; neighbor order follows edge input order.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    neighbors: BTreeMap<String, Vec<(String, W)>>,
}

impl<W> AdjacencyMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the neighbor list for a node, empty for isolated or unknown ids
    pub fn neighbors(&self, id: &str) -> &[(String, W)] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
