pub mod layout;
pub mod model;
pub mod scenarios;

pub use model::{AdjacencyMap, Edge, EdgeOrientation, Graph, Node};
