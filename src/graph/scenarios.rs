//! Preset router networks shipped with the visualizer.
//!
//! Two ready-made scenarios: a 10-router non-negative network for Dijkstra
//! and an 8-router directed network with two negative links for
//! Bellman-Ford. Positions are the canvas coordinates the visualizer draws
//! the routers at.

use ordered_float::OrderedFloat;

use crate::graph::layout::Position;
use crate::graph::model::Graph;

/// A preset router network plus its canvas layout
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub graph: Graph<OrderedFloat<f64>>,
    pub positions: Vec<(String, Position)>,
}

fn build(
    name: &'static str,
    routers: &[(&str, f64, f64)],
    links: &[(&str, &str, f64)],
) -> Scenario {
    let mut graph = Graph::new();
    let mut positions = Vec::with_capacity(routers.len());

    for &(id, x, y) in routers {
        graph.add_node(id);
        positions.push((id.to_string(), Position { x, y }));
    }
    for &(source, target, weight) in links {
        graph.add_edge(source, target, OrderedFloat(weight));
    }

    Scenario {
        name,
        graph,
        positions,
    }
}

/// Ten routers, eighteen non-negative links. Shortest route R1 to R10 is
/// R1 -> R7 -> R9 -> R10 at total cost 14.
pub fn dijkstra_demo() -> Scenario {
    build(
        "dijkstra-demo",
        &[
            ("R1", 120.0, 80.0),
            ("R2", 360.0, 70.0),
            ("R3", 620.0, 110.0),
            ("R4", 820.0, 200.0),
            ("R5", 700.0, 320.0),
            ("R6", 460.0, 300.0),
            ("R7", 240.0, 260.0),
            ("R8", 120.0, 380.0),
            ("R9", 360.0, 420.0),
            ("R10", 600.0, 420.0),
        ],
        &[
            ("R1", "R2", 4.0),
            ("R1", "R7", 6.0),
            ("R2", "R3", 5.0),
            ("R2", "R7", 3.0),
            ("R2", "R5", 8.0),
            ("R3", "R4", 4.0),
            ("R3", "R6", 7.0),
            ("R3", "R5", 6.0),
            ("R4", "R5", 3.0),
            ("R4", "R10", 9.0),
            ("R5", "R6", 2.0),
            ("R5", "R10", 5.0),
            ("R6", "R7", 5.0),
            ("R6", "R9", 4.0),
            ("R7", "R8", 3.0),
            ("R7", "R9", 6.0),
            ("R8", "R9", 4.0),
            ("R9", "R10", 2.0),
        ],
    )
}

/// Eight routers, fifteen directed links, two of them negative. Shortest
/// route R1 to R8 is R1 -> R2 -> R5 -> R8 at total cost 0.
pub fn bellman_ford_demo() -> Scenario {
    build(
        "bellman-ford-demo",
        &[
            ("R1", 140.0, 90.0),
            ("R2", 320.0, 80.0),
            ("R3", 520.0, 120.0),
            ("R4", 380.0, 240.0),
            ("R5", 560.0, 260.0),
            ("R6", 720.0, 190.0),
            ("R7", 420.0, 380.0),
            ("R8", 620.0, 400.0),
        ],
        &[
            ("R1", "R2", 6.0),
            ("R1", "R3", 5.0),
            ("R1", "R6", 8.0),
            ("R2", "R4", 1.0),
            ("R2", "R5", -2.0),
            ("R2", "R6", 2.0),
            ("R3", "R5", 3.0),
            ("R3", "R6", 4.0),
            ("R4", "R7", 2.0),
            ("R5", "R4", 2.0),
            ("R5", "R7", 3.0),
            ("R5", "R8", -4.0),
            ("R6", "R5", 1.0),
            ("R6", "R8", 5.0),
            ("R7", "R8", 2.0),
        ],
    )
}
