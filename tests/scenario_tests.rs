use ordered_float::OrderedFloat;
use route_trace::graph::layout::{CoordinateSource, FixedLayout, Position, RandomLayout};
use route_trace::graph::scenarios;
use route_trace::{compute_shortest_path, Algorithm};

#[test]
fn test_dijkstra_demo_scenario() {
    let scenario = scenarios::dijkstra_demo();
    assert_eq!(scenario.graph.node_count(), 10);
    assert_eq!(scenario.graph.edge_count(), 18);

    let result =
        compute_shortest_path(&scenario.graph, Algorithm::Dijkstra, "R1", Some("R10")).unwrap();

    assert_eq!(result.distances["R10"], OrderedFloat(14.0));
    assert_eq!(result.path, vec!["R1", "R7", "R9", "R10"]);
}

#[test]
fn test_bellman_ford_demo_scenario() {
    let scenario = scenarios::bellman_ford_demo();
    assert_eq!(scenario.graph.node_count(), 8);
    assert_eq!(scenario.graph.edge_count(), 15);

    let result =
        compute_shortest_path(&scenario.graph, Algorithm::BellmanFord, "R1", Some("R8")).unwrap();

    assert_eq!(result.distances["R5"], OrderedFloat(4.0));
    assert_eq!(result.distances["R8"], OrderedFloat(0.0));
    assert_eq!(result.path, vec!["R1", "R2", "R5", "R8"]);
}

#[test]
fn test_every_router_has_a_position() {
    for scenario in [scenarios::dijkstra_demo(), scenarios::bellman_ford_demo()] {
        assert_eq!(scenario.positions.len(), scenario.graph.node_count());
        for node in &scenario.graph.nodes {
            assert!(
                scenario.positions.iter().any(|(id, _)| *id == node.id),
                "{}: router {} has no canvas position",
                scenario.name,
                node.id
            );
        }
    }
}

#[test]
fn test_fixed_layout_is_deterministic() {
    let mut layout = FixedLayout::new(vec![
        Position { x: 10.0, y: 20.0 },
        Position { x: 30.0, y: 40.0 },
    ]);

    assert_eq!(layout.next_position(), Position { x: 10.0, y: 20.0 });
    assert_eq!(layout.next_position(), Position { x: 30.0, y: 40.0 });
    // Exhausted layouts keep handing out the last position.
    assert_eq!(layout.next_position(), Position { x: 30.0, y: 40.0 });
}

#[test]
fn test_random_layout_stays_on_canvas() {
    let mut layout = RandomLayout::new();
    for _ in 0..100 {
        let position = layout.next_position();
        assert!((120.0..760.0).contains(&position.x));
        assert!((80.0..440.0).contains(&position.y));
    }
}
