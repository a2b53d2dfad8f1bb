use route_trace::{compute_shortest_path, Algorithm, Graph, TraceStep};

fn diamond() -> Graph<f64> {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D"] {
        graph.add_node(id);
    }
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("A", "C", 4.0);
    graph.add_edge("B", "C", 1.0);
    graph.add_edge("C", "D", 1.0);
    graph
}

#[test]
fn test_trace_starts_with_init_snapshot() {
    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        let result = compute_shortest_path(&diamond(), algorithm, "A", Some("D")).unwrap();

        let first = &result.trace[0];
        assert_eq!(first.step, TraceStep::Init, "{}", algorithm);
        assert_eq!(first.dist["A"], 0.0);
        for id in ["B", "C", "D"] {
            assert!(first.dist[id].is_infinite());
        }
    }
}

#[test]
fn test_snapshots_are_independent_copies() {
    // The init snapshot must still show the pre-run state after the
    // working map has been relaxed all the way down.
    let result = compute_shortest_path(&diamond(), Algorithm::Dijkstra, "A", Some("D")).unwrap();

    assert_eq!(result.distances["D"], 3.0);
    assert!(result.trace[0].dist["D"].is_infinite());
}

#[test]
fn test_distances_never_increase_across_the_trace() {
    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        let result = compute_shortest_path(&diamond(), algorithm, "A", Some("D")).unwrap();

        for window in result.trace.windows(2) {
            for (id, later) in &window[1].dist {
                let earlier = window[0].dist[id];
                assert!(
                    *later <= earlier,
                    "{}: distance to {} increased from {} to {}",
                    algorithm,
                    id,
                    earlier,
                    later
                );
            }
        }
    }
}

#[test]
fn test_relax_entries_carry_their_edge() {
    let result = compute_shortest_path(&diamond(), Algorithm::Dijkstra, "A", Some("D")).unwrap();

    for entry in &result.trace {
        match &entry.step {
            TraceStep::Relax { from, to } => {
                assert_eq!(entry.edge, Some((from.clone(), to.clone())));
            }
            _ => assert!(entry.edge.is_none()),
        }
    }
}

#[test]
fn test_step_labels() {
    assert_eq!(TraceStep::Init.to_string(), "init");
    assert_eq!(TraceStep::Visit("R1".to_string()).to_string(), "visit R1");
    assert_eq!(
        TraceStep::Relax {
            from: "R1".to_string(),
            to: "R2".to_string()
        }
        .to_string(),
        "relax R1->R2"
    );
    assert_eq!(
        TraceStep::Settled("R3".to_string()).to_string(),
        "settled R3"
    );
    assert_eq!(
        TraceStep::NegativeCycle.to_string(),
        "negative cycle detected"
    );
}

#[test]
fn test_result_serializes_for_the_replay_view() {
    let mut graph: Graph<f64> = Graph::new();
    for id in ["A", "B", "C"] {
        graph.add_node(id);
    }
    graph.add_edge("A", "B", 1.0);

    let result = compute_shortest_path(&graph, Algorithm::Dijkstra, "A", Some("B")).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["trace"][0]["step"], "init");
    assert_eq!(json["path"], serde_json::json!(["A", "B"]));
    assert_eq!(json["distances"]["B"], 1.0);
    // Unreached distances are non-finite floats; serde_json renders them
    // as null, which the replay view shows as "infinity".
    assert!(json["distances"]["C"].is_null());

    let relax = result
        .trace
        .iter()
        .position(|entry| matches!(entry.step, TraceStep::Relax { .. }))
        .unwrap();
    let relax_json = serde_json::to_value(&result.trace[relax]).unwrap();
    assert_eq!(relax_json["step"], "relax A->B");
    assert_eq!(relax_json["edge"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_snapshot_keys_are_lexicographic() {
    let mut graph: Graph<f64> = Graph::new();
    for id in ["R2", "R10", "R1"] {
        graph.add_node(id);
    }
    graph.add_edge("R2", "R10", 1.0);

    let result = compute_shortest_path(&graph, Algorithm::Dijkstra, "R2", None).unwrap();

    let keys: Vec<&str> = result.trace[0].dist.keys().map(String::as_str).collect();
    // Lexicographic by id, not input order ("R10" sorts before "R2").
    assert_eq!(keys, vec!["R1", "R10", "R2"]);
}

#[test]
fn test_trace_abort_order_on_negative_cycle() {
    let mut graph: Graph<f64> = Graph::new();
    for id in ["A", "B", "C"] {
        graph.add_node(id);
    }
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("B", "C", -1.0);
    graph.add_edge("C", "B", -1.0);

    let result = compute_shortest_path(&graph, Algorithm::BellmanFord, "A", Some("C")).unwrap();

    // The cycle marker is the last entry: relaxation aborts immediately,
    // so no settle or relax may follow it.
    let marker = result
        .trace
        .iter()
        .position(|entry| entry.step == TraceStep::NegativeCycle)
        .expect("cycle marker present");
    assert_eq!(marker, result.trace.len() - 1);
}
