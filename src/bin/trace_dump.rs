use route_trace::graph::scenarios::{self, Scenario};
use route_trace::{compute_shortest_path, Algorithm};

/// Runs one of the preset scenarios and dumps the full result (trace,
/// distances, path) as JSON, the way the replay view consumes it.
///
/// Usage: trace_dump [dijkstra|bellman-ford]
fn main() {
    env_logger::init();

    let choice = std::env::args().nth(1).unwrap_or_else(|| "dijkstra".to_string());
    let algorithm: Algorithm = match choice.parse() {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Usage: trace_dump [dijkstra|bellman-ford]");
            std::process::exit(2);
        }
    };

    let (scenario, start, end): (Scenario, &str, &str) = match algorithm {
        Algorithm::Dijkstra => (scenarios::dijkstra_demo(), "R1", "R10"),
        Algorithm::BellmanFord => (scenarios::bellman_ford_demo(), "R1", "R8"),
    };

    println!(
        "Running {} on scenario {} ({} routers, {} links), {} -> {}",
        algorithm,
        scenario.name,
        scenario.graph.node_count(),
        scenario.graph.edge_count(),
        start,
        end
    );

    let result = match compute_shortest_path(&scenario.graph, algorithm, start, Some(end)) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    println!("Trace entries: {}", result.trace.len());
    println!("Path: {}", result.path.join(" -> "));

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("failed to serialize result: {}", err);
            std::process::exit(1);
        }
    }
}
