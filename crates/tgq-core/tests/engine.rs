//! Cross-algorithm properties of the query engine

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tgq_core::generate::{random_graph, sample_graph};
use tgq_core::graph::{
    astar, dijkstra, earliest_arrival, min_elapsed_path, temporal_bfs, temporal_centrality,
    EventGraph,
};
use tgq_core::snapshot::{EventSnapshot, IntervalSnapshot};

fn timetable() -> EventGraph {
    let mut g = EventGraph::new();
    for id in ["A", "B", "C", "D", "E"] {
        g.add_node(id);
    }
    g.add_edge("A", "B", &[1, 4, 9]);
    g.add_edge("B", "C", &[2, 6]);
    g.add_edge("A", "C", &[2]);
    g.add_edge("C", "D", &[7]);
    g.add_edge("D", "A", &[10]);
    g
}

#[test]
fn earliest_arrival_agrees_with_elapsed_cost_search() {
    let g = timetable();
    let nodes = ["A", "B", "C", "D", "E"];
    for t0 in 0..=11 {
        for start in nodes {
            for end in nodes {
                let bfs = earliest_arrival(&g, start, end, t0);
                let dij = min_elapsed_path(&g, start, end, t0);
                assert_eq!(
                    bfs.found, dij.found,
                    "({} -> {}, t0 = {})",
                    start, end, t0
                );
                if bfs.found {
                    assert_eq!(
                        bfs.arrival, dij.arrival,
                        "({} -> {}, t0 = {})",
                        start, end, t0
                    );
                }
            }
        }
    }
}

#[test]
fn temporal_states_never_precede_departure() {
    let g = timetable();
    for t0 in 0..=10 {
        for node in ["A", "B", "C", "D", "E"] {
            for state in temporal_bfs(&g, node, t0) {
                assert!(state.time >= t0);
            }
        }
    }
}

#[test]
fn centrality_never_negative_and_covers_all_nodes() {
    let g = timetable();
    let scores = temporal_centrality(&g, 0);
    assert_eq!(scores.len(), 5);
    let isolated = scores.iter().find(|s| s.node == "E").unwrap();
    assert_eq!(isolated.score, 0);
}

#[test]
fn astar_cost_equals_dijkstra_on_random_graphs() {
    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = random_graph(12, 0.3, 8, &mut rng);
        for t in 0..=8 {
            for start in 1..=12 {
                for target in 1..=12 {
                    let a = astar(&g, start, target, t);
                    let d = dijkstra(&g, start, target, t);
                    assert_eq!(
                        a.found, d.found,
                        "seed {} ({} -> {}, t = {})",
                        seed, start, target, t
                    );
                    if a.found {
                        assert_eq!(
                            a.cost, d.cost,
                            "seed {} ({} -> {}, t = {})",
                            seed, start, target, t
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn dijkstra_scenario_cheap_detour_beats_heavy_edge() {
    let mut g = tgq_core::graph::IntervalGraph::new();
    g.init(5);
    g.add_edge(1, 2, 1, 0, 5);
    g.add_edge(2, 3, 1, 0, 5);
    g.add_edge(1, 3, 10, 0, 5);
    let result = dijkstra(&g, 1, 3, 0);
    assert!(result.found);
    assert_eq!(result.path, vec![1, 2, 3]);
    assert_eq!(result.cost, 2);
}

#[test]
fn event_snapshot_round_trip_preserves_order() {
    let g = timetable();
    let snapshot = EventSnapshot::from_graph(&g);
    let rebuilt = snapshot.clone().into_graph().unwrap();
    let again = EventSnapshot::from_graph(&rebuilt);
    assert_eq!(again.nodes, snapshot.nodes);
    assert_eq!(again.edges, snapshot.edges);
    assert_eq!(again.max_time, snapshot.max_time);
}

#[test]
fn interval_snapshot_round_trip_preserves_order() {
    let g = sample_graph();
    let snapshot = IntervalSnapshot::from_graph(&g);
    let rebuilt = snapshot.clone().into_graph().unwrap();
    assert_eq!(IntervalSnapshot::from_graph(&rebuilt), snapshot);
}

#[test]
fn unknown_nodes_are_results_not_errors() {
    let g = timetable();
    assert!(temporal_bfs(&g, "nope", 0).is_empty());
    assert!(!earliest_arrival(&g, "nope", "A", 0).found);
    assert!(!min_elapsed_path(&g, "A", "nope", 0).found);
}
