//! Graph generators
//!
//! The random generator takes the pseudo-random source explicitly so
//! callers control seeding; the CLI seeds a `ChaCha8Rng` for
//! reproducible output.

use crate::activation::Time;
use crate::graph::interval::IntervalGraph;
use rand::Rng;

/// Largest node count the random generator accepts
const MAX_RANDOM_NODES: u32 = 1000;

/// A small fixed 10-node interval graph, useful for demos and tests
pub fn sample_graph() -> IntervalGraph {
    let mut graph = IntervalGraph::new();
    graph.init(10);

    // (u, v, weight, start, end), undirected
    let edges: [(u32, u32, u64, Time, Time); 14] = [
        (1, 2, 1, 0, 5),
        (1, 3, 2, 0, 2),
        (2, 4, 3, 1, 4),
        (3, 4, 1, 2, 4),
        (4, 5, 2, 3, 6),
        (5, 6, 1, 5, 7),
        (6, 7, 2, 6, 8),
        (7, 8, 1, 7, 9),
        (2, 5, 2, 4, 6),
        (3, 6, 3, 5, 6),
        (1, 5, 5, 8, 9),
        (8, 9, 1, 8, 10),
        (9, 10, 1, 9, 10),
        (4, 8, 2, 6, 8),
    ];
    for (u, v, w, start, end) in edges {
        graph.add_edge(u, v, w, start, end);
    }

    graph
}

/// Generate a random undirected interval graph.
///
/// Each node pair gets an edge with probability `density`; weights fall
/// in `1..=10` and every activation range fits inside `[0, max_time]`.
/// Node count is clamped to 1000.
pub fn random_graph(
    nodes: u32,
    density: f64,
    max_time: Time,
    rng: &mut impl Rng,
) -> IntervalGraph {
    let n = nodes.min(MAX_RANDOM_NODES);
    let max_time = max_time.max(0);

    let mut graph = IntervalGraph::new();
    graph.init(n);

    for u in 1..=n {
        for v in (u + 1)..=n {
            if rng.gen_range(0.0..1.0) < density {
                let weight = rng.gen_range(1..=10);
                let start = rng.gen_range(0..=max_time);
                let end = rng.gen_range(start..=max_time);
                graph.add_edge(u, v, weight, start, end);
            }
        }
    }

    graph
}
