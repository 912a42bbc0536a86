//! Sample and random graph emission
//!
//! Both commands print an interval snapshot, which is already the
//! machine-readable interchange form, so output is the same in every
//! format.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tgq_core::error::Result;
use tgq_core::generate;
use tgq_core::graph::IntervalGraph;
use tgq_core::snapshot::IntervalSnapshot;

/// Emit the built-in sample graph
pub fn sample() -> Result<()> {
    emit(&generate::sample_graph())
}

/// Emit a random graph from an explicit seed
pub fn random(nodes: u32, density: f64, max_time: i64, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let graph = generate::random_graph(nodes, density, max_time, &mut rng);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        seed,
        "generated_graph"
    );
    emit(&graph)
}

fn emit(graph: &IntervalGraph) -> Result<()> {
    let snapshot = IntervalSnapshot::from_graph(graph);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
