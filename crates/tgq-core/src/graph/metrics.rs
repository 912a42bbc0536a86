//! Aggregate queries over the discrete-event model

use crate::activation::{Activation, Time};
use crate::graph::algos::temporal_bfs;
use crate::graph::event::EventGraph;
use crate::graph::types::{CentralityScore, TemporalDegree};

/// In/out degree of `node` at exactly `t`. Independent scalar counts; an
/// unknown node has degree zero.
pub fn temporal_degree(graph: &EventGraph, node: &str, t: Time) -> TemporalDegree {
    let mut degree = TemporalDegree::default();
    for edge in graph.edges() {
        if edge.times.active_at(t) {
            if edge.src == node {
                degree.out_degree += 1;
            }
            if edge.dst == node {
                degree.in_degree += 1;
            }
        }
    }
    degree
}

/// Reachability score per node: the number of `(node, time)` states a
/// temporal BFS from it at `t` reaches, excluding its own start state.
///
/// A node reachable at two distinct times counts twice; the score
/// measures repeated temporal access, not distinct nodes.
#[tracing::instrument(skip(graph))]
pub fn temporal_centrality(graph: &EventGraph, t: Time) -> Vec<CentralityScore> {
    graph
        .nodes()
        .iter()
        .map(|node| CentralityScore {
            node: node.clone(),
            score: temporal_bfs(graph, node, t).len().saturating_sub(1),
        })
        .collect()
}

/// Whether `dst` appears, at any time, in the temporal BFS from `src`
/// departing no earlier than `t`
pub fn is_temporally_connected(graph: &EventGraph, src: &str, dst: &str, t: Time) -> bool {
    temporal_bfs(graph, src, t)
        .iter()
        .any(|state| state.node == dst)
}
