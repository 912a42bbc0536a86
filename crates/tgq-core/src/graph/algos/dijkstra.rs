//! Weight-minimizing search over the interval model at a fixed time slice

use crate::activation::Time;
use crate::graph::algos::shared::{walk_parents, HeapEntry};
use crate::graph::interval::IntervalGraph;
use crate::graph::types::{PathResult, INFINITE_COST};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Minimum-weight path from `start` to `target` over the subgraph induced
/// at `t`.
///
/// Standard non-negative-weight Dijkstra: distances start at the infinity
/// sentinel, a popped entry staler than the recorded distance is skipped,
/// and neighbors relax only on strict improvement. Out-of-range endpoints
/// and unreachable targets report not-found.
#[tracing::instrument(skip(graph))]
pub fn dijkstra(graph: &IntervalGraph, start: u32, target: u32, t: Time) -> PathResult {
    if !graph.contains(start) || !graph.contains(target) {
        return PathResult::not_found();
    }

    let n = graph.node_count() as usize;
    let mut dist = vec![INFINITE_COST; n + 1];
    let mut parents: Vec<Option<u32>> = vec![None; n + 1];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist[start as usize] = 0;
    heap.push(Reverse(HeapEntry {
        cost: 0,
        node: start,
    }));

    while let Some(Reverse(HeapEntry { cost, node })) = heap.pop() {
        // Stale entry: a cheaper route to this node was already settled
        if cost > dist[node as usize] {
            continue;
        }
        if node == target {
            return PathResult::reached(walk_parents(&parents, start, target), cost);
        }

        for (next, weight) in graph.neighbors(node, t) {
            let candidate = cost + weight;
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                parents[next as usize] = Some(node);
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: next,
                }));
            }
        }
    }

    PathResult::not_found()
}
