//! Heuristic-guided search over the interval model at a fixed time slice
//!
//! The heuristic is derived, not supplied: a reverse breadth-first sweep
//! from the target over the induced subgraph yields hop distances, and
//! each is multiplied by the minimum edge weight active at `t`. No path
//! reaches the target in fewer hops than the reverse sweep found, and no
//! hop costs less than the subgraph minimum, so the estimate never
//! overestimates. When nothing is active at `t` or the minimum weight is
//! zero the estimate degrades to zero and the search behaves like plain
//! Dijkstra.

use crate::activation::Time;
use crate::graph::algos::shared::{walk_parents, HeapEntry};
use crate::graph::interval::IntervalGraph;
use crate::graph::types::{PathResult, INFINITE_COST};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Admissible lower bound on remaining cost per node
struct Heuristic {
    /// Hop distance to the target over the reversed induced subgraph;
    /// `None` marks nodes that cannot reach the target at all.
    hops: Vec<Option<u64>>,
    min_weight: u64,
}

impl Heuristic {
    fn derive(graph: &IntervalGraph, target: u32, t: Time) -> Self {
        let n = graph.node_count() as usize;

        let active = graph.active_edges_at(t);
        let min_weight = active.iter().map(|e| e.weight()).min().unwrap_or(0);

        // Reverse adjacency over the induced subgraph
        let mut reversed: Vec<Vec<u32>> = vec![Vec::new(); n + 1];
        for edge in &active {
            reversed[edge.dst as usize].push(edge.src);
        }

        let mut hops: Vec<Option<u64>> = vec![None; n + 1];
        hops[target as usize] = Some(0);
        let mut queue = VecDeque::new();
        queue.push_back(target);
        while let Some(node) = queue.pop_front() {
            let next_hop = hops[node as usize].unwrap_or(0) + 1;
            for &pred in &reversed[node as usize] {
                if hops[pred as usize].is_none() {
                    hops[pred as usize] = Some(next_hop);
                    queue.push_back(pred);
                }
            }
        }

        Self { hops, min_weight }
    }

    /// Estimated remaining cost, or `None` when the target is unreachable
    /// from `node` and the search may skip it
    fn estimate(&self, node: u32) -> Option<u64> {
        self.hops[node as usize].map(|h| h * self.min_weight)
    }
}

/// Minimum-weight path from `start` to `target` over the subgraph induced
/// at `t`, guided by the derived heuristic.
///
/// The open set orders by `g + h`; a popped priority that no longer
/// matches the recomputed `g(u) + h(u)` is stale and skipped; neighbors
/// relax only on strict improvement of `g`. Path costs equal
/// [`super::dijkstra::dijkstra`]'s on every query.
#[tracing::instrument(skip(graph))]
pub fn astar(graph: &IntervalGraph, start: u32, target: u32, t: Time) -> PathResult {
    if !graph.contains(start) || !graph.contains(target) {
        return PathResult::not_found();
    }

    let heuristic = Heuristic::derive(graph, target, t);
    let Some(start_h) = heuristic.estimate(start) else {
        // the reverse sweep proved the target unreachable from start
        return PathResult::not_found();
    };

    let n = graph.node_count() as usize;
    let mut g_cost = vec![INFINITE_COST; n + 1];
    let mut parents: Vec<Option<u32>> = vec![None; n + 1];
    let mut open: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    g_cost[start as usize] = 0;
    open.push(Reverse(HeapEntry {
        cost: start_h,
        node: start,
    }));

    while let Some(Reverse(HeapEntry { cost, node })) = open.pop() {
        let current_g = g_cost[node as usize];
        let stale = match heuristic.estimate(node) {
            Some(h) => current_g == INFINITE_COST || cost != current_g + h,
            None => true,
        };
        if stale {
            continue;
        }
        if node == target {
            return PathResult::reached(walk_parents(&parents, start, target), current_g);
        }

        for (next, weight) in graph.neighbors(node, t) {
            let Some(next_h) = heuristic.estimate(next) else {
                continue;
            };
            let candidate = current_g + weight;
            if candidate < g_cost[next as usize] {
                g_cost[next as usize] = candidate;
                parents[next as usize] = Some(node);
                open.push(Reverse(HeapEntry {
                    cost: candidate + next_h,
                    node: next,
                }));
            }
        }
    }

    PathResult::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::dijkstra::dijkstra;
    use crate::generate::sample_graph;

    fn triangle() -> IntervalGraph {
        let mut g = IntervalGraph::new();
        g.init(5);
        g.add_edge(1, 2, 1, 0, 5);
        g.add_edge(2, 3, 1, 0, 5);
        g.add_edge(1, 3, 10, 0, 5);
        g
    }

    #[test]
    fn test_astar_prefers_cheap_detour() {
        let g = triangle();
        let result = astar(&g, 1, 3, 0);
        assert!(result.found);
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn test_astar_matches_dijkstra_on_sample_graph() {
        let g = sample_graph();
        for t in 0..=10 {
            for start in 1..=g.node_count() {
                for target in 1..=g.node_count() {
                    let a = astar(&g, start, target, t);
                    let d = dijkstra(&g, start, target, t);
                    assert_eq!(a.found, d.found, "({}, {}, t={})", start, target, t);
                    if a.found {
                        assert_eq!(a.cost, d.cost, "({}, {}, t={})", start, target, t);
                    }
                }
            }
        }
    }

    #[test]
    fn test_astar_start_equals_target() {
        let g = triangle();
        let result = astar(&g, 4, 4, 0);
        assert!(result.found);
        assert_eq!(result.path, vec![4]);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_astar_unreachable_target() {
        let g = triangle();
        assert!(!astar(&g, 1, 5, 0).found);
    }

    #[test]
    fn test_astar_no_active_edges() {
        let g = triangle();
        assert!(!astar(&g, 1, 3, 8).found);
    }

    #[test]
    fn test_heuristic_zero_min_weight_degrades() {
        let mut g = IntervalGraph::new();
        g.init(3);
        g.add_edge(1, 2, 0, 0, 5);
        g.add_edge(2, 3, 7, 0, 5);
        let h = Heuristic::derive(&g, 3, 0);
        assert_eq!(h.min_weight, 0);
        assert_eq!(h.estimate(1), Some(0));
        let result = astar(&g, 1, 3, 0);
        assert!(result.found);
        assert_eq!(result.cost, 7);
    }

    #[test]
    fn test_heuristic_hop_counts() {
        let g = triangle();
        let h = Heuristic::derive(&g, 3, 0);
        assert_eq!(h.min_weight, 1);
        assert_eq!(h.estimate(3), Some(0));
        assert_eq!(h.estimate(2), Some(1));
        assert_eq!(h.estimate(1), Some(1));
        assert_eq!(h.estimate(4), None);
    }
}
