//! Fixed-time traversals over the interval model
//!
//! At a single time slice `t` the active edges induce an ordinary static
//! subgraph; these are plain BFS/DFS over that snapshot, keyed by node.

use crate::activation::Time;
use crate::graph::interval::IntervalGraph;
use std::collections::VecDeque;

/// Breadth-first visitation order from `start` over the subgraph induced
/// at `t`. An out-of-range start yields an empty order; a start with no
/// active edges yields just the start itself.
#[tracing::instrument(skip(graph))]
pub fn bfs(graph: &IntervalGraph, start: u32, t: Time) -> Vec<u32> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count() as usize + 1];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start as usize] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (next, _) in graph.neighbors(node, t) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Depth-first visitation order from `start` over the subgraph induced
/// at `t`. Uses an explicit stack; neighbors are pushed in reverse
/// enumeration order so expansion matches enumeration order.
#[tracing::instrument(skip(graph))]
pub fn dfs(graph: &IntervalGraph, start: u32, t: Time) -> Vec<u32> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count() as usize + 1];
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if visited[node as usize] {
            continue;
        }
        visited[node as usize] = true;
        order.push(node);

        for (next, _) in graph.neighbors(node, t).into_iter().rev() {
            if !visited[next as usize] {
                stack.push(next);
            }
        }
    }

    order
}
