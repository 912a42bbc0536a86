//! Time-respecting search over the discrete-event model
//!
//! All three searches explore `(node, time)` states: from `(u, tau)` an
//! edge out of `u` is taken at its earliest activation instant not before
//! `tau`, so time never decreases along a walk. The state space is bounded
//! by the edge count times the number of distinct instants in the graph,
//! which bounds both termination and memory for every query here.

use crate::activation::{Activation, Time};
use crate::graph::event::EventGraph;
use crate::graph::types::{ReachedState, TemporalPathResult};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

type State = (usize, Time);

/// Breadth-first exploration of `(node, time)` states from `start`
/// departing no earlier than `t0`.
///
/// Returns the states in dequeue order, first discovery per state. The
/// same node may appear at several times. An unknown start node yields
/// an empty result.
#[tracing::instrument(skip(graph))]
pub fn temporal_bfs(graph: &EventGraph, start: &str, t0: Time) -> Vec<ReachedState> {
    let Some(start_idx) = graph.node_id(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<State> = HashSet::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    let mut order = Vec::new();

    queue.push_back((start_idx, t0));

    while let Some((node, time)) = queue.pop_front() {
        if !visited.insert((node, time)) {
            continue;
        }
        order.push(ReachedState {
            node: graph.node_name(node).to_string(),
            time,
        });

        for &edge_idx in graph.outgoing(node) {
            let edge = &graph.edges()[edge_idx];
            if let Some(tr) = edge.times.transition(time) {
                let (_, dst) = graph.endpoints(edge_idx);
                queue.push_back((dst, tr.depart));
            }
        }
    }

    order
}

/// Earliest-arrival walk from `start` to `end` departing no earlier than
/// `t0`.
///
/// FIFO expansion over a non-decreasing time dimension dequeues the
/// destination at its minimum arrival time first, so the search stops at
/// the first dequeue of `end`.
#[tracing::instrument(skip(graph))]
pub fn earliest_arrival(
    graph: &EventGraph,
    start: &str,
    end: &str,
    t0: Time,
) -> TemporalPathResult {
    let (Some(start_idx), Some(end_idx)) = (graph.node_id(start), graph.node_id(end)) else {
        return TemporalPathResult::not_found();
    };

    let origin = (start_idx, t0);
    let mut visited: HashSet<State> = HashSet::new();
    let mut parents: HashMap<State, State> = HashMap::new();
    let mut queue: VecDeque<State> = VecDeque::new();

    queue.push_back(origin);

    while let Some((node, time)) = queue.pop_front() {
        if node == end_idx {
            let path = rebuild_path(graph, &parents, origin, (node, time));
            return TemporalPathResult::reached(path, time, t0);
        }
        if !visited.insert((node, time)) {
            continue;
        }

        for &edge_idx in graph.outgoing(node) {
            let edge = &graph.edges()[edge_idx];
            if let Some(tr) = edge.times.transition(time) {
                let (_, dst) = graph.endpoints(edge_idx);
                let state = (dst, tr.depart);
                parents.entry(state).or_insert((node, time));
                queue.push_back(state);
            }
        }
    }

    TemporalPathResult::not_found()
}

/// Priority-queue entry ordered by elapsed time, then departure time and
/// node index for determinism
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ElapsedEntry {
    elapsed: i64,
    time: Time,
    node: usize,
}

/// Minimum-elapsed-time walk from `start` to `end` departing no earlier
/// than `t0`.
///
/// Orders the frontier by elapsed time (`arrival - t0`) instead of
/// discovery order and revisits a `(node, time)` state only on a strict
/// improvement. Agrees with [`earliest_arrival`] on the arrival time for
/// every reachable query.
#[tracing::instrument(skip(graph))]
pub fn min_elapsed_path(
    graph: &EventGraph,
    start: &str,
    end: &str,
    t0: Time,
) -> TemporalPathResult {
    let (Some(start_idx), Some(end_idx)) = (graph.node_id(start), graph.node_id(end)) else {
        return TemporalPathResult::not_found();
    };

    let origin = (start_idx, t0);
    let mut best: HashMap<State, i64> = HashMap::new();
    let mut parents: HashMap<State, State> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<ElapsedEntry>> = BinaryHeap::new();

    best.insert(origin, 0);
    heap.push(Reverse(ElapsedEntry {
        elapsed: 0,
        time: t0,
        node: start_idx,
    }));

    while let Some(Reverse(current)) = heap.pop() {
        if current.node == end_idx {
            let path = rebuild_path(graph, &parents, origin, (current.node, current.time));
            return TemporalPathResult::reached(path, current.time, t0);
        }

        let key = (current.node, current.time);
        if best.get(&key).is_some_and(|&b| b < current.elapsed) {
            continue;
        }

        for &edge_idx in graph.outgoing(current.node) {
            let edge = &graph.edges()[edge_idx];
            if let Some(tr) = edge.times.transition(current.time) {
                let (_, dst) = graph.endpoints(edge_idx);
                let state = (dst, tr.depart);
                let elapsed = tr.depart - t0;
                if best.get(&state).map_or(true, |&b| b > elapsed) {
                    best.insert(state, elapsed);
                    parents.insert(state, key);
                    heap.push(Reverse(ElapsedEntry {
                        elapsed,
                        time: tr.depart,
                        node: dst,
                    }));
                }
            }
        }
    }

    TemporalPathResult::not_found()
}

/// Walk parent states from `last` back to `origin`, then reverse into a
/// node-name sequence
fn rebuild_path(
    graph: &EventGraph,
    parents: &HashMap<State, State>,
    origin: State,
    last: State,
) -> Vec<String> {
    let mut states = vec![last];
    let mut current = last;
    while current != origin {
        match parents.get(&current) {
            Some(&pred) => {
                states.push(pred);
                current = pred;
            }
            None => break,
        }
    }
    states.reverse();
    states
        .into_iter()
        .map(|(node, _)| graph.node_name(node).to_string())
        .collect()
}
