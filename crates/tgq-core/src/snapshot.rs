//! Graph snapshot (de)serialization
//!
//! A snapshot is the structured, order-preserving rendering of a graph:
//! ordered node list, ordered edge list with activation data, and (for
//! the discrete-event model) the recorded maximum instant. Round-trips
//! are lossless, so snapshots double as the on-disk interchange format
//! for the CLI.

use crate::activation::Time;
use crate::error::{Result, TgqError};
use crate::graph::event::EventGraph;
use crate::graph::interval::IntervalGraph;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of a discrete-event edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEdgeRecord {
    pub src: String,
    pub dst: String,
    pub times: Vec<Time>,
}

/// Serialized form of an [`EventGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<EventEdgeRecord>,
    pub max_time: Time,
}

impl EventSnapshot {
    pub fn from_graph(graph: &EventGraph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EventEdgeRecord {
                    src: e.src.clone(),
                    dst: e.dst.clone(),
                    times: e.times.as_slice().to_vec(),
                })
                .collect(),
            max_time: graph.max_time(),
        }
    }

    /// Rebuild the graph, validating every record
    pub fn into_graph(self) -> Result<EventGraph> {
        let mut graph = EventGraph::new();
        for node in &self.nodes {
            if !graph.add_node(node.clone()) {
                return Err(TgqError::invalid_graph(format!(
                    "duplicate or over-capacity node: {}",
                    node
                )));
            }
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if !graph.add_edge(&edge.src, &edge.dst, &edge.times) {
                return Err(TgqError::invalid_graph(format!(
                    "edge {} ({} -> {}) is malformed or references an unknown node",
                    i, edge.src, edge.dst
                )));
            }
        }
        Ok(graph)
    }
}

/// Serialized form of an interval edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalEdgeRecord {
    pub src: u32,
    pub dst: u32,
    pub weight: u64,
    pub start: Time,
    pub end: Time,
}

/// Serialized form of an [`IntervalGraph`].
///
/// The edge list is the materialized directed list: the undirected
/// convenience expands into mirror edges at add time, so each record
/// imports as a single directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSnapshot {
    pub nodes: u32,
    pub edges: Vec<IntervalEdgeRecord>,
}

impl IntervalSnapshot {
    pub fn from_graph(graph: &IntervalGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph
                .edges()
                .iter()
                .map(|e| IntervalEdgeRecord {
                    src: e.src,
                    dst: e.dst,
                    weight: e.weight(),
                    start: e.active.start,
                    end: e.active.end,
                })
                .collect(),
        }
    }

    /// Rebuild the graph, validating every record
    pub fn into_graph(self) -> Result<IntervalGraph> {
        let mut graph = IntervalGraph::new();
        graph.init(self.nodes);
        for (i, edge) in self.edges.iter().enumerate() {
            if !graph.add_directed_edge(edge.src, edge.dst, edge.weight, edge.start, edge.end) {
                return Err(TgqError::invalid_graph(format!(
                    "edge {} ({} -> {}) is malformed or out of range",
                    i, edge.src, edge.dst
                )));
            }
        }
        Ok(graph)
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TgqError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load a discrete-event graph from a snapshot file
pub fn load_event(path: &Path) -> Result<EventGraph> {
    let raw = read_to_string(path)?;
    let snapshot: EventSnapshot = serde_json::from_str(&raw)
        .map_err(|e| TgqError::invalid_graph(format!("{}: {}", path.display(), e)))?;
    snapshot.into_graph()
}

/// Load an interval graph from a snapshot file
pub fn load_interval(path: &Path) -> Result<IntervalGraph> {
    let raw = read_to_string(path)?;
    let snapshot: IntervalSnapshot = serde_json::from_str(&raw)
        .map_err(|e| TgqError::invalid_graph(format!("{}: {}", path.display(), e)))?;
    snapshot.into_graph()
}
