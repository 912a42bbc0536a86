use serde::Serialize;

pub use crate::activation::Time;

/// Sentinel distance larger than any feasible path sum
pub const INFINITE_COST: u64 = u64::MAX;

/// A `(node, time)` state discovered by temporal traversal.
///
/// The same node can legitimately appear at several times: "reachable at
/// time 5" and "reachable at time 9" are different facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachedState {
    pub node: String,
    pub time: Time,
}

/// Result of a discrete-model path query
#[derive(Debug, Clone, Serialize)]
pub struct TemporalPathResult {
    pub found: bool,
    /// Node sequence from start to destination (empty when not found)
    pub path: Vec<String>,
    /// Arrival time at the destination
    pub arrival: Time,
    /// Time elapsed since the departure reference
    pub elapsed: i64,
}

impl TemporalPathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            arrival: 0,
            elapsed: 0,
        }
    }

    pub fn reached(path: Vec<String>, arrival: Time, departed: Time) -> Self {
        Self {
            found: true,
            path,
            arrival,
            elapsed: arrival - departed,
        }
    }
}

/// Result of an interval-model weighted path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub found: bool,
    /// Node sequence from start to target (empty when not found)
    pub path: Vec<u32>,
    /// Total weight of the path
    pub cost: u64,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            cost: INFINITE_COST,
        }
    }

    pub fn reached(path: Vec<u32>, cost: u64) -> Self {
        Self {
            found: true,
            path,
            cost,
        }
    }
}

/// In/out degree of a node at a fixed time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemporalDegree {
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Per-node reachability score
#[derive(Debug, Clone, Serialize)]
pub struct CentralityScore {
    pub node: String,
    pub score: usize,
}
