//! Edge activation descriptors
//!
//! An edge in a temporal graph is not permanently present: its activation
//! descriptor decides when it may be traversed. The two models share one
//! capability — "can this edge be taken departing at-or-after time `t`,
//! and if so at what time and cost" — expressed by the [`Activation`]
//! trait with a discrete-set and an interval implementation.

use serde::Serialize;

/// Integer time axis shared by both activation models
pub type Time = i64;

/// A concrete opportunity to traverse an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Departure time offered by the edge
    pub depart: Time,
    /// Weight paid for taking the edge at that time
    pub cost: u64,
}

/// The rule determining at which time(s) an edge may be traversed
pub trait Activation {
    /// Earliest transition the edge offers departing no earlier than
    /// `at_or_after`, or `None` if the edge offers no such transition.
    fn transition(&self, at_or_after: Time) -> Option<Transition>;

    /// Whether the edge can be taken at exactly `t`
    fn active_at(&self, t: Time) -> bool;
}

/// Discrete-event activation: an ascending set of traversal instants.
///
/// The edge carries no weight; traversal cost is purely time of arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscreteTimes(Vec<Time>);

impl DiscreteTimes {
    /// Build from an arbitrary timestamp list: duplicates removed,
    /// ascending. Returns `None` for an empty list.
    pub fn new(times: &[Time]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Some(Self(sorted))
    }

    /// The activation instants, ascending
    pub fn as_slice(&self) -> &[Time] {
        &self.0
    }

    /// Largest activation instant
    pub fn max(&self) -> Time {
        // invariant: the list is non-empty
        *self.0.last().unwrap_or(&Time::MIN)
    }
}

impl Activation for DiscreteTimes {
    fn transition(&self, at_or_after: Time) -> Option<Transition> {
        // Linear scan with early exit over the ascending list
        self.0
            .iter()
            .copied()
            .find(|&tau| tau >= at_or_after)
            .map(|depart| Transition { depart, cost: 0 })
    }

    fn active_at(&self, t: Time) -> bool {
        self.0.binary_search(&t).is_ok()
    }
}

/// Interval activation: a closed time range `[start, end]` plus the
/// non-negative weight paid whenever the edge is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Start time (inclusive)
    pub start: Time,
    /// End time (inclusive)
    pub end: Time,
    /// Traversal weight
    pub weight: u64,
}

impl Interval {
    /// Build a validated interval descriptor. Returns `None` when
    /// `start > end`.
    pub fn new(start: Time, end: Time, weight: u64) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end, weight })
    }
}

impl Activation for Interval {
    fn transition(&self, at_or_after: Time) -> Option<Transition> {
        // Weighted queries run against a fixed time slice and re-resolve
        // per visited time, so the edge only offers a departure at the
        // queried instant itself.
        self.active_at(at_or_after).then_some(Transition {
            depart: at_or_after,
            cost: self.weight,
        })
    }

    fn active_at(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }
}
