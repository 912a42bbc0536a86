//! CLI argument parsing for tgq
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json. Queries are grouped by the
//! activation model of the graph snapshot they run against.

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Tgq - temporal graph query CLI
#[derive(Parser, Debug)]
#[command(name = "tgq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in sample interval graph snapshot
    Sample,

    /// Generate a random interval graph snapshot
    Generate {
        /// Number of nodes
        #[arg(long, default_value_t = 10)]
        nodes: u32,

        /// Probability of an edge between each node pair
        #[arg(long, default_value_t = 0.3)]
        density: f64,

        /// Largest activation time
        #[arg(long, default_value_t = 10)]
        max_time: i64,

        /// RNG seed (same seed, same graph)
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Query a discrete-event graph snapshot
    #[command(subcommand)]
    Event(EventCommands),

    /// Query an interval graph snapshot
    #[command(subcommand)]
    Interval(IntervalCommands),
}

/// Arguments shared by discrete-model two-endpoint queries
#[derive(Args, Debug)]
pub struct EventPairArgs {
    /// Graph snapshot file
    pub graph: PathBuf,

    /// Start node
    #[arg(long)]
    pub from: String,

    /// Destination node
    #[arg(long)]
    pub to: String,

    /// Departure time
    #[arg(long)]
    pub at: i64,
}

#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// Show node/edge counts and the recorded maximum time
    Info {
        /// Graph snapshot file
        graph: PathBuf,

        /// Also report the slice active at this time
        #[arg(long)]
        at: Option<i64>,
    },

    /// List nodes and edges active at a time
    Snapshot {
        /// Graph snapshot file
        graph: PathBuf,

        /// Time to slice at
        #[arg(long)]
        at: i64,
    },

    /// Time-respecting breadth-first traversal
    Bfs {
        /// Graph snapshot file
        graph: PathBuf,

        /// Start node
        #[arg(long)]
        from: String,

        /// Departure time
        #[arg(long)]
        at: i64,
    },

    /// Earliest-arrival path between two nodes
    Path(EventPairArgs),

    /// Minimum-elapsed-time path between two nodes
    Dijkstra(EventPairArgs),

    /// Reachability score for every node
    Centrality {
        /// Graph snapshot file
        graph: PathBuf,

        /// Departure time
        #[arg(long)]
        at: i64,
    },

    /// Check whether one node can reach another
    Connected(EventPairArgs),

    /// In/out degree of a node at a time
    Degree {
        /// Graph snapshot file
        graph: PathBuf,

        /// Node to inspect
        #[arg(long)]
        node: String,

        /// Time to slice at
        #[arg(long)]
        at: i64,
    },
}

/// Arguments shared by interval-model two-endpoint queries
#[derive(Args, Debug)]
pub struct IntervalPairArgs {
    /// Graph snapshot file
    pub graph: PathBuf,

    /// Start node (1-based)
    #[arg(long)]
    pub from: u32,

    /// Target node (1-based)
    #[arg(long)]
    pub to: u32,

    /// Time slice to query at
    #[arg(long)]
    pub at: i64,
}

#[derive(Subcommand, Debug)]
pub enum IntervalCommands {
    /// Show node/edge counts
    Info {
        /// Graph snapshot file
        graph: PathBuf,
    },

    /// Breadth-first visitation order at a fixed time
    Bfs {
        /// Graph snapshot file
        graph: PathBuf,

        /// Start node (1-based)
        #[arg(long)]
        from: u32,

        /// Time slice to query at
        #[arg(long)]
        at: i64,
    },

    /// Depth-first visitation order at a fixed time
    Dfs {
        /// Graph snapshot file
        graph: PathBuf,

        /// Start node (1-based)
        #[arg(long)]
        from: u32,

        /// Time slice to query at
        #[arg(long)]
        at: i64,
    },

    /// Minimum-weight path at a fixed time
    Dijkstra(IntervalPairArgs),

    /// Heuristic-guided minimum-weight path at a fixed time
    Astar(IntervalPairArgs),
}
