//! Time-aware traversal and shortest-path algorithms

pub mod astar;
pub mod dijkstra;
pub mod fixed_time;
mod shared;
pub mod temporal_bfs;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use fixed_time::{bfs, dfs};
pub use temporal_bfs::{earliest_arrival, min_elapsed_path, temporal_bfs};
