//! Top-level command dispatch

use crate::cli::{Cli, Commands};
use std::time::Instant;
use tgq_core::error::Result;

/// Execute the parsed command
pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Sample => super::generate::sample(),
        Commands::Generate {
            nodes,
            density,
            max_time,
            seed,
        } => super::generate::random(*nodes, *density, *max_time, *seed),
        Commands::Event(cmd) => super::event::execute(cli, cmd),
        Commands::Interval(cmd) => super::interval::execute(cli, cmd),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "dispatch");
    result
}
