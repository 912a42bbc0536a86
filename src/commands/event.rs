//! Discrete-event model commands

use crate::cli::{Cli, EventCommands, EventPairArgs, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tgq_core::error::Result;
use tgq_core::graph::{
    earliest_arrival, is_temporally_connected, min_elapsed_path, temporal_bfs,
    temporal_centrality, temporal_degree, EventGraph, TemporalPathResult,
};
use tgq_core::snapshot::{load_event, EventEdgeRecord};

pub fn execute(cli: &Cli, cmd: &EventCommands) -> Result<()> {
    match cmd {
        EventCommands::Info { graph, at } => info(cli, graph, *at),
        EventCommands::Snapshot { graph, at } => active_slice(cli, graph, *at),
        EventCommands::Bfs { graph, from, at } => bfs(cli, graph, from, *at),
        EventCommands::Path(args) => path(cli, args, false),
        EventCommands::Dijkstra(args) => path(cli, args, true),
        EventCommands::Centrality { graph, at } => centrality(cli, graph, *at),
        EventCommands::Connected(args) => connected(cli, args),
        EventCommands::Degree { graph, node, at } => degree(cli, graph, node, *at),
    }
}

fn info(cli: &Cli, path: &Path, at: Option<i64>) -> Result<()> {
    let graph = load_event(path)?;
    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "max_time": graph.max_time(),
            });
            if let Some(t) = at {
                value["active"] = serde_json::json!({
                    "at": t,
                    "nodes": graph.active_nodes_at(t).len(),
                    "edges": graph.active_edges_at(t).len(),
                });
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("Nodes: {}/{}", graph.node_count(), EventGraph::MAX_NODES);
            println!("Edges: {}", graph.edge_count());
            println!("Max Time: {}", graph.max_time());
            if let Some(t) = at {
                println!("Active Nodes at t={}: {}", t, graph.active_nodes_at(t).len());
                println!("Active Edges at t={}: {}", t, graph.active_edges_at(t).len());
                println!("Density: {:.6}", density(&graph));
            }
        }
    }
    Ok(())
}

fn density(graph: &EventGraph) -> f64 {
    let n = graph.node_count();
    if n > 1 {
        graph.edge_count() as f64 / (n * (n - 1)) as f64
    } else {
        0.0
    }
}

/// Active slice of a discrete-event graph
#[derive(Debug, Serialize)]
struct ActiveSlice {
    at: i64,
    nodes: Vec<String>,
    edges: Vec<EventEdgeRecord>,
}

fn active_slice(cli: &Cli, path: &Path, at: i64) -> Result<()> {
    let graph = load_event(path)?;
    let slice = ActiveSlice {
        at,
        nodes: graph
            .active_nodes_at(at)
            .into_iter()
            .map(str::to_string)
            .collect(),
        edges: graph
            .active_edges_at(at)
            .into_iter()
            .map(|e| EventEdgeRecord {
                src: e.src.clone(),
                dst: e.dst.clone(),
                times: e.times.as_slice().to_vec(),
            })
            .collect(),
    };
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&slice)?),
        OutputFormat::Human => {
            println!("Active nodes at t={}: {}", at, slice.nodes.join(", "));
            println!("Active edges at t={}:", at);
            for edge in &slice.edges {
                println!("  {} -> {} {:?}", edge.src, edge.dst, edge.times);
            }
        }
    }
    Ok(())
}

fn bfs(cli: &Cli, path: &Path, from: &str, at: i64) -> Result<()> {
    let graph = load_event(path)?;
    let states = temporal_bfs(&graph, from, at);
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "from": from, "at": at, "states": states });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            let rendered: Vec<String> = states
                .iter()
                .map(|s| format!("{}@{}", s.node, s.time))
                .collect();
            println!("Temporal BFS from {} at t={}: {}", from, at, rendered.join(" -> "));
        }
    }
    Ok(())
}

fn path(cli: &Cli, args: &EventPairArgs, min_elapsed: bool) -> Result<()> {
    let graph = load_event(&args.graph)?;
    let result = if min_elapsed {
        min_elapsed_path(&graph, &args.from, &args.to, args.at)
    } else {
        earliest_arrival(&graph, &args.from, &args.to, args.at)
    };
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": args.from, "to": args.to, "at": args.at, "result": result,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => print_temporal_path(args, &result),
    }
    Ok(())
}

fn print_temporal_path(args: &EventPairArgs, result: &TemporalPathResult) {
    if !result.found {
        println!(
            "No path found at t={} from {} to {}",
            args.at, args.from, args.to
        );
        return;
    }
    println!(
        "Path (arrival={}, elapsed={}): {}",
        result.arrival,
        result.elapsed,
        result.path.join(" -> ")
    );
}

fn centrality(cli: &Cli, path: &Path, at: i64) -> Result<()> {
    let graph = load_event(path)?;
    let scores = temporal_centrality(&graph, at);
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "at": at, "scores": scores });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for score in &scores {
                println!("{}: {}", score.node, score.score);
            }
        }
    }
    Ok(())
}

fn connected(cli: &Cli, args: &EventPairArgs) -> Result<()> {
    let graph = load_event(&args.graph)?;
    let reachable = is_temporally_connected(&graph, &args.from, &args.to, args.at);
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": args.from, "to": args.to, "at": args.at, "connected": reachable,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if reachable {
                println!("{} can reach {} at t={}", args.from, args.to, args.at);
            } else {
                println!("{} cannot reach {} at t={}", args.from, args.to, args.at);
            }
        }
    }
    Ok(())
}

fn degree(cli: &Cli, path: &Path, node: &str, at: i64) -> Result<()> {
    let graph = load_event(path)?;
    let deg = temporal_degree(&graph, node, at);
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "node": node, "at": at, "degree": deg });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!(
                "{} at t={}: in={} out={}",
                node, at, deg.in_degree, deg.out_degree
            );
        }
    }
    Ok(())
}
