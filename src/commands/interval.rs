//! Interval model commands

use crate::cli::{Cli, IntervalCommands, IntervalPairArgs, OutputFormat};
use std::path::Path;
use tgq_core::error::Result;
use tgq_core::graph::{astar, bfs, dfs, dijkstra, PathResult};
use tgq_core::snapshot::load_interval;

pub fn execute(cli: &Cli, cmd: &IntervalCommands) -> Result<()> {
    match cmd {
        IntervalCommands::Info { graph } => info(cli, graph),
        IntervalCommands::Bfs { graph, from, at } => traverse(cli, graph, *from, *at, false),
        IntervalCommands::Dfs { graph, from, at } => traverse(cli, graph, *from, *at, true),
        IntervalCommands::Dijkstra(args) => path(cli, args, false),
        IntervalCommands::Astar(args) => path(cli, args, true),
    }
}

fn info(cli: &Cli, path: &Path) -> Result<()> {
    let graph = load_interval(path)?;
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("Nodes: {}", graph.node_count());
            println!(
                "Edges: {} (each undirected edge stored twice internally)",
                graph.edge_count()
            );
        }
    }
    Ok(())
}

fn traverse(cli: &Cli, path: &Path, from: u32, at: i64, depth_first: bool) -> Result<()> {
    let graph = load_interval(path)?;
    let (label, order) = if depth_first {
        ("DFS", dfs(&graph, from, at))
    } else {
        ("BFS", bfs(&graph, from, at))
    };
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "from": from, "at": at, "order": order });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            let rendered: Vec<String> = order.iter().map(u32::to_string).collect();
            println!("{} at t={}: {}", label, at, rendered.join(" -> "));
        }
    }
    Ok(())
}

fn path(cli: &Cli, args: &IntervalPairArgs, heuristic: bool) -> Result<()> {
    let graph = load_interval(&args.graph)?;
    let result = if heuristic {
        astar(&graph, args.from, args.to, args.at)
    } else {
        dijkstra(&graph, args.from, args.to, args.at)
    };
    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": args.from, "to": args.to, "at": args.at, "result": result,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => print_path(args, &result),
    }
    Ok(())
}

fn print_path(args: &IntervalPairArgs, result: &PathResult) {
    if !result.found {
        println!(
            "No path found at t={} from {} to {}",
            args.at, args.from, args.to
        );
        return;
    }
    let rendered: Vec<String> = result.path.iter().map(u32::to_string).collect();
    println!("Path (cost={}): {}", result.cost, rendered.join(" -> "));
}
