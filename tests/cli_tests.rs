//! Integration tests for the tgq CLI
//!
//! These tests run the tgq binary against snapshot fixtures and verify
//! output and exit codes.

mod common;

use common::{tgq, write_event_fixture, write_interval_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version, and exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    tgq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tgq"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("event"))
        .stdout(predicate::str::contains("interval"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    tgq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tgq"));
}

#[test]
fn test_subcommand_help() {
    tgq()
        .args(["event", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("discrete-event"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    tgq()
        .args(["--format", "invalid", "sample"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_code_2() {
    tgq().arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    tgq()
        .args(["--format", "json", "sample", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    tgq()
        .args(["event", "info"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_malformed_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    tgq()
        .args(["interval", "info"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph snapshot"));
}

// ============================================================================
// Discrete-event queries
// ============================================================================

#[test]
fn test_event_info() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 4/50"))
        .stdout(predicate::str::contains("Edges: 3"))
        .stdout(predicate::str::contains("Max Time: 6"));
}

#[test]
fn test_event_bfs_waits_for_activation() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    // departing at 3, the A->B edge activates at 5, not the earlier 2
    tgq()
        .args(["event", "bfs"])
        .arg(&graph)
        .args(["--from", "A", "--at", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B@5"))
        .stdout(predicate::str::contains("B@2").not());
}

#[test]
fn test_event_bfs_unknown_node_is_empty_not_error() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "bfs"])
        .arg(&graph)
        .args(["--from", "nope", "--at", "0"])
        .assert()
        .success();
}

#[test]
fn test_event_path_earliest_arrival() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "path"])
        .arg(&graph)
        .args(["--from", "A", "--to", "C", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path (arrival=3, elapsed=3): A -> B -> C"));
}

#[test]
fn test_event_path_not_found_is_success() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "path"])
        .arg(&graph)
        .args(["--from", "D", "--to", "A", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found at t=0 from D to A"));
}

#[test]
fn test_event_dijkstra_json_reports_elapsed() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["--format", "json", "event", "dijkstra"])
        .arg(&graph)
        .args(["--from", "A", "--to", "C", "--at", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"))
        .stdout(predicate::str::contains("\"arrival\": 3"))
        .stdout(predicate::str::contains("\"elapsed\": 1"));
}

#[test]
fn test_event_centrality_lists_every_node() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "centrality"])
        .arg(&graph)
        .args(["--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: 3"))
        .stdout(predicate::str::contains("C: 0"));
}

#[test]
fn test_event_connected() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "connected"])
        .arg(&graph)
        .args(["--from", "A", "--to", "C", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A can reach C at t=0"));
    tgq()
        .args(["event", "connected"])
        .arg(&graph)
        .args(["--from", "C", "--to", "A", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C cannot reach A at t=0"));
}

#[test]
fn test_event_degree() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "degree"])
        .arg(&graph)
        .args(["--node", "B", "--at", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B at t=2: in=1 out=0"));
}

#[test]
fn test_event_snapshot_slice() {
    let dir = tempdir().unwrap();
    let graph = write_event_fixture(dir.path());
    tgq()
        .args(["event", "snapshot"])
        .arg(&graph)
        .args(["--at", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active nodes at t=2: A, B"));
}

// ============================================================================
// Interval queries
// ============================================================================

#[test]
fn test_interval_info_counts_mirrored_edges() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 5"))
        .stdout(predicate::str::contains("Edges: 6"));
}

#[test]
fn test_interval_dijkstra_prefers_cheap_detour() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "dijkstra"])
        .arg(&graph)
        .args(["--from", "1", "--to", "3", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path (cost=2): 1 -> 2 -> 3"));
}

#[test]
fn test_interval_astar_matches_dijkstra() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "astar"])
        .arg(&graph)
        .args(["--from", "1", "--to", "3", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path (cost=2): 1 -> 2 -> 3"));
}

#[test]
fn test_interval_path_not_found_outside_activation() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "dijkstra"])
        .arg(&graph)
        .args(["--from", "1", "--to", "3", "--at", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found at t=9 from 1 to 3"));
}

#[test]
fn test_interval_bfs_zero_active_edges_returns_start_only() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "bfs"])
        .arg(&graph)
        .args(["--from", "1", "--at", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS at t=9: 1\n"));
}

#[test]
fn test_interval_dfs_order() {
    let dir = tempdir().unwrap();
    let graph = write_interval_fixture(dir.path());
    tgq()
        .args(["interval", "dfs"])
        .arg(&graph)
        .args(["--from", "1", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS at t=0: 1 -> 2 -> 3"));
}

// ============================================================================
// Generators
// ============================================================================

#[test]
fn test_sample_emits_snapshot() {
    tgq()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\": 10"));
}

#[test]
fn test_generate_same_seed_same_graph() {
    let a = tgq()
        .args(["generate", "--nodes", "12", "--seed", "42"])
        .assert()
        .success();
    let b = tgq()
        .args(["generate", "--nodes", "12", "--seed", "42"])
        .assert()
        .success();
    assert_eq!(a.get_output().stdout, b.get_output().stdout);
}

#[test]
fn test_generate_output_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.json");
    let output = tgq()
        .args(["generate", "--nodes", "8", "--seed", "7"])
        .assert()
        .success();
    std::fs::write(&path, &output.get_output().stdout).unwrap();
    tgq()
        .args(["interval", "info"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 8"));
}
