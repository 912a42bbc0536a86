use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn tgq() -> Command {
    cargo_bin_cmd!("tgq")
}

/// Write a small discrete-event snapshot: A -> B [2,5], B -> C [3,6],
/// A -> D [1]
#[allow(dead_code)]
pub fn write_event_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("event.json");
    let snapshot = serde_json::json!({
        "nodes": ["A", "B", "C", "D"],
        "edges": [
            { "src": "A", "dst": "B", "times": [2, 5] },
            { "src": "B", "dst": "C", "times": [3, 6] },
            { "src": "A", "dst": "D", "times": [1] },
        ],
        "max_time": 6,
    });
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();
    path
}

/// Write an interval snapshot with a cheap detour 1-2-3 and a heavy
/// direct edge 1-3, all active over [0, 5]
#[allow(dead_code)]
pub fn write_interval_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("interval.json");
    let undirected: [(u32, u32, u64); 3] = [(1, 2, 1), (2, 3, 1), (1, 3, 10)];
    let mut edges = Vec::new();
    for (u, v, w) in undirected {
        for (src, dst) in [(u, v), (v, u)] {
            edges.push(serde_json::json!({
                "src": src, "dst": dst, "weight": w, "start": 0, "end": 5,
            }));
        }
    }
    let snapshot = serde_json::json!({ "nodes": 5, "edges": edges });
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();
    path
}
