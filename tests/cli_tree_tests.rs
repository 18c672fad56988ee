//! End-to-end tests for `modnav tree`.

use modnav::catalog::builtin_forest;
use modnav::cli::format_row;
use modnav::tree::TreeController;
use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_json(args: &[&str], config_dir: &TempDir) -> Value {
    let output = modnav_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

fn row_ids(json: &Value) -> Vec<String> {
    json["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_tree_text_matches_projection() {
    let config_dir = TempDir::new().unwrap();
    let output = modnav_command(&["tree"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let forest = builtin_forest();
    let tree = TreeController::initialize(&forest);
    let expected: Vec<String> = tree.rows(&forest).iter().map(format_row).collect();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: Vec<&str> = stdout.lines().take_while(|line| !line.is_empty()).collect();
    assert_eq!(printed, expected);
}

#[test]
fn test_tree_json_default_builtin() {
    let config_dir = TempDir::new().unwrap();
    let json = run_json(&["tree", "--json"], &config_dir);

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows[0]["id"], "registro");
    assert_eq!(rows[0]["depth"], 0);
    assert_eq!(rows[0]["toggle"], "expanded");
    assert_eq!(rows[1]["depth"], 1);
    assert!(json["selected"].is_null());
    assert!(json["panel"].is_null());
}

#[test]
fn test_tree_collapse_all_shows_roots_only() {
    let config_dir = TempDir::new().unwrap();
    let json = run_json(&["tree", "--collapse-all", "--json"], &config_dir);

    let forest = builtin_forest();
    let roots: Vec<String> = forest.iter().map(|n| n.id.clone()).collect();
    assert_eq!(row_ids(&json), roots);
    assert!(json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["toggle"] == "collapsed"));
}

#[test]
fn test_tree_toggle_with_forest_file() {
    let dir = TempDir::new().unwrap();
    let modules = write_file(dir.path(), "modules.json", SAMPLE_JSON);
    let modules = modules.to_str().unwrap();

    let json = run_json(&["tree", "--modules", modules, "--json"], &dir);
    assert_eq!(row_ids(&json), vec!["a", "a1", "a2", "b"]);

    let json = run_json(&["tree", "--modules", modules, "--toggle", "a", "--json"], &dir);
    assert_eq!(row_ids(&json), vec!["a", "b"]);

    let json = run_json(
        &["tree", "--modules", modules, "--toggle", "a2", "--json"],
        &dir,
    );
    assert_eq!(row_ids(&json), vec!["a", "a1", "a2", "a2x", "b"]);
    assert_eq!(json["rows"][3]["depth"], 2);
    assert_eq!(json["rows"][3]["toggle"], "none");
}

#[test]
fn test_tree_toggle_does_not_select() {
    let dir = TempDir::new().unwrap();
    let modules = write_file(dir.path(), "modules.json", SAMPLE_JSON);

    let json = run_json(
        &["tree", "--modules", modules.to_str().unwrap(), "--toggle", "a2", "--json"],
        &dir,
    );
    assert!(json["selected"].is_null());
    assert!(json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["selected"] == false));
}

#[test]
fn test_tree_select() {
    let dir = TempDir::new().unwrap();
    let modules = write_file(dir.path(), "modules.json", SAMPLE_JSON);
    let modules = modules.to_str().unwrap();

    let json = run_json(
        &["tree", "--modules", modules, "--select", "a1", "--json"],
        &dir,
    );
    assert_eq!(json["selected"], "a1");
    assert_eq!(json["panel"]["label"], "Alpha One");
    assert_eq!(json["rows"][1]["selected"], true);
    assert_eq!(json["rows"][0]["selected"], false);

    let output = modnav_command(&["tree", "--modules", modules, "--select", "a1"], dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Selected: Alpha One (a1)"));
}

#[test]
fn test_tree_select_unknown_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let modules = write_file(dir.path(), "modules.json", SAMPLE_JSON);

    let json = run_json(
        &["tree", "--modules", modules.to_str().unwrap(), "--select", "nonexistent", "--json"],
        &dir,
    );
    assert_eq!(json["selected"], "nonexistent");
    assert!(json["panel"].is_null());
}

#[test]
fn test_tree_expand_all_conflicts_with_collapse_all() {
    let dir = TempDir::new().unwrap();
    let output = modnav_command(&["tree", "--expand-all", "--collapse-all"], dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_tree_missing_forest_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = modnav_command(&["tree", "--modules", missing.to_str().unwrap()], dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load modules"));
}

#[test]
fn test_forest_formats_load_identically() {
    let dir = TempDir::new().unwrap();
    let files = [
        write_file(dir.path(), "modules.json", SAMPLE_JSON),
        write_file(dir.path(), "modules.json5", SAMPLE_JSON5),
        write_file(dir.path(), "modules.toml", SAMPLE_TOML),
        write_file(dir.path(), "modules.yaml", SAMPLE_YAML),
    ];

    let outputs: Vec<Value> = files
        .iter()
        .map(|path| {
            run_json(
                &["tree", "--modules", path.to_str().unwrap(), "--expand-all", "--json"],
                &dir,
            )
        })
        .collect();

    assert_eq!(row_ids(&outputs[0]), vec!["a", "a1", "a2", "a2x", "b"]);
    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }
}
