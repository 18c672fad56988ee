//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use modnav::models::{FolderColor, ModuleNode};
use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::mpsc;
use std::thread;

/// Small forest used across tests:
///
/// ```text
/// a  Alpha
///   a1  Alpha One
///   a2  Alpha Two
///     a2x  Alpha Two X
/// b  Beta
/// ```
pub fn sample_forest() -> Vec<ModuleNode> {
    vec![
        ModuleNode::branch(
            "a",
            "Alpha",
            FolderColor::Yellow,
            vec![
                ModuleNode::leaf("a1", "Alpha One", FolderColor::Blue),
                ModuleNode::branch(
                    "a2",
                    "Alpha Two",
                    FolderColor::Yellow,
                    vec![ModuleNode::leaf("a2x", "Alpha Two X", FolderColor::Pink)],
                ),
            ],
        ),
        ModuleNode::leaf("b", "Beta", FolderColor::Pink),
    ]
}

/// `sample_forest` as a bare JSON array.
pub const SAMPLE_JSON: &str = r#"[
  {"id": "a", "label": "Alpha", "color": "yellow", "children": [
    {"id": "a1", "label": "Alpha One", "color": "blue"},
    {"id": "a2", "label": "Alpha Two", "color": "yellow", "children": [
      {"id": "a2x", "label": "Alpha Two X", "color": "pink"}
    ]}
  ]},
  {"id": "b", "label": "Beta", "color": "pink", "children": []}
]"#;

/// `sample_forest` as JSON5.
pub const SAMPLE_JSON5: &str = r#"{
  // wrapped form, unquoted keys, trailing commas
  modules: [
    {id: 'a', label: 'Alpha', color: 'yellow', children: [
      {id: 'a1', label: 'Alpha One', color: 'blue'},
      {id: 'a2', label: 'Alpha Two', color: 'yellow', children: [
        {id: 'a2x', label: 'Alpha Two X', color: 'pink'},
      ]},
    ]},
    {id: 'b', label: 'Beta', color: 'pink'},
  ],
}"#;

/// `sample_forest` as TOML.
pub const SAMPLE_TOML: &str = r#"
[[modules]]
id = "a"
label = "Alpha"
color = "yellow"

[[modules.children]]
id = "a1"
label = "Alpha One"
color = "blue"

[[modules.children]]
id = "a2"
label = "Alpha Two"
color = "yellow"

[[modules.children.children]]
id = "a2x"
label = "Alpha Two X"
color = "pink"

[[modules]]
id = "b"
label = "Beta"
color = "pink"
"#;

/// `sample_forest` as YAML.
pub const SAMPLE_YAML: &str = "modules:
  - id: a
    label: Alpha
    color: yellow
    children:
      - id: a1
        label: Alpha One
        color: blue
      - id: a2
        label: Alpha Two
        color: yellow
        children:
          - id: a2x
            label: Alpha Two X
            color: pink
  - id: b
    label: Beta
    color: pink
";

/// Forest with `dup` declared twice.
pub const DUPLICATE_JSON: &str = r#"[
  {"id": "dup", "label": "First", "color": "yellow", "children": [
    {"id": "dup", "label": "Second", "color": "blue"}
  ]},
  {"id": "c", "label": "Gamma", "color": "pink"}
]"#;

/// Writes `content` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Path to the modnav binary
pub fn modnav_bin() -> String {
    std::env::var("CARGO_BIN_EXE_modnav").unwrap_or_else(|_| "target/debug/modnav".to_string())
}

/// Command with an isolated config directory.
pub fn modnav_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(modnav_bin());
    cmd.env("MODNAV_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Two tasks, one completed.
pub const TASKS_JSON: &str = r#"[
  {"id": 1, "title": "Registrar cosecha", "description": "Lote norte", "is_completed": true,
   "created_at": "2024-03-01T08:30:00Z"},
  {"id": 2, "title": "Revisar guías", "description": null, "is_completed": false,
   "created_at": "2024-03-02T15:00:00Z"}
]"#;

/// Serves `GET /api/tasks` with a fixed status and JSON body.
///
/// The server runs on its own thread and runtime for the rest of the test
/// process; the blocking client under test must not run inside tokio.
/// Returns the full endpoint URL.
pub fn spawn_task_server(status: u16, body: &'static str) -> String {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind test server");
            let addr = listener.local_addr().expect("No local address");
            tx.send(addr).expect("Failed to report address");

            let status = StatusCode::from_u16(status).expect("Invalid status");
            let app = Router::new().route(
                "/api/tasks",
                get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
            );
            axum::serve(listener, app).await.expect("Test server failed");
        });
    });

    let addr = rx.recv().expect("Test server did not start");
    format!("http://{addr}/api/tasks")
}

/// URL of a local port with nothing listening on it.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}/api/tasks")
}
