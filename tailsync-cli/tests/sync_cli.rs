//! End-to-end CLI tests for `tailsync sync` and `tailsync diff`.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

const GRAPH_JSON: &str = r#"{
    "nodes": {
        "app": { "name": "app", "root": "apps/app" },
        "lib": { "name": "lib", "root": "libs/lib" }
    },
    "dependencies": {
        "app": [ { "source": "app", "target": "lib" } ]
    }
}"#;

fn workspace() -> TempDir {
    let ws = TempDir::new().expect("tempdir");
    fs::create_dir_all(ws.path().join("apps/app/src")).expect("mkdir");
    fs::create_dir_all(ws.path().join("libs/lib")).expect("mkdir");
    fs::write(
        ws.path().join("apps/app/src/styles.css"),
        "@import 'tailwindcss';\n",
    )
    .expect("write css");
    fs::write(ws.path().join("project-graph.json"), GRAPH_JSON).expect("write graph");
    ws
}

fn tailsync() -> Command {
    Command::cargo_bin("tailsync").expect("binary")
}

// ---------------------------------------------------------------------------
// sync
// ---------------------------------------------------------------------------

#[test]
fn sync_writes_managed_block() {
    let ws = workspace();

    tailsync()
        .args(["sync", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app"));

    let css = fs::read_to_string(ws.path().join("apps/app/src/styles.css")).expect("read");
    assert!(css.contains("/* tailsync:start */"));
    assert!(css.contains("@source \"../../../libs/lib\";"));
}

#[test]
fn second_sync_reports_up_to_date() {
    let ws = workspace();

    tailsync().args(["sync", "--root"]).arg(ws.path()).assert().success();
    tailsync()
        .args(["sync", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn dry_run_does_not_write() {
    let ws = workspace();

    tailsync()
        .args(["sync", "--dry-run", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run]"));

    let css = fs::read_to_string(ws.path().join("apps/app/src/styles.css")).expect("read");
    assert!(!css.contains("tailsync:start"));
}

#[test]
fn check_fails_when_out_of_sync_and_passes_after() {
    let ws = workspace();

    tailsync()
        .args(["sync", "--check", "--root"])
        .arg(ws.path())
        .assert()
        .failure();

    tailsync().args(["sync", "--root"]).arg(ws.path()).assert().success();

    tailsync()
        .args(["sync", "--check", "--root"])
        .arg(ws.path())
        .assert()
        .success();
}

#[test]
fn json_output_lists_updated_projects() {
    let ws = workspace();

    tailsync()
        .args(["sync", "--json", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"updated\""))
        .stdout(predicate::str::contains("\"app\""));
}

#[test]
fn missing_graph_is_a_fatal_error() {
    let ws = TempDir::new().expect("tempdir");

    tailsync()
        .args(["sync", "--root"])
        .arg(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("project graph"));
}

#[test]
fn extra_search_path_flag_is_honored() {
    let ws = TempDir::new().expect("tempdir");
    fs::create_dir_all(ws.path().join("apps/app/theme")).expect("mkdir");
    fs::create_dir_all(ws.path().join("libs/lib")).expect("mkdir");
    fs::write(
        ws.path().join("apps/app/theme/app.css"),
        "@import 'tailwindcss';\n",
    )
    .expect("write css");
    fs::write(ws.path().join("project-graph.json"), GRAPH_JSON).expect("write graph");

    tailsync()
        .args(["sync", "--path", "theme/app.css", "--root"])
        .arg(ws.path())
        .assert()
        .success();

    let css = fs::read_to_string(ws.path().join("apps/app/theme/app.css")).expect("read");
    assert!(css.contains("@source \"../../../libs/lib\";"));
}

// ---------------------------------------------------------------------------
// diff
// ---------------------------------------------------------------------------

#[test]
fn diff_prints_unified_diff_without_writing() {
    let ws = workspace();

    tailsync()
        .args(["diff", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--- a/apps/app/src/styles.css"))
        .stdout(predicate::str::contains("+@source \"../../../libs/lib\";"));

    let css = fs::read_to_string(ws.path().join("apps/app/src/styles.css")).expect("read");
    assert!(!css.contains("tailsync:start"));
}

#[test]
fn diff_after_sync_is_clean() {
    let ws = workspace();

    tailsync().args(["sync", "--root"]).arg(ws.path()).assert().success();
    tailsync()
        .args(["diff", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}
