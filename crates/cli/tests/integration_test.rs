//! End-to-end tests running the `putr_web` binary against a sample log.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

const SAMPLE_LOG: &str = "\
Loading data
=========================================
Stop Areas
=========================================
----------------------------------------
RELATION 1234567 (Hauptbahnhof)
ERR: stop_area has no platform
NOTE: members: 4
----------------------------------------
NODE: 89 (Marktplatz <alt>)
ERR: node is not tagged
  continuation of the error
=========================================
Analyze Ways
=========================================
----------------------------------------
WAY 4242
ERR: way has no nodes
";

fn putr_web() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("putr_web").unwrap();
    cmd
}

fn write_sample_log(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("sample_putr.err");
    fs::write(&path, SAMPLE_LOG).unwrap();
    path
}

#[test]
fn writes_index_html_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_sample_log(&dir);

    putr_web()
        .arg(&log)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<section id=\"stop_areas\">"));
    assert!(html.contains("<section id=\"ways\">"));
    assert!(html.contains(
        "relation <a href=\"https://www.openstreetmap.org/relation/1234567\">1234567</a> (Hauptbahnhof)"
    ));
    // Name from the log is escaped by the renderer.
    assert!(html.contains("(Marktplatz &lt;alt&gt;)"));
    // The continuation line was space-joined onto its message, and the
    // "Analyze Ways" label line fed the still-open item as one more
    // continuation before opening the next category.
    assert!(html.contains(
        "<li>node is not tagged continuation of the error Analyze Ways</li>"
    ));
}

#[test]
fn json_output_exposes_the_full_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_sample_log(&dir);

    let output = putr_web()
        .arg(&log)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    let categories = report["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);

    assert_eq!(categories[0]["kind"], "stop_areas");
    assert_eq!(categories[0]["name"], "Stop Areas");
    let items = categories[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "1234567");
    assert_eq!(items[0]["kind"], "relation");
    assert_eq!(items[0]["name"], "Hauptbahnhof");
    assert_eq!(items[0]["errors"][0], "stop_area has no platform");
    assert_eq!(items[0]["notes"][0], "members: 4");
    // The category label line is absorbed as a continuation of the open
    // item before it opens the next category.
    assert_eq!(
        items[1]["errors"][0],
        "node is not tagged continuation of the error Analyze Ways"
    );

    assert_eq!(categories[1]["kind"], "ways");
    let way = &categories[1]["items"][0];
    assert_eq!(way["id"], "4242");
    assert_eq!(way["kind"], "way");
    assert_eq!(way["name"], "");

    assert!(!report["timestamp"].as_str().unwrap().is_empty());
}

#[test]
fn missing_log_file_fails_with_io_error() {
    putr_web()
        .arg("no/such/file.err")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read log file"));
}

#[test]
fn version_flag_works() {
    putr_web()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("putr_web"));
}
