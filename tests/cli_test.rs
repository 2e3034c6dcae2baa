//! End-to-end tests for the `literate-rs` binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const SOURCE: &str = "#' # @__NAME__\nx = 1\n#nb #' Notebook only.\n";

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = temp_dir.path().join("demo.jl");
    std::fs::write(&input, SOURCE).expect("write input");
    (temp_dir, input)
}

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("literate-rs").expect("binary");
    cmd.env_remove("LITERATE_JUPYTER")
        .env_remove("LITERATE_LANGUAGE_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_script_command() {
    let (temp_dir, input) = setup();
    let out = temp_dir.path().join("out");
    std::fs::create_dir(&out).expect("out dir");

    bin()
        .arg("script")
        .arg(&input)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote script"));

    assert_eq!(
        std::fs::read_to_string(out.join("demo.jl")).expect("read"),
        "x = 1\n\n"
    );
}

#[test]
fn test_markdown_command_with_name() {
    let (temp_dir, input) = setup();

    bin()
        .args(["md", "--name", "intro"])
        .arg(&input)
        .arg(temp_dir.path())
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("intro.md")).expect("read"),
        "# intro\n\n```@example intro\nx = 1\n```\n\n"
    );
}

#[test]
fn test_notebook_command_json() {
    let (temp_dir, input) = setup();

    let output = bin()
        .args(["--format", "json", "notebook"])
        .arg(&input)
        .arg(temp_dir.path())
        .env("LITERATE_LANGUAGE_VERSION", "1.11.0")
        .output()
        .expect("run");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["target"], "notebook");
    assert_eq!(summary["prose_chunks"], 2);
    assert_eq!(summary["code_chunks"], 1);
    assert_eq!(summary["executed"], false);

    let nb: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("demo.ipynb")).expect("read"),
    )
    .expect("notebook json");
    assert_eq!(nb["metadata"]["language_info"]["version"], "1.11.0");
    assert_eq!(nb["cells"][2]["source"], serde_json::json!(["Notebook only."]));
}

#[test]
fn test_notebook_execute_missing_program() {
    let (temp_dir, input) = setup();

    bin()
        .args(["nb", "--execute"])
        .arg(&input)
        .arg(temp_dir.path())
        .env("LITERATE_JUPYTER", temp_dir.path().join("no-such-jupyter"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: execution error"));

    assert!(temp_dir.path().join("demo.ipynb").exists());
}

#[test]
fn test_missing_outdir() {
    let (temp_dir, input) = setup();

    bin()
        .arg("script")
        .arg(&input)
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_missing_outdir_json() {
    let (temp_dir, input) = setup();

    bin()
        .args(["--format", "json", "script"])
        .arg(&input)
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}

#[test]
fn test_chunks_command() {
    let (_temp, input) = setup();

    bin()
        .args(["chunks", "-t", "nb"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 chunks (notebook):"))
        .stdout(predicate::str::contains("# demo"));
}

#[test]
fn test_chunks_unknown_target() {
    let (_temp, input) = setup();

    bin()
        .args(["chunks", "--target", "pdf"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown target: pdf"));
}
