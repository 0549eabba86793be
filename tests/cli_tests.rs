use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const HELP: &str = "tests/fixtures/help.txt";

fn cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("helptree").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = cmd().args(args).output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

fn json_output(args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout_of(args)).unwrap()
}

#[test]
fn query_prints_ancestors_of_match() {
    cmd()
        .args(["query", "Validate", "--file", HELP])
        .assert()
        .success()
        .stdout("helptree\n\tcheck\n\t\tValidate nesting and print the shape of a help file\n");
}

#[test]
fn query_includes_subtree_of_match() {
    cmd()
        .args(["query", "query", "-f", HELP])
        .assert()
        .success()
        .stdout(
            "helptree\n\tquery\n\t\tShow the sections of a help file that mention a keyword\n\t\tUsage: helptree query KEYWORD\n",
        );
}

#[test]
fn query_prints_shared_ancestor_once() {
    let out = stdout_of(&["query", "help file", "-f", HELP]);
    assert_eq!(out.matches("helptree\n").count(), 1);
    assert!(out.contains("\tquery\n"));
    assert!(out.contains("\tcheck\n"));
    assert!(!out.contains("\tinit\n"));
    assert!(!out.contains("Format"));
}

#[test]
fn query_second_root_section() {
    cmd()
        .args(["query", "tabs", "-f", HELP])
        .assert()
        .success()
        .stdout("Format\n\tDepth is the number of tabs on a line\n");
}

#[test]
fn empty_keyword_prints_whole_file() {
    let expected = fs::read_to_string(HELP).unwrap();
    cmd()
        .args(["query", "-f", HELP])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn keyword_not_found_exits_1() {
    cmd()
        .args(["query", "nonexistent-topic", "-f", HELP])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "the keyword entered could not be found",
        ));
}

#[test]
fn malformed_help_exits_2() {
    cmd()
        .args(["query", "Top", "-f", "tests/fixtures/malformed.txt"])
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("incorrectly formatted"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_help_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["query", "x"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("help file not found"));
}

#[test]
fn empty_help_file_is_uninitialized() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("help.txt"), "").unwrap();
    cmd()
        .args(["query", "x"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("help not initialized"));
}

#[test]
fn json_query_output_is_valid() {
    let parsed = json_output(&["query", "tabs", "-f", HELP, "--format", "json"]);
    assert_eq!(parsed["status"], "found");
    assert_eq!(parsed["keyword"], "tabs");
    assert_eq!(
        parsed["output"],
        "Format\n\tDepth is the number of tabs on a line\n"
    );
}

#[test]
fn json_query_not_found() {
    let output = cmd()
        .args(["query", "zzz", "-f", HELP, "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(parsed["status"], "keyword-not-found");
    assert!(parsed.get("output").is_none());
}

#[test]
fn start_marker_from_config() {
    cmd()
        .args([
            "query",
            "json",
            "-f",
            "tests/fixtures/sections.txt",
            "-c",
            "tests/fixtures/sections.toml",
        ])
        .assert()
        .success()
        .stdout("Usage\nhelptree query KEYWORD\n\tOptions\n--file FILE\n--format text|json\n");
}

#[test]
fn config_help_file_used_by_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".helptreerc.toml"),
        "help_file = \"manual.txt\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("manual.txt"), "Top\n\tkey\nOther\n").unwrap();

    cmd()
        .args(["query", "key"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Top\n\tkey\n");
}

#[test]
fn invalid_marker_config_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".helptreerc.toml"),
        "node_start_marker = \"**\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("help.txt"), "Top\n").unwrap();

    cmd()
        .args(["query", "Top"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("single character"));
}

#[test]
fn check_well_formed() {
    cmd()
        .args(["check", "-f", HELP])
        .assert()
        .success()
        .stdout(predicate::str::contains("well-formed"));
}

#[test]
fn check_json_outline() {
    let parsed = json_output(&["check", "-f", HELP, "--format", "json"]);
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["outline"]["nodes"], 11);
    assert_eq!(parsed["outline"]["max_depth"], 2);
    assert_eq!(parsed["outline"]["per_depth"], serde_json::json!([2, 5, 4]));
}

#[test]
fn check_malformed_exits_2() {
    let output = cmd()
        .args([
            "check",
            "-f",
            "tests/fixtures/malformed.txt",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(parsed["status"], "format-error");
}

#[test]
fn init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .helptreerc.toml"));

    assert!(dir.path().join(".helptreerc.toml").exists());
}

#[test]
fn init_fails_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".helptreerc.toml"), "").unwrap();
    cmd()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1);
}
