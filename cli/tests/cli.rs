use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn biolint_cmd() -> Command {
    Command::cargo_bin("biolint").unwrap()
}

fn write_bio(root: &Path, id: &str, body: &str) {
    let content = format!(
        "{}\nname: Test User\nID: {id}\ninfo:\n  - employer: Test Corp\n  - slack: '@{id}'\n---\n{body}",
        "-".repeat(61)
    );
    fs::write(root.join(format!("candidate-{id}.md")), content).unwrap();
}

fn write_election_yaml(root: &Path) {
    fs::write(
        root.join("election.yaml"),
        "name: Test Election\nshow_candidate_fields:\n  - employer\n  - slack\n",
    )
    .unwrap();
}

#[test]
fn test_help_flag() {
    biolint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("candidate bio"));
}

#[test]
fn test_version_flag() {
    biolint_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("biolint"));
}

#[test]
fn test_valid_election_passes() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    write_bio(dir.path(), "alice", "## About Me\nA bio.\n");
    write_bio(dir.path(), "bob", "## About Me\nAnother bio.\n");

    biolint_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All 2 candidate bio(s) validated successfully.",
        ));
}

#[test]
fn test_empty_election_fails() {
    let dir = TempDir::new().unwrap();

    biolint_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No candidate files found"));
}

#[test]
fn test_missing_config_warns_but_proceeds() {
    let dir = TempDir::new().unwrap();
    write_bio(dir.path(), "alice", "## About Me\n");

    biolint_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Could not load election.yaml"));
}

#[test]
fn test_id_mismatch_fails_with_summary() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    let content = format!(
        "{}\nname: Alice\nID: bob\ninfo:\n  - employer: Test Corp\n  - slack: '@alice'\n---\n## About Me\n",
        "-".repeat(61)
    );
    fs::write(dir.path().join("candidate-alice.md"), content).unwrap();

    biolint_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "filename username 'alice' does not match ID 'bob' in header",
        ))
        .stdout(predicate::str::contains("1 invalid candidate bio(s) detected."))
        .stdout(predicate::str::contains(
            "Bios must follow the nomination template and filename format.",
        ));
}

#[test]
fn test_max_words_flag() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    write_bio(dir.path(), "alice", "## About Me\nfar too many words here\n");

    biolint_cmd()
        .args(["--max-words", "5", "--recommended-words", "4"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("has "))
        .stdout(predicate::str::contains(
            "Bios should be limited to around 4 words, excluding headers.",
        ));
}

#[test]
fn test_required_sections_flag() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    write_bio(dir.path(), "alice", "## About Me\nA bio.\n");

    biolint_cmd()
        .args(["--required-sections", "## About Me, ## Platform"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing required section: ## Platform"));

    biolint_cmd()
        .args(["--required-sections", "## About Me"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    write_bio(dir.path(), "alice", "## About Me\n");

    biolint_cmd()
        .args(["--json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"checked\": 1"))
        .stdout(predicate::str::contains("\"errors\": []"));
}

#[test]
fn test_json_report_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    let content = format!("{}\nname: Alice\n---\n## About Me\n", "-".repeat(61));
    fs::write(dir.path().join("candidate-alice.md"), content).unwrap();

    biolint_cmd()
        .args(["--json"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing 'ID' field in header"));
}

#[test]
fn test_output_has_no_escape_codes() {
    let dir = TempDir::new().unwrap();
    write_election_yaml(dir.path());
    write_bio(dir.path(), "alice", "## About Me\n");

    let output = biolint_cmd()
        .arg("--plain")
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert!(
        !stdout.contains('\x1b'),
        "Output contains ANSI escape codes: {}",
        stdout
    );
}
