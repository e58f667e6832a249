use assert_cmd::Command;
use predicates::prelude::*;

fn deskpad() -> Command {
    Command::cargo_bin("deskpad").unwrap()
}

#[test]
fn test_help_names_the_dashboard() {
    deskpad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal productivity dashboard"))
        .stdout(predicate::str::contains("--section"));
}

#[test]
fn test_version_flag() {
    deskpad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deskpad"));
}

#[test]
fn test_completions_bash() {
    deskpad()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deskpad"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    deskpad()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
