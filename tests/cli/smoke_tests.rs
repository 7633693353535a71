use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::FeedWorkspace;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("xmlsift"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
        .arg("--format")
        .assert()
        .failure();
}

#[test]
fn unreadable_source_fails_without_output() {
    let ws = FeedWorkspace::new();
    let output = ws.output();

    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
        .current_dir(ws.path())
        .args(["--source", "missing.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("missing.xml"));

    assert!(!output.exists());
}

#[test]
fn non_xml_source_is_a_parse_failure() {
    let ws = FeedWorkspace::with_feed("<html><body>");

    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
        .current_dir(ws.path())
        .arg("--source")
        .arg(ws.feed())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse XML"));

    assert!(!ws.output().exists());
}
