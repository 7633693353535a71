// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{FeedWorkspace, LISTINGS_CSV};

fn xmlsift() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xmlsift"))
}

#[test]
fn default_pipeline_over_local_feed() {
    let ws = FeedWorkspace::new();

    xmlsift()
        .current_dir(ws.path())
        .arg("--source")
        .arg(ws.feed())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(ws.output()).unwrap(), LISTINGS_CSV);
}

#[test]
fn file_url_source_and_output_override() {
    let ws = FeedWorkspace::new();
    let out = ws.path().join("listings.csv");

    xmlsift()
        .arg("--source")
        .arg(format!("file://{}", ws.feed().display()))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), LISTINGS_CSV);
    assert!(!ws.output().exists());
}

#[test]
fn header_flag_prepends_column_paths() {
    let ws = FeedWorkspace::new();

    xmlsift()
        .current_dir(ws.path())
        .arg("--source")
        .arg(ws.feed())
        .arg("--header")
        .assert()
        .success();

    let written = fs::read_to_string(ws.output()).unwrap();
    let header = written.lines().next().unwrap();
    assert!(header.starts_with("ListingDetails/MlsId,ListingDetails/MlsName,"));
    assert!(header.ends_with("BasicDetails/Description"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn verbose_run_logs_summary() {
    let ws = FeedWorkspace::new();

    xmlsift()
        .current_dir(ws.path())
        .arg("--source")
        .arg(ws.feed())
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("5 record(s) fetched"))
        .stderr(predicate::str::contains("2 row(s) written"));
}

#[test]
fn config_file_drives_the_pipeline() {
    let ws = FeedWorkspace::new();
    let out = ws.path().join("prices.csv");
    let config = ws.create_file(
        "pipeline.json",
        &format!(
            r#"{{
                "source": {source:?},
                "output": {out:?},
                "records": "Listing",
                "sort": {{ "path": "ListingDetails/MlsId", "order": "desc" }},
                "columns": [
                    {{ "path": "ListingDetails/MlsId" }},
                    {{ "path": "RichDetails/Rooms", "aggregate": true }}
                ]
            }}"#,
            source = ws.feed().display().to_string(),
            out = out.display().to_string(),
        ),
    );

    xmlsift()
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "M-5,\r\nM-4,\r\nM-3,\r\nM-2,\r\nM-1,\"Kitchen,Den,Office\"\r\n"
    );
}

#[test]
fn missing_filter_field_aborts_before_writing() {
    let ws = FeedWorkspace::new();
    let config = ws.create_file(
        "pipeline.json",
        &format!(
            r#"{{
                "source": {source:?},
                "records": "Listing",
                "text_filter": {{ "path": "BasicDetails/Flavor", "contains": "x" }},
                "columns": [{{ "path": "ListingDetails/MlsId" }}]
            }}"#,
            source = ws.feed().display().to_string(),
        ),
    );

    xmlsift()
        .current_dir(ws.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("BasicDetails/Flavor"));

    assert!(!ws.output().exists());
}

#[test]
fn malformed_config_names_the_file() {
    let ws = FeedWorkspace::new();
    let config = ws.create_file("broken.json", "{ \"source\": ");

    xmlsift()
        .current_dir(ws.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}
