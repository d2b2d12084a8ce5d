mod common;
use common::{SAMPLE_SESSION_ID, TestFixture, single_turn_session};

use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn read_document(path: &std::path::Path) -> Vec<Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_convert_sample_session() {
    let fixture = TestFixture::new();
    fixture.copy_sample_log("-home-dev-app", &format!("{}.jsonl", SAMPLE_SESSION_ID), 1_700_000_000);

    fixture
        .convert()
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 logs"))
        .stdout(predicate::str::contains("2 interactions"))
        .stdout(predicate::str::contains("Done! Converted 1 sessions"));

    let outputs = fixture.outputs();
    assert_eq!(outputs.len(), 1);

    let name = outputs[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("-7d2c9a40.json"), "unexpected name: {}", name);

    let document = read_document(&outputs[0]);
    assert_eq!(document.len(), 2);
    assert_eq!(
        document[0]["request"]["prompt_id"],
        format!("{}########0", SAMPLE_SESSION_ID)
    );
    assert_eq!(document[0]["request"]["event.name"], "claude.api_request");
    assert_eq!(document[0]["response"]["status_code"], 200);
    assert_eq!(document[0]["response"]["auth_type"], "claude-api-key");
    assert!(document[0]["error"].is_null());
    assert_eq!(
        document[1]["request"]["prompt_id"],
        format!("{}########1", SAMPLE_SESSION_ID)
    );
}

#[test]
fn test_convert_respects_limit_and_recency() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "old.jsonl", &single_turn_session("aaaaaaaa-old", "old"), 1_700_000_000);
    fixture.write_log("-p", "new.jsonl", &single_turn_session("bbbbbbbb-new", "new"), 1_700_000_500);

    fixture
        .convert()
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 logs"))
        .stdout(predicate::str::contains("Processing 1 most recent sessions"))
        .stdout(predicate::str::contains("new.jsonl"))
        .stdout(predicate::str::contains("old.jsonl").not());

    let outputs = fixture.outputs();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].to_string_lossy().ends_with("-bbbbbbbb.json"));
}

#[test]
fn test_convert_all_ignores_limit() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "one.jsonl", &single_turn_session("11111111-a", "one"), 1_700_000_000);
    fixture.write_log("-q", "two.jsonl", &single_turn_session("22222222-b", "two"), 1_700_000_100);

    fixture
        .convert()
        .arg("--limit")
        .arg("1")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing all 2 sessions"))
        .stdout(predicate::str::contains("Done! Converted 2 sessions"));

    assert_eq!(fixture.outputs().len(), 2);
}

#[test]
fn test_convert_skips_empty_and_unanswered_sessions() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "empty.jsonl", "\n", 1_700_000_000);
    fixture.write_log(
        "-p",
        "unanswered.jsonl",
        r#"{"type":"user","sessionId":"cccccccc-x","message":{"role":"user","content":"hello?"}}"#,
        1_700_000_100,
    );

    fixture
        .convert()
        .assert()
        .success()
        .stdout(predicate::str::contains("no events, skipping"))
        .stdout(predicate::str::contains("no interactions, skipping"))
        .stdout(predicate::str::contains("Done! Converted 0 sessions"));

    assert!(fixture.outputs().is_empty());
}

#[test]
fn test_convert_ignores_auxiliary_logs() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "agent-1234.jsonl", &single_turn_session("dddddddd-agent", "sub"), 1_700_000_000);

    fixture
        .convert()
        .assert()
        .success()
        .stdout(predicate::str::contains("No Claude Code logs found"));

    assert!(fixture.outputs().is_empty());
}

#[test]
fn test_convert_missing_log_root() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("convert")
        .arg("--log-root")
        .arg(fixture.root().join("nowhere"))
        .arg("--output-dir")
        .arg(fixture.output_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("No Claude Code logs found"));

    assert!(!fixture.output_dir().exists());
}

#[test]
fn test_convert_continues_after_failed_session() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "good.jsonl", &single_turn_session("11111111-good", "fine"), 1_700_000_000);
    fixture.write_log("-p", "bad.jsonl", &single_turn_session("../../escape", "nope"), 1_700_000_100);

    fixture
        .convert()
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: bad.jsonl"))
        .stdout(predicate::str::contains("Error: Session id \"../../escape\" cannot be used in a file name"))
        .stdout(predicate::str::contains("Processing: good.jsonl"))
        .stdout(predicate::str::contains("Done! Converted 1 sessions"))
        .stdout(predicate::str::contains("1 sessions failed"));

    let outputs = fixture.outputs();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].to_string_lossy().ends_with("-11111111.json"));
    assert!(!fixture.root().join("escape").exists());
}

#[test]
fn test_convert_reads_config_file() {
    let fixture = TestFixture::new();
    fixture.write_log("-p", "one.jsonl", &single_turn_session("11111111-a", "one"), 1_700_000_000);
    fixture.write_log("-p", "two.jsonl", &single_turn_session("22222222-b", "two"), 1_700_000_100);

    fs::write(
        fixture.root().join("logbridge.toml"),
        format!(
            "log_root = {:?}\noutput_dir = \"converted\"\nlimit = 1\nmodel = \"claude-opus-4\"\n",
            fixture.log_root().display().to_string()
        ),
    )
    .unwrap();

    fixture.command().arg("convert").assert().success();

    let converted = fixture.root().join("converted");
    let outputs: Vec<_> = fs::read_dir(&converted).unwrap().collect();
    assert_eq!(outputs.len(), 1);

    let path = outputs.into_iter().next().unwrap().unwrap().path();
    let document = read_document(&path);
    assert_eq!(document[0]["request"]["model"], "claude-opus-4");
    assert_eq!(document[0]["response"]["model"], "claude-opus-4");
}

#[test]
fn test_invalid_config_fails() {
    let fixture = TestFixture::new();
    let config = fixture.root().join("broken.toml");
    fs::write(&config, "limit = [").unwrap();

    fixture
        .convert()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid config"));
}
