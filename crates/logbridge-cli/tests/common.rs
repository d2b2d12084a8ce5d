//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_SESSION_ID: &str = "7d2c9a40-5b1e-4f7a-9c33-2e8f1a6b0d11";

pub struct TestFixture {
    temp_dir: TempDir,
    log_root: PathBuf,
    output_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_root = temp_dir.path().join(".claude/projects");
        let output_dir = temp_dir.path().join("out");

        fs::create_dir_all(&log_root).expect("Failed to create log dir");

        Self {
            temp_dir,
            log_root,
            output_dir,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn log_root(&self) -> &PathBuf {
        &self.log_root
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Command running inside the fixture, isolated from the caller's environment
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("logbridge").expect("Failed to find binary");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("LOGBRIDGE_CONFIG")
            .env_remove("LOGBRIDGE_LOG_ROOT");
        cmd
    }

    /// `logbridge convert` against the fixture's log root and output dir
    pub fn convert(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("convert")
            .arg("--log-root")
            .arg(&self.log_root)
            .arg("--output-dir")
            .arg(&self.output_dir);
        cmd
    }

    /// Write a session log under `<log_root>/<project>/<name>` with the given mtime
    pub fn write_log(&self, project: &str, name: &str, content: &str, mtime_secs: i64) -> PathBuf {
        let path = self.log_root.join(project).join(name);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create project dir");
        fs::write(&path, content).expect("Failed to write log");
        set_file_mtime(&path, FileTime::from_unix_time(mtime_secs, 0)).expect("Failed to set mtime");
        path
    }

    pub fn copy_sample_log(&self, project: &str, name: &str, mtime_secs: i64) -> PathBuf {
        self.write_log(project, name, &sample_session(), mtime_secs)
    }

    /// Converted documents in the output directory, sorted by name
    pub fn outputs(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.output_dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        files.sort();
        files
    }
}

pub fn sample_session() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("logbridge-providers/tests/samples/claude_session.jsonl");
    fs::read_to_string(path).expect("Failed to read sample session")
}

/// A minimal session: one prompt and one text reply
pub fn single_turn_session(session_id: &str, prompt: &str) -> String {
    format!(
        concat!(
            r#"{{"type":"user","sessionId":"{id}","timestamp":"2025-10-13T08:00:00.000Z","message":{{"role":"user","content":"{prompt}"}}}}"#,
            "\n",
            r#"{{"type":"assistant","sessionId":"{id}","timestamp":"2025-10-13T08:00:02.000Z","message":{{"role":"assistant","content":[{{"type":"text","text":"ok"}}],"usage":{{"input_tokens":5,"output_tokens":1}}}}}}"#,
            "\n"
        ),
        id = session_id,
        prompt = prompt
    )
}
