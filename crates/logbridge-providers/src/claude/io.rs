use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::schema::LogEvent;

/// Events of one session log plus the resolved session id
#[derive(Debug, Clone)]
pub struct ParsedLog {
    pub session_id: String,
    pub events: Vec<LogEvent>,
    pub log_file: PathBuf,
    /// Non-blank lines that were not valid records
    pub skipped_lines: usize,
}

impl ParsedLog {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Parse a Claude Code JSONL file.
///
/// Lines are decoded one at a time, so a malformed line (bad JSON or a
/// record cut off mid-character) is dropped without affecting its
/// neighbours. An empty result is not an error.
pub fn parse_claude_log(path: &Path) -> Result<ParsedLog> {
    let bytes = std::fs::read(path)?;
    let (events, skipped_lines) = parse_events(&bytes, path);

    let session_id = events
        .iter()
        .find_map(|e| e.session_id.clone())
        .unwrap_or_else(|| file_stem(path));

    Ok(ParsedLog {
        session_id,
        events,
        log_file: path.to_path_buf(),
        skipped_lines,
    })
}

fn parse_events(bytes: &[u8], path: &Path) -> (Vec<LogEvent>, usize) {
    let mut events = Vec::new();
    let mut skipped = 0;

    for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<LogEvent>(line) {
            Ok(event) => events.push(event),
            Err(err) => {
                debug!(
                    file = %path.display(),
                    line = idx + 1,
                    error = %err,
                    "skipping malformed record"
                );
                skipped += 1;
            }
        }
    }

    (events, skipped)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
