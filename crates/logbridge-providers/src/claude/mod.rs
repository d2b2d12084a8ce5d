pub mod discovery;
pub mod io;
pub mod reconstruct;
pub mod schema;

use crate::Result;
use logbridge_types::Interaction;
use std::path::{Path, PathBuf};

pub use self::discovery::{AUXILIARY_LOG_PREFIX, ClaudeDiscovery, default_log_root};
pub use self::io::{ParsedLog, parse_claude_log};
pub use self::reconstruct::{ConvertOptions, reconstruct_interactions};
pub use self::schema::{ContentItem, EventKind, LogEvent, Message, MessageContent, Usage};

/// Result of converting one session log
#[derive(Debug, Clone)]
pub struct ConvertedSession {
    pub session_id: String,
    pub log_file: PathBuf,
    /// Number of parsed events
    pub event_count: usize,
    pub skipped_lines: usize,
    pub interactions: Vec<Interaction>,
}

/// Parse a Claude Code session log and rebuild its interactions
pub fn convert_claude_file(path: &Path, options: &ConvertOptions) -> Result<ConvertedSession> {
    let ParsedLog {
        session_id,
        events,
        log_file,
        skipped_lines,
    } = parse_claude_log(path)?;

    let event_count = events.len();
    let interactions = reconstruct_interactions(&session_id, events, options);

    Ok(ConvertedSession {
        session_id,
        log_file,
        event_count,
        skipped_lines,
        interactions,
    })
}
