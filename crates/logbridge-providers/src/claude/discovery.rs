use crate::traits::LogDiscovery;
use crate::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;
use walkdir::WalkDir;

/// Sub-agent transcripts live next to the main session logs under this prefix
pub const AUXILIARY_LOG_PREFIX: &str = "agent-";

/// Conventional storage root: `~/.claude/projects`
pub fn default_log_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".claude").join("projects"))
}

pub struct ClaudeDiscovery;

impl LogDiscovery for ClaudeDiscovery {
    fn id(&self) -> &'static str {
        "claude_code"
    }

    fn accepts(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        if path.extension().is_none_or(|e| e != "jsonl") {
            return false;
        }

        path.file_name()
            .is_some_and(|name| !name.to_string_lossy().starts_with(AUXILIARY_LOG_PREFIX))
    }

    fn discover(&self, log_root: &Path) -> Result<Vec<PathBuf>> {
        if !log_root.exists() {
            return Ok(Vec::new());
        }

        let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();

        // <root>/<project-dir>/<session>.jsonl
        for entry in WalkDir::new(log_root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if !self.accepts(path) {
                continue;
            }

            let modified = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            logs.push((modified, path.to_path_buf()));
        }

        // Stable sort keeps file-name order among equal mtimes
        logs.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(logs.into_iter().map(|(_, path)| path).collect())
    }
}
