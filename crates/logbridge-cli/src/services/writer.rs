use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use logbridge_types::{Interaction, short_session_id};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `2025-10-12_09-15-02-5f0c2a7e.json`
///
/// Fails when the session id prefix would not stay a single path component.
pub fn output_file_name(session_id: &str, now: DateTime<Local>) -> Result<String> {
    let short_id = short_session_id(session_id);
    if short_id.contains(['/', '\\', '\0']) {
        bail!("Session id {:?} cannot be used in a file name", session_id);
    }

    Ok(format!(
        "{}-{}.json",
        now.format(FILE_TIMESTAMP_FORMAT),
        short_id
    ))
}

/// Write one session's interactions as a pretty JSON array.
/// The document is serialized before the file is created, and a failed
/// write removes the file again.
pub fn write_interactions(
    output_dir: &Path,
    session_id: &str,
    interactions: &[Interaction],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let file_name = output_file_name(session_id, Local::now())?;
    let json = serde_json::to_string_pretty(interactions)?;
    let path = output_dir.join(file_name);

    if let Err(err) = fs::write(&path, json) {
        let _ = fs::remove_file(&path);
        return Err(err).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(path)
}
