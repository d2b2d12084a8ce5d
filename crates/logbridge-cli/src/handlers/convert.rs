use crate::config::Config;
use crate::services::writer;
use crate::views::console::Console;
use crate::views::convert as view;
use anyhow::{Context, Result};
use logbridge_providers::{ClaudeDiscovery, ConvertOptions, LogDiscovery, convert_claude_file};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct ConvertRequest {
    pub output_dir: Option<PathBuf>,
    pub limit: Option<usize>,
    pub all: bool,
    pub log_root: Option<PathBuf>,
}

enum FileOutcome {
    Saved {
        path: PathBuf,
        interactions: usize,
        skipped_lines: usize,
    },
    NoEvents,
    NoInteractions,
}

pub fn handle(config: &Config, request: ConvertRequest) -> Result<()> {
    let console = Console::detect();
    let log_root = config.log_root(request.log_root)?;
    let output_dir = config.output_dir(request.output_dir);
    let options = ConvertOptions {
        model: config.model(),
    };

    view::print_searching(&console, &log_root);

    let discovery = ClaudeDiscovery;
    let mut logs = discovery
        .discover(&log_root)
        .with_context(|| format!("Failed to scan log root: {}", log_root.display()))?;

    if logs.is_empty() {
        view::print_none_found(&console);
        return Ok(());
    }

    let total = logs.len();
    if !request.all {
        logs.truncate(config.limit(request.limit));
    }
    view::print_found(&console, total, logs.len(), request.all);

    let mut converted = 0;
    let mut failed = 0;

    for log_file in &logs {
        let file_name = log_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        view::print_processing(&console, &file_name);

        match convert_one(log_file, &output_dir, &options) {
            Ok(FileOutcome::Saved {
                path,
                interactions,
                skipped_lines,
            }) => {
                converted += 1;
                view::print_saved(&console, &path, interactions, skipped_lines);
            }
            Ok(FileOutcome::NoEvents) => {
                info!(file = %log_file.display(), "no events");
                view::print_skipped(&console, "no events");
            }
            Ok(FileOutcome::NoInteractions) => {
                info!(file = %log_file.display(), "no interactions");
                view::print_skipped(&console, "no interactions");
            }
            Err(err) => {
                failed += 1;
                warn!(file = %log_file.display(), error = %format!("{:#}", err), "conversion failed");
                view::print_failed(&console, &err);
            }
        }
    }

    view::print_summary(&console, converted, failed, &output_dir);
    Ok(())
}

fn convert_one(log_file: &Path, output_dir: &Path, options: &ConvertOptions) -> Result<FileOutcome> {
    let session = convert_claude_file(log_file, options)
        .with_context(|| format!("Failed to read {}", log_file.display()))?;

    if session.event_count == 0 {
        return Ok(FileOutcome::NoEvents);
    }
    if session.interactions.is_empty() {
        return Ok(FileOutcome::NoInteractions);
    }

    let path = writer::write_interactions(output_dir, &session.session_id, &session.interactions)?;

    Ok(FileOutcome::Saved {
        path,
        interactions: session.interactions.len(),
        skipped_lines: session.skipped_lines,
    })
}
