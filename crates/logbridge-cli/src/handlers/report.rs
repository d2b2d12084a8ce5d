use crate::views::console::Console;
use anyhow::{Context, Result};
use logbridge_report::{ReportData, SystemGit, write_report};
use std::path::PathBuf;

const DEFAULT_REPORT_FILE: &str = "reflection-data.md";
const CONVERTED_LOGS_DIR: &str = ".logging/requests";

pub struct ReportRequest {
    pub project_root: PathBuf,
    pub logs_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn handle(request: ReportRequest) -> Result<()> {
    let console = Console::detect();
    let root = request.project_root;
    let logs_dir = request
        .logs_dir
        .unwrap_or_else(|| root.join(CONVERTED_LOGS_DIR));
    let output = request
        .output
        .unwrap_or_else(|| root.join(DEFAULT_REPORT_FILE));

    println!("Collecting project data from {}", console.dim(root.display()));

    let git = SystemGit::new(root.clone());
    let data = ReportData::collect(&root, &logs_dir, &git);

    write_report(&data, &output)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    println!(
        "{}",
        console.success(format!("Report written to {}", output.display()))
    );
    println!(
        "   {} interactions, {} tokens, {} prompts quoted",
        data.ai_usage.total_prompts,
        data.ai_usage.total_tokens,
        data.prompts.len()
    );
    Ok(())
}
