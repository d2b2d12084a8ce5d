//! Project summary report.
//!
//! Gathers the dependency manifest, converted session logs, git history and
//! a sampled line count of the source tree, then renders them as markdown.
//! Every collector is best-effort: a failing one leaves its section empty.

pub mod error;
pub mod git;
pub mod metrics;
pub mod sessions;
pub mod tech_stack;
pub mod view;

pub use error::{Error, Result};
pub use git::{Challenge, GitRunner, GitStats, SystemGit, collect_challenges, collect_git_stats};
pub use metrics::{CodeMetrics, KeyFile};
pub use sessions::{AiUsage, ConvertedLogs, PromptRecord};
pub use tech_stack::TechStack;
pub use view::ReportView;

use std::path::Path;
use tracing::{info, warn};

/// Everything the markdown report shows
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub tech_stack: TechStack,
    pub prompts: Vec<PromptRecord>,
    /// `None` when git is unavailable or the project is not a repository
    pub git_stats: Option<GitStats>,
    pub challenges: Vec<Challenge>,
    pub ai_usage: AiUsage,
    pub code_metrics: CodeMetrics,
}

impl ReportData {
    pub fn collect(project_root: &Path, logs_dir: &Path, git: &dyn GitRunner) -> Self {
        let tech_stack = TechStack::from_project(project_root).unwrap_or_else(|err| {
            warn!(error = %err, "could not read package.json");
            TechStack::default()
        });

        let logs = ConvertedLogs::load(logs_dir).unwrap_or_else(|err| {
            warn!(dir = %logs_dir.display(), error = %err, "could not read converted logs");
            ConvertedLogs::default()
        });
        info!(sessions = logs.sessions.len(), "loaded converted sessions");

        let git_stats = collect_git_stats(git)
            .inspect_err(|err| warn!(error = %err, "git statistics unavailable"))
            .ok();

        let challenges = collect_challenges(git).unwrap_or_else(|err| {
            warn!(error = %err, "git challenges unavailable");
            Vec::new()
        });

        Self {
            tech_stack,
            prompts: logs.prompts(),
            git_stats,
            challenges,
            ai_usage: logs.usage(),
            code_metrics: CodeMetrics::collect(project_root),
        }
    }

    pub fn render_markdown(&self, generated_at: impl Into<String>) -> String {
        ReportView {
            data: self,
            generated_at: generated_at.into(),
        }
        .to_string()
    }
}

/// Render `data` and write it to `output`, creating parent directories.
pub fn write_report(data: &ReportData, output: &Path) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let markdown = data.render_markdown(generated_at);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, markdown)?;
    Ok(())
}
