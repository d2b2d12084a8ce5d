use std::fmt;

use crate::ReportData;

const MAX_LISTED_DEPENDENCIES: usize = 10;
const MAX_LISTED_PROMPTS: usize = 10;
const MAX_LISTED_COMMITS: usize = 10;
const MAX_LISTED_KEY_FILES: usize = 10;

/// Markdown rendering of a collected report
pub struct ReportView<'a> {
    pub data: &'a ReportData,
    pub generated_at: String,
}

impl<'a> ReportView<'a> {
    fn render_tech_stack(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = &self.data.tech_stack;

        writeln!(f, "## 1. Technology Stack\n")?;
        writeln!(f, "### Frontend Dependencies")?;
        for dep in stack.frontend.iter().take(MAX_LISTED_DEPENDENCIES) {
            writeln!(f, "- {}", dep)?;
        }

        writeln!(f, "\n### Backend Dependencies")?;
        for dep in stack.backend.iter().take(MAX_LISTED_DEPENDENCIES) {
            writeln!(f, "- {}", dep)?;
        }

        if !stack.dev_tools.is_empty() {
            writeln!(f, "\n### Dev Tools")?;
            for dep in &stack.dev_tools {
                writeln!(f, "- {}", dep)?;
            }
        }

        if !stack.scripts.is_empty() {
            writeln!(f, "\n### Scripts")?;
            for (name, cmd) in &stack.scripts {
                writeln!(f, "- `{}`: `{}`", name, cmd)?;
            }
        }
        Ok(())
    }

    fn render_ai_usage(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let usage = &self.data.ai_usage;

        writeln!(f, "\n\n## 2. AI Usage Statistics\n")?;
        writeln!(f, "- **Total prompts:** {}", usage.total_prompts)?;
        writeln!(f, "- **Total tokens:** {}", thousands(usage.total_tokens))?;
        writeln!(f, "  - Input: {}", thousands(usage.total_input_tokens))?;
        writeln!(f, "  - Output: {}", thousands(usage.total_output_tokens))?;
        writeln!(
            f,
            "- **Average tokens/prompt:** {}",
            usage.average_tokens_per_prompt
        )?;
        writeln!(
            f,
            "- **Total AI time:** {:.1} minutes",
            usage.total_duration_minutes
        )?;
        writeln!(f, "- **Models used:** {}", usage.models_used.join(", "))
    }

    fn render_prompts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\n## 3. Key AI Prompts (Top 10)\n")?;

        for (i, prompt) in self
            .data
            .prompts
            .iter()
            .take(MAX_LISTED_PROMPTS)
            .enumerate()
        {
            let time: String = if prompt.timestamp.is_empty() {
                "N/A".to_string()
            } else {
                prompt.timestamp.chars().take(19).collect()
            };

            writeln!(f, "### Prompt {}", i + 1)?;
            writeln!(f, "**Time:** {}\n", time)?;
            writeln!(f, "**Model:** {}\n", prompt.model)?;
            writeln!(
                f,
                "**Tokens:** {} → {}\n",
                prompt.input_tokens, prompt.output_tokens
            )?;
            writeln!(f, "**Content:**\n```\n{}\n```\n", prompt.prompt)?;
        }
        Ok(())
    }

    fn render_git(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\n## 4. Git Statistics\n")?;

        let Some(stats) = &self.data.git_stats else {
            writeln!(f, "- **Total commits:** N/A")?;
            writeln!(f, "- **Contributors:** N/A")?;
            writeln!(f, "- **Files changed (last 10 commits):** 0")?;
            return writeln!(f, "\n### Recent Commits");
        };

        writeln!(f, "- **Total commits:** {}", stats.total_commits)?;
        writeln!(f, "- **Contributors:** {}", stats.contributors.join(", "))?;
        writeln!(
            f,
            "- **Files changed (last 10 commits):** {}",
            stats.files_changed
        )?;

        writeln!(f, "\n### Recent Commits")?;
        for commit in stats.recent_commits.iter().take(MAX_LISTED_COMMITS) {
            writeln!(f, "- {}", commit)?;
        }
        Ok(())
    }

    fn render_challenges(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\n## 5. Technical Challenges (from git)\n")?;
        for challenge in &self.data.challenges {
            writeln!(f, "- **{}:** {}", challenge.commit, challenge.message)?;
        }
        Ok(())
    }

    fn render_code_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = &self.data.code_metrics;

        writeln!(f, "\n\n## 6. Code Metrics\n")?;
        writeln!(f, "- **Total code files:** {}", metrics.total_files)?;
        writeln!(f, "- **TypeScript files:** {}", metrics.typescript_files)?;
        writeln!(
            f,
            "- **Total lines of code (sampled):** {}",
            thousands(metrics.total_lines as u64)
        )?;

        writeln!(f, "\n### Key Files")?;
        for file in metrics.key_files.iter().take(MAX_LISTED_KEY_FILES) {
            writeln!(f, "- `{}` ({} lines)", file.path.display(), file.lines)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Reflection Report - Extracted Data\n")?;
        writeln!(f, "**Generated:** {}\n", self.generated_at)?;
        writeln!(f, "---\n")?;

        self.render_tech_stack(f)?;
        self.render_ai_usage(f)?;
        self.render_prompts(f)?;
        self.render_git(f)?;
        self.render_challenges(f)?;
        self.render_code_metrics(f)?;

        writeln!(f, "\n\n---\n")?;
        writeln!(f, "**Use this data to fill out your reflection report!**")
    }
}

/// 1234567 -> "1,234,567"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
