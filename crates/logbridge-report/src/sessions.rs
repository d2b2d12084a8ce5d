use crate::Result;
use logbridge_types::{Interaction, truncate};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

const PROMPTS_PER_SESSION: usize = 10;
const MAX_PROMPTS: usize = 20;
const PROMPT_PREVIEW_CHARS: usize = 500;

/// Converted session documents found in the logs directory
#[derive(Debug, Clone, Default)]
pub struct ConvertedLogs {
    pub sessions: Vec<Vec<Interaction>>,
    /// Files that could not be read or parsed, with the reason
    pub unreadable: Vec<(PathBuf, String)>,
}

/// One prompt excerpt for the report
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRecord {
    pub timestamp: String,
    pub prompt: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub duration_ms: u64,
}

/// Totals over every interaction of every converted session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiUsage {
    pub total_prompts: usize,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_tokens: u64,
    pub total_duration_minutes: f64,
    pub average_tokens_per_prompt: u64,
    pub models_used: Vec<String>,
}

impl ConvertedLogs {
    /// Load every `*.json` document in `dir`, in file-name order.
    /// A missing directory yields no sessions.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut logs = Self::default();
        if !dir.exists() {
            return Ok(logs);
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "json"))
            .collect();
        files.sort();

        for path in files {
            match read_session(&path) {
                Ok(interactions) => logs.sessions.push(interactions),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable converted log");
                    logs.unreadable.push((path, err.to_string()));
                }
            }
        }

        Ok(logs)
    }

    pub fn prompts(&self) -> Vec<PromptRecord> {
        self.sessions
            .iter()
            .flat_map(|session| session.iter().take(PROMPTS_PER_SESSION))
            .filter(|i| !i.request.request_text.is_empty())
            .map(|i| PromptRecord {
                timestamp: i.request.timestamp.clone(),
                prompt: truncate(
                    i.request.prompt_text().unwrap_or_default(),
                    PROMPT_PREVIEW_CHARS,
                ),
                model: i.request.model.clone(),
                input_tokens: i.response.input_token_count,
                output_tokens: i.response.output_token_count,
                duration_ms: i.response.duration_ms,
            })
            .take(MAX_PROMPTS)
            .collect()
    }

    pub fn usage(&self) -> AiUsage {
        let mut usage = AiUsage::default();
        let mut models = BTreeSet::new();
        let mut total_duration_ms = 0u64;

        for interaction in self.sessions.iter().flatten() {
            usage.total_prompts += 1;
            usage.total_input_tokens = usage
                .total_input_tokens
                .saturating_add(interaction.response.input_token_count);
            usage.total_output_tokens = usage
                .total_output_tokens
                .saturating_add(interaction.response.output_token_count);
            total_duration_ms = total_duration_ms.saturating_add(interaction.response.duration_ms);

            if !interaction.request.model.is_empty() {
                models.insert(interaction.request.model.clone());
            }
        }

        usage.total_tokens = usage
            .total_input_tokens
            .saturating_add(usage.total_output_tokens);
        usage.total_duration_minutes = (total_duration_ms as f64 / 60_000.0 * 10.0).round() / 10.0;
        usage.average_tokens_per_prompt =
            (usage.total_tokens as f64 / usage.total_prompts.max(1) as f64).round() as u64;
        usage.models_used = models.into_iter().collect();
        usage
    }
}

fn read_session(path: &Path) -> Result<Vec<Interaction>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
