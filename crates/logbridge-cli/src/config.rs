use anyhow::{Context, Result};
use logbridge_types::{DEFAULT_MODEL_LABEL, expand_tilde};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LOGBRIDGE_CONFIG";
pub const LOG_ROOT_ENV: &str = "LOGBRIDGE_LOG_ROOT";
pub const LOCAL_CONFIG_FILE: &str = "logbridge.toml";

pub const DEFAULT_OUTPUT_DIR: &str = ".logging/requests";
pub const DEFAULT_LIMIT: usize = 10;

/// Optional settings read from `logbridge.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_root: Option<String>,
    pub output_dir: Option<String>,
    pub limit: Option<usize>,
    pub model: Option<String>,
}

/// Locate the config file based on priority:
/// 1. Explicit `--config` path
/// 2. LOGBRIDGE_CONFIG environment variable
/// 3. `./logbridge.toml` when present
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    local.exists().then_some(local)
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Session log root: flag, then LOGBRIDGE_LOG_ROOT, then config, then `~/.claude/projects`
    pub fn log_root(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path);
        }

        if let Ok(env_path) = std::env::var(LOG_ROOT_ENV)
            && !env_path.is_empty()
        {
            return Ok(expand_tilde(&env_path));
        }

        if let Some(path) = &self.log_root {
            return Ok(expand_tilde(path));
        }

        logbridge_providers::default_log_root()
            .context("Could not determine the session log root: no home directory found")
    }

    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn limit(&self, flag: Option<usize>) -> usize {
        flag.or(self.limit).unwrap_or(DEFAULT_LIMIT)
    }

    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_LABEL.to_string())
    }
}
