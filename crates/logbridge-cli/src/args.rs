use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logbridge")]
#[command(about = "Convert Claude Code session logs into telemetry interactions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (defaults to $LOGBRIDGE_CONFIG, then ./logbridge.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Convert the most recent session logs into interaction documents")]
    Convert {
        /// Directory for converted documents [default: .logging/requests]
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Number of most recent sessions to convert [default: 10]
        #[arg(long)]
        limit: Option<usize>,

        /// Convert every session (ignores --limit)
        #[arg(long)]
        all: bool,

        /// Session log root [default: ~/.claude/projects]
        #[arg(long)]
        log_root: Option<PathBuf>,
    },

    #[command(about = "Write a markdown summary of the project and its AI usage")]
    Report {
        #[arg(long, default_value = ".")]
        project_root: PathBuf,

        /// Converted documents [default: <project-root>/.logging/requests]
        #[arg(long)]
        logs_dir: Option<PathBuf>,

        /// Report file [default: <project-root>/reflection-data.md]
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
