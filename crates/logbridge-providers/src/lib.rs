// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Provider implementations
pub mod claude;

// Traits
pub use traits::LogDiscovery;

// Claude Code conversion pipeline
pub use claude::{
    ClaudeDiscovery, ConvertOptions, ConvertedSession, ParsedLog, convert_claude_file,
    default_log_root, parse_claude_log, reconstruct_interactions,
};

// Error types
pub use error::{Error, Result};
