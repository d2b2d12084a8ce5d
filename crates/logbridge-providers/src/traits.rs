use crate::Result;
use std::path::{Path, PathBuf};

/// Provider log discovery
///
/// Responsibilities:
/// - Decide which files under a storage root are primary session logs
/// - Enumerate them, most recently modified first
pub trait LogDiscovery: Send + Sync {
    /// Unique provider ID (e.g., "claude_code")
    fn id(&self) -> &'static str;

    /// Check if a file is a primary session log of this provider
    fn accepts(&self, path: &Path) -> bool;

    /// List primary session logs under `log_root`, newest first.
    /// A missing root yields an empty list.
    fn discover(&self, log_root: &Path) -> Result<Vec<PathBuf>>;
}
