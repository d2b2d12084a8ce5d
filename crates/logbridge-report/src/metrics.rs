use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const CODE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];
const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx"];
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target"];
const SAMPLE_PER_EXTENSION: usize = 5;
const KEY_FILE_MIN_LINES: usize = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeMetrics {
    pub total_files: usize,
    pub typescript_files: usize,
    /// Lines across the sampled files only
    pub total_lines: usize,
    pub key_files: Vec<KeyFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub lines: usize,
}

impl CodeMetrics {
    /// Count source files and sample line counts from the first few of each kind
    pub fn collect(project_root: &Path) -> Self {
        let mut by_extension: Vec<Vec<PathBuf>> = vec![Vec::new(); CODE_EXTENSIONS.len()];

        for entry in WalkDir::new(project_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if let Some(idx) = CODE_EXTENSIONS.iter().position(|c| *c == ext) {
                by_extension[idx].push(entry.into_path());
            }
        }

        let mut metrics = Self::default();
        for (ext, files) in CODE_EXTENSIONS.iter().zip(&by_extension) {
            metrics.total_files += files.len();
            if TYPESCRIPT_EXTENSIONS.contains(ext) {
                metrics.typescript_files += files.len();
            }

            for file in files.iter().take(SAMPLE_PER_EXTENSION) {
                let Ok(content) = std::fs::read_to_string(file) else {
                    continue;
                };
                let lines = content.lines().count();
                metrics.total_lines += lines;

                if lines > KEY_FILE_MIN_LINES {
                    metrics.key_files.push(KeyFile {
                        path: file.strip_prefix(project_root).unwrap_or(file).to_path_buf(),
                        lines,
                    });
                }
            }
        }

        metrics
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
