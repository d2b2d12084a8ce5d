use crate::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

static CHALLENGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fix|bug|error").unwrap());

const RECENT_COMMITS: &str = "-20";
const CHALLENGE_SCAN_DEPTH: &str = "-100";
const MAX_CHALLENGES: usize = 10;

/// Runs git subcommands and returns their stdout
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// `git` on PATH, executed inside `repo`
pub struct SystemGit {
    repo: PathBuf,
}

impl SystemGit {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()?;

        if !output.status.success() {
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitStats {
    pub total_commits: String,
    pub recent_commits: Vec<String>,
    pub contributors: Vec<String>,
    /// Files touched by the last 10 commits
    pub files_changed: usize,
}

/// A commit whose message mentions a fix, bug or error
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub commit: String,
    pub message: String,
}

pub fn collect_git_stats(git: &dyn GitRunner) -> Result<GitStats> {
    let total_commits = git.run(&["rev-list", "--count", "HEAD"])?.trim().to_string();
    let recent_commits = lines(&git.run(&["log", "--oneline", RECENT_COMMITS])?);

    let contributors: BTreeSet<String> = lines(&git.run(&["log", "--format=%an"])?)
        .into_iter()
        .collect();

    // Repositories with fewer than 11 commits have no HEAD~10
    let files_changed = git
        .run(&["diff", "--name-only", "HEAD~10..HEAD"])
        .map(|out| lines(&out).len())
        .unwrap_or(0);

    Ok(GitStats {
        total_commits,
        recent_commits,
        contributors: contributors.into_iter().collect(),
        files_changed,
    })
}

pub fn collect_challenges(git: &dyn GitRunner) -> Result<Vec<Challenge>> {
    let log = git.run(&["log", "--all", "--oneline", CHALLENGE_SCAN_DEPTH])?;

    Ok(lines(&log)
        .into_iter()
        .filter_map(|line| {
            let (commit, message) = line.split_once(' ')?;
            CHALLENGE_PATTERN.is_match(message).then(|| Challenge {
                commit: commit.to_string(),
                message: message.to_string(),
            })
        })
        .take(MAX_CHALLENGES)
        .collect())
}

fn lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Canned git output keyed by the joined argument list
    struct FakeGit(HashMap<String, String>);

    impl FakeGit {
        fn new(responses: &[(&str, &str)]) -> Self {
            Self(
                responses
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl GitRunner for FakeGit {
        fn run(&self, args: &[&str]) -> Result<String> {
            self.0
                .get(&args.join(" "))
                .cloned()
                .ok_or_else(|| Error::Git(format!("unexpected: {}", args.join(" "))))
        }
    }

    #[test]
    fn test_git_stats() {
        let git = FakeGit::new(&[
            ("rev-list --count HEAD", "42\n"),
            ("log --oneline -20", "abc123 Add map page\ndef456 Fix login\n"),
            ("log --format=%an", "Kari\nOla\nKari\n"),
            ("diff --name-only HEAD~10..HEAD", "src/a.ts\nsrc/b.ts\n\n"),
        ]);

        let stats = collect_git_stats(&git).unwrap();
        assert_eq!(stats.total_commits, "42");
        assert_eq!(stats.recent_commits, vec!["abc123 Add map page", "def456 Fix login"]);
        assert_eq!(stats.contributors, vec!["Kari", "Ola"]);
        assert_eq!(stats.files_changed, 2);
    }

    #[test]
    fn test_short_history_has_no_diff() {
        let git = FakeGit::new(&[
            ("rev-list --count HEAD", "3\n"),
            ("log --oneline -20", "a first\n"),
            ("log --format=%an", "Kari\n"),
        ]);

        let stats = collect_git_stats(&git).unwrap();
        assert_eq!(stats.files_changed, 0);
    }

    #[test]
    fn test_not_a_repository() {
        let git = FakeGit::new(&[]);
        assert!(matches!(collect_git_stats(&git), Err(Error::Git(_))));
    }

    #[test]
    fn test_challenges_match_substrings() {
        let git = FakeGit::new(&[(
            "log --all --oneline -100",
            "a1 Fix SSE reconnect\nb2 Add bonfire form\nc3 Handle ERROR from azure\nd4 prefix debugging\ne5 bugfix: map markers\n",
        )]);

        let challenges = collect_challenges(&git).unwrap();
        assert_eq!(
            challenges,
            vec![
                Challenge {
                    commit: "a1".to_string(),
                    message: "Fix SSE reconnect".to_string()
                },
                Challenge {
                    commit: "c3".to_string(),
                    message: "Handle ERROR from azure".to_string()
                },
                Challenge {
                    commit: "d4".to_string(),
                    message: "prefix debugging".to_string()
                },
                Challenge {
                    commit: "e5".to_string(),
                    message: "bugfix: map markers".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_challenges_capped() {
        let log: String = (0..30).map(|i| format!("c{} fix thing {}\n", i, i)).collect();
        let git = FakeGit::new(&[("log --all --oneline -100", log.as_str())]);
        assert_eq!(collect_challenges(&git).unwrap().len(), 10);
    }
}
