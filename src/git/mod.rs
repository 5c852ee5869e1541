//! # Changed File Collection
//!
//! Lists the files that differ between two revisions.
//!
//! Every git call here is best-effort: a failed fetch is ignored because
//! the local clone may already hold enough history, and a failed diff
//! yields an empty list so the run reports no solutions instead of
//! aborting.
//!
//! ## Key Types
//!
//! - [`ChangeSource`] - Anything that can list changed files for a range
//! - [`Git`] - Shells out to the `git` binary

use std::path::PathBuf;
use std::process::{Command, Output};

use thiserror::Error;

use crate::domain::ChangeRange;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run git {0}: {1}")]
    Spawn(String, #[source] std::io::Error),

    #[error("git {command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Source of changed file paths for a commit range
pub trait ChangeSource {
    /// Makes sure both revisions are available locally; never fails
    fn refresh(&self);

    /// Returns changed paths relative to the repository root, or an empty list
    fn changed_files(&self, range: &ChangeRange) -> Vec<String>;
}

/// Git command runner bound to a working directory
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
    remote: String,
    fetch: bool,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            remote: "origin".to_string(),
            fetch: true,
        }
    }

    /// Sets the remote used by [`ChangeSource::refresh`]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Enables or disables the fetch in [`ChangeSource::refresh`]
    pub fn with_fetch(mut self, fetch: bool) -> Self {
        self.fetch = fetch;
        self
    }

    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitError::Spawn(args.join(" "), e))?;

        if !output.status.success() {
            return Err(GitError::Failed {
                command: args.join(" "),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }

    /// Runs `git diff --name-only` and returns the raw file list
    pub fn diff_names(&self, range: &ChangeRange) -> Result<Vec<String>, GitError> {
        let output = self.run(&["diff", "--name-only", range.diff_base(), range.head()])?;
        Ok(parse_name_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl ChangeSource for Git {
    fn refresh(&self) {
        if !self.fetch {
            tracing::debug!("Fetch disabled");
            return;
        }

        match self.run(&["fetch", "--no-tags", "--prune", "--depth=0", self.remote.as_str()]) {
            Ok(_) => tracing::debug!(remote = %self.remote, "Fetched remote history"),
            Err(e) => tracing::debug!(error = %e, "Fetch failed, using local history"),
        }
    }

    fn changed_files(&self, range: &ChangeRange) -> Vec<String> {
        if range.is_initial_push() {
            tracing::info!("Base is the zero revision, diffing against the empty tree");
        }

        match self.diff_names(range) {
            Ok(files) => {
                tracing::debug!(count = files.len(), "Collected changed files");
                files
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diff failed, treating as no changes");
                Vec::new()
            }
        }
    }
}

/// Splits `--name-only` output into trimmed, non-empty paths
pub fn parse_name_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
