//! Git collaborators.
//!
//! Historical diffs and the tracked-file listing come from git itself. The
//! [`GitClient`] trait is the seam; [`GitCli`] shells out to the `git`
//! binary.

use crate::error::{Error, Result};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default starting revision for change analysis.
pub const DEFAULT_FROM: &str = "HEAD";

/// Default ending revision for change analysis.
pub const DEFAULT_TO: &str = "HEAD^";

/// Status of a changed file between two revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeStatus {
    /// `A`
    Added,
    /// `M`
    Modified,
    /// `D`
    Deleted,
    /// Any other single-letter status (renames, copies, type changes).
    Other(char),
}

impl ChangeStatus {
    /// Maps a name-status code to a status.
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => ChangeStatus::Added,
            'M' => ChangeStatus::Modified,
            'D' => ChangeStatus::Deleted,
            other => ChangeStatus::Other(other),
        }
    }

    /// Returns the single-letter code.
    pub fn code(&self) -> char {
        match self {
            ChangeStatus::Added => 'A',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Deleted => 'D',
            ChangeStatus::Other(code) => *code,
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Operations the validator needs from git.
pub trait GitClient {
    /// Returns the changed paths between two revisions.
    fn diff_name_status(&self, from: &str, to: &str) -> Result<BTreeMap<String, ChangeStatus>>;

    /// Returns the tracked files matching `pattern`.
    fn ls_files(&self, pattern: &str) -> Result<Vec<String>>;
}

/// [`GitClient`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Creates a client for the repository at `repo_path`.
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Returns the repository path.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = format!("git -C {} {}", self.repo_path.display(), args.join(" "));
        debug!("Running: {}", command_line);

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(|e| Error::CommandFailed {
                command: command_line.clone(),
                status: None,
                output: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command_line,
                status: output.status.code(),
                output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitClient for GitCli {
    fn diff_name_status(&self, from: &str, to: &str) -> Result<BTreeMap<String, ChangeStatus>> {
        let stdout = self.run(&["diff", "--name-status", from, to])?;
        Ok(parse_name_status(&stdout))
    }

    fn ls_files(&self, pattern: &str) -> Result<Vec<String>> {
        let stdout = self.run(&["ls-files", "--", pattern])?;
        Ok(stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Parses `git diff --name-status` output.
///
/// Renames and copies (`R100\told\tnew`) are keyed by their new path.
pub fn parse_name_status(output: &str) -> BTreeMap<String, ChangeStatus> {
    let mut changes = BTreeMap::new();
    for line in output.lines() {
        let mut fields = line.split('\t');
        let (Some(status), Some(first)) = (fields.next(), fields.next()) else {
            trace!("Skipping name-status line '{}'", line);
            continue;
        };
        let Some(code) = status.chars().next() else {
            continue;
        };
        let path = fields.next().unwrap_or(first);
        changes.insert(path.to_string(), ChangeStatus::from_code(code));
    }
    changes
}
