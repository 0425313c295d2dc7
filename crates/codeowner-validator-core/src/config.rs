//! Per-run configuration.
//!
//! A [`RunConfig`] is created once at the start of a run and handed to each
//! component by value or reference. The library never consults the process
//! environment itself; callers resolve flags and environment variables and
//! record the outcome here.

use std::path::{Path, PathBuf};

/// Candidate locations for the ownership file, relative to the repository root.
pub const CODEOWNER_FILE_PATHS: [&str; 3] =
    ["CODEOWNERS", "docs/CODEOWNERS", ".github/CODEOWNERS"];

/// Candidate locations for the project-local scope rule file.
pub const WHITELIST_FILE_PATHS: [&str; 2] =
    ["CODEOWNERS_WHITELIST", ".github/CODEOWNERS_WHITELIST"];

/// Name of the repository's standard ignore file.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Configuration for a single validation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the repository root.
    pub repo_path: PathBuf,
    /// Whether to log the list of checks before running them.
    pub verbose: bool,
    /// An explicit scope rule file, independent of the repository root.
    pub whitelist_file: Option<PathBuf>,
    /// Scope rules supplied inline.
    pub whitelist_rules: Vec<String>,
    /// Extra candidate locations for the project-local rule file.
    pub whitelist_file_paths: Vec<String>,
    /// Extra candidate locations for the ownership file.
    pub codeowner_file_paths: Vec<String>,
}

impl RunConfig {
    /// Creates a configuration for the repository at `repo_path`.
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            verbose: false,
            whitelist_file: None,
            whitelist_rules: Vec::new(),
            whitelist_file_paths: Vec::new(),
            codeowner_file_paths: Vec::new(),
        }
    }

    /// Sets verbose output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the explicit scope rule file.
    pub fn with_whitelist_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.whitelist_file = Some(path.into());
        self
    }

    /// Sets inline scope rules. Entries are trimmed and empty ones dropped.
    pub fn with_whitelist_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.whitelist_rules = clean_entries(rules);
        self
    }

    /// Adds candidate locations for the project-local rule file.
    pub fn with_whitelist_file_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.whitelist_file_paths = clean_entries(paths);
        self
    }

    /// Adds candidate locations for the ownership file.
    pub fn with_codeowner_file_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.codeowner_file_paths = clean_entries(paths);
        self
    }

    /// Returns the repository root.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Ordered candidate locations for the ownership file.
    pub fn codeowner_candidates(&self) -> Vec<String> {
        candidates(&CODEOWNER_FILE_PATHS, &self.codeowner_file_paths)
    }

    /// Ordered candidate locations for the project-local rule file.
    pub fn whitelist_candidates(&self) -> Vec<String> {
        candidates(&WHITELIST_FILE_PATHS, &self.whitelist_file_paths)
    }
}

/// Splits a comma-separated list, trimming each entry and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    clean_entries(value.split(','))
}

fn clean_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn candidates(fixed: &[&str], extra: &[String]) -> Vec<String> {
    fixed
        .iter()
        .map(|path| path.to_string())
        .chain(extra.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::new("/repo");
        assert_eq!(config.repo_path(), Path::new("/repo"));
        assert!(!config.verbose);
        assert!(config.whitelist_file.is_none());
        assert!(config.whitelist_rules.is_empty());
    }

    #[test]
    fn codeowner_candidates_fixed_order_then_extras() {
        let config = RunConfig::new("/repo").with_codeowner_file_paths(["config/OWNERS"]);
        assert_eq!(
            config.codeowner_candidates(),
            vec![
                "CODEOWNERS",
                "docs/CODEOWNERS",
                ".github/CODEOWNERS",
                "config/OWNERS"
            ]
        );
    }

    #[test]
    fn whitelist_candidates_fixed_order_then_extras() {
        let config = RunConfig::new("/repo").with_whitelist_file_paths([" ci/WHITELIST "]);
        assert_eq!(
            config.whitelist_candidates(),
            vec![
                "CODEOWNERS_WHITELIST",
                ".github/CODEOWNERS_WHITELIST",
                "ci/WHITELIST"
            ]
        );
    }

    #[test]
    fn rules_are_trimmed() {
        let config = RunConfig::new("/repo").with_whitelist_rules([
            "  def/**/*.rb",
            "ghi/**/*.yml  ",
            " ",
        ]);
        assert_eq!(config.whitelist_rules, vec!["def/**/*.rb", "ghi/**/*.yml"]);
    }

    #[test]
    fn split_list_trims_entries() {
        assert_eq!(
            split_list("def/**/*.rb, ghi/**/*.yml,,"),
            vec!["def/**/*.rb", "ghi/**/*.yml"]
        );
        assert!(split_list("").is_empty());
    }
}
