//! Configuration handling for the CLI.
//!
//! Converts CLI arguments into the library's [`RunConfig`] and the list of
//! checks to register.

use crate::cli::{Args, CheckKind, ExperimentalCheckKind};
use codeowner_validator_core::config::{RunConfig, split_list};
use codeowner_validator_core::validate::checks::check_by_name;
use codeowner_validator_core::validate::{ValidationReport, Validator};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The repository path cannot be resolved.
    #[error("repository path '{}' is invalid: {source}", .path.display())]
    InvalidRepoPath {
        /// The path as given.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A selected check has no registered implementation.
    #[error("unknown check: {0}")]
    UnknownCheck(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration, git failure or unreadable file).
    StartupFailure = 1,
    /// Validation failed (checks found issues).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Configuration handed to the library.
    pub run_config: RunConfig,
    /// Which standard checks to run.
    pub checks: Vec<CheckKind>,
    /// Which experimental checks to run.
    pub experimental_checks: Vec<ExperimentalCheckKind>,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path =
            args.repo_path
                .canonicalize()
                .map_err(|source| ConfigError::InvalidRepoPath {
                    path: args.repo_path.clone(),
                    source,
                })?;

        let mut run_config = RunConfig::new(repo_path).with_verbose(args.verbose > 0);

        if let Some(ref file) = args.whitelist_file {
            run_config = run_config.with_whitelist_file(file.clone());
        }
        if let Some(ref rules) = args.whitelist {
            run_config = run_config.with_whitelist_rules(split_list(rules));
        }
        if let Some(ref paths) = args.whitelist_file_paths {
            run_config = run_config.with_whitelist_file_paths(split_list(paths));
        }
        if let Some(ref paths) = args.codeowner_file_paths {
            run_config = run_config.with_codeowner_file_paths(split_list(paths));
        }

        Ok(Self {
            run_config,
            checks: dedup(args.effective_checks()),
            experimental_checks: dedup(args.effective_experimental_checks()),
            json_output: args.json,
        })
    }

    /// Returns the registry keys of every selected check, in run order.
    pub fn check_keys(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .map(|c| c.key())
            .chain(self.experimental_checks.iter().map(|c| c.key()))
            .collect()
    }

    /// Returns true if any selected check talks to git.
    pub fn needs_git(&self) -> bool {
        self.experimental_checks.iter().any(|c| c.needs_git())
    }

    /// Builds a validator holding the selected checks.
    pub fn validator(&self) -> Result<Validator, ConfigError> {
        let mut validator = Validator::new().with_verbose(self.run_config.verbose);
        for key in self.check_keys() {
            let check =
                check_by_name(key).ok_or_else(|| ConfigError::UnknownCheck(key.to_string()))?;
            validator.add_boxed_check(check);
        }
        Ok(validator)
    }

    /// Determines the exit code for a finished run.
    pub fn exit_code_for_report(&self, report: &ValidationReport) -> ExitCode {
        if report.is_ok() {
            ExitCode::Success
        } else {
            ExitCode::ValidationFailed
        }
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
