//! CLI module for the CODEOWNERS validator.
//!
//! Command-line argument parsing using Clap with environment variable
//! support. Every comma-separated value is split and trimmed by the core's
//! [`split_list`](codeowner_validator_core::config::split_list).

pub mod config;
pub mod output;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CODEOWNERS validator - checks an ownership file against the repository tree.
///
/// Reports duplicated patterns, lines without owners, patterns that match
/// nothing and files that nobody owns. Supports both human-readable and JSON
/// output formats.
#[derive(Parser, Debug)]
#[command(name = "codeowner-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root.
    #[arg(long, short = 'p', env = "REPO_PATH", default_value = ".")]
    pub repo_path: PathBuf,

    /// Explicit file of scope rules (gitignore syntax).
    #[arg(long, env = "CODEOWNERS_WHITELIST_FILE")]
    pub whitelist_file: Option<PathBuf>,

    /// Comma-separated scope rules, e.g. "config/**,!config/local/".
    #[arg(long, env = "CODEOWNERS_WHITELIST")]
    pub whitelist: Option<String>,

    /// Comma-separated extra locations for the project-local rule file.
    #[arg(long, env = "CODEOWNER_WHITELIST_FILE_PATHS")]
    pub whitelist_file_paths: Option<String>,

    /// Comma-separated extra locations for the ownership file.
    #[arg(long, env = "CODEOWNER_FILE_PATHS")]
    pub codeowner_file_paths: Option<String>,

    /// Comma-separated list of checks to run.
    /// Possible values: duppatterns, syntax, files, notowned
    #[arg(long, env = "CHECKS", value_delimiter = ',')]
    pub checks: Option<Vec<CheckKind>>,

    /// Comma-separated list of experimental checks to run.
    /// Possible values: useless
    #[arg(long, env = "EXPERIMENTAL_CHECKS", value_delimiter = ',')]
    pub experimental_checks: Option<Vec<ExperimentalCheckKind>>,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info and the check banner, -vv for debug).
    #[arg(long, short = 'v', env = "VERBOSE", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Standard validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CheckKind {
    /// Check for patterns declared more than once.
    Duppatterns,
    /// Check for lines without an owner.
    Syntax,
    /// Check that declared paths exist.
    Files,
    /// Check for in-scope files nobody owns.
    Notowned,
}

impl CheckKind {
    /// Returns all standard checks in run order.
    pub fn all() -> Vec<Self> {
        vec![Self::Duppatterns, Self::Syntax, Self::Files, Self::Notowned]
    }

    /// Returns the check's registry key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Duppatterns => "duppatterns",
            Self::Syntax => "syntax",
            Self::Files => "files",
            Self::Notowned => "notowned",
        }
    }
}

/// Experimental validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ExperimentalCheckKind {
    /// Check for patterns that match no tracked file (needs git).
    Useless,
}

impl ExperimentalCheckKind {
    /// Returns the check's registry key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Useless => "useless",
        }
    }

    /// Returns true if the check lists tracked files through git.
    pub fn needs_git(self) -> bool {
        matches!(self, Self::Useless)
    }
}

impl Args {
    /// Returns the checks to run, defaulting to all standard checks.
    pub fn effective_checks(&self) -> Vec<CheckKind> {
        self.checks.clone().unwrap_or_else(CheckKind::all)
    }

    /// Returns the experimental checks to run (empty by default).
    pub fn effective_experimental_checks(&self) -> Vec<ExperimentalCheckKind> {
        self.experimental_checks.clone().unwrap_or_default()
    }
}
