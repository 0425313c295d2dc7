//! Error types for a validation run.
//!
//! Only conditions that abort a run live here. Ownership-quality problems
//! (duplicates, missing owners, unowned files) are reported as
//! [`Finding`](crate::validate::Finding)s instead.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal error that stops a validation run.
#[derive(Debug, Error)]
pub enum Error {
    /// The ownership file was not found at any candidate location.
    #[error("Unable to locate a code owners file located [{}]", .searched.join(","))]
    CodeownersNotFound {
        /// Every candidate path that was checked, in search order.
        searched: Vec<String>,
    },

    /// An external git invocation exited unsuccessfully.
    #[error("Status: {}, Command: {command}", status_text(.status))]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Exit status, if the process exited normally.
        status: Option<i32>,
        /// Combined stderr output of the command.
        output: String,
    },

    /// The ownership file exists but could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn status_text(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_every_candidate() {
        let error = Error::CodeownersNotFound {
            searched: vec![
                "CODEOWNERS".to_string(),
                "docs/CODEOWNERS".to_string(),
                ".github/CODEOWNERS".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Unable to locate a code owners file located \
             [CODEOWNERS,docs/CODEOWNERS,.github/CODEOWNERS]"
        );
    }

    #[test]
    fn command_failed_includes_status_and_command() {
        let error = Error::CommandFailed {
            command: "git diff --name-status HEAD HEAD^".to_string(),
            status: Some(128),
            output: "fatal: bad revision".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Status: 128"));
        assert!(message.contains("git diff --name-status HEAD HEAD^"));
    }

    #[test]
    fn command_failed_without_status() {
        let error = Error::CommandFailed {
            command: "git ls-files".to_string(),
            status: None,
            output: String::new(),
        };
        assert!(error.to_string().contains("terminated by signal"));
    }
}
