//! Diagnostic types produced by validation checks.
//!
//! A run produces a [`ValidationReport`]: one [`CommentGroup`] per check, each
//! headed by the check's summary and holding that check's [`Comment`]s.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// How serious a comment is.
///
/// `Verbose` is reserved for group headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Group headings and progress detail.
    Verbose,
    /// Informational.
    Info,
    /// Something worth a look.
    Warn,
    /// An ownership problem.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Verbose => "verbose",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// An ownership problem found by a check.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    /// The same pattern text is declared on several lines.
    #[error(
        "Pattern '{pattern}' is defined {} times on lines {}",
        .lines.len(),
        join_lines(.lines)
    )]
    DuplicatePattern {
        /// The pattern text as written.
        pattern: String,
        /// Every declaring line, in file order.
        lines: Vec<usize>,
    },

    /// A line names a path but no owners.
    #[error("line {line}: Missing owner, at least one owner is required")]
    MissingOwner {
        /// The line number (1-based).
        line: usize,
        /// The path token on that line.
        path: String,
    },

    /// A declared path does not exist in the repository.
    #[error("line {line}: '{path}' does not match any files in the repository")]
    PathNotFound {
        /// The line number (1-based).
        line: usize,
        /// The declared path.
        path: String,
    },

    /// An in-scope file has no owner.
    #[error("File '{path}' is missing from the code owners file")]
    FileNotOwned {
        /// The file path relative to the repository root.
        path: String,
    },

    /// A pattern matches no tracked file.
    #[error("line {line}: pattern '{pattern}' does not match any tracked files")]
    UselessPattern {
        /// The line number (1-based).
        line: usize,
        /// The pattern text as written.
        pattern: String,
    },
}

impl Finding {
    /// Returns the ownership-file line this finding points at, if any.
    ///
    /// Duplicates report their first declaring line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Finding::DuplicatePattern { lines, .. } => lines.first().copied(),
            Finding::MissingOwner { line, .. }
            | Finding::PathNotFound { line, .. }
            | Finding::UselessPattern { line, .. } => Some(*line),
            Finding::FileNotOwned { .. } => None,
        }
    }
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Severity tier.
    pub severity: Severity,
    /// Human-readable text.
    pub message: String,
    /// The typed problem behind this comment, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding: Option<Finding>,
}

impl Comment {
    /// Creates a plain comment.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            finding: None,
        }
    }

    /// Creates a group heading.
    pub fn verbose(message: impl Into<String>) -> Self {
        Self::new(Severity::Verbose, message)
    }

    /// Creates an informational comment.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning comment.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, message)
    }

    /// Wraps a finding; the message is the finding's text.
    pub fn from_finding(finding: Finding) -> Self {
        Self {
            severity: Severity::Error,
            message: finding.to_string(),
            finding: Some(finding),
        }
    }
}

impl From<Finding> for Comment {
    fn from(finding: Finding) -> Self {
        Self::from_finding(finding)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The comments of one check under its heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentGroup {
    /// Stable key of the check that produced the group.
    pub check: String,
    /// Heading comment carrying the check summary.
    pub heading: Comment,
    /// The check's comments, in the order produced.
    pub comments: Vec<Comment>,
}

impl CommentGroup {
    /// Creates a group with a `Verbose` heading.
    pub fn new(
        check: impl Into<String>,
        summary: impl Into<String>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            check: check.into(),
            heading: Comment::verbose(summary),
            comments,
        }
    }

    /// Returns the comments that carry a finding.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.comments.iter().filter_map(|c| c.finding.as_ref())
    }

    /// Returns true if no comment in the group is a finding.
    pub fn is_clean(&self) -> bool {
        self.findings().next().is_none()
    }
}

/// The grouped output of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// One group per check, in run order.
    pub groups: Vec<CommentGroup>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group.
    pub fn push(&mut self, group: CommentGroup) {
        self.groups.push(group);
    }

    /// Returns the group for a check key.
    pub fn group(&self, check: &str) -> Option<&CommentGroup> {
        self.groups.iter().find(|g| g.check == check)
    }

    /// Returns every finding across groups.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.groups.iter().flat_map(CommentGroup::findings)
    }

    /// Returns the number of findings.
    pub fn finding_count(&self) -> usize {
        self.findings().count()
    }

    /// Returns true if no check reported a finding.
    pub fn is_ok(&self) -> bool {
        self.groups.iter().all(CommentGroup::is_clean)
    }
}
