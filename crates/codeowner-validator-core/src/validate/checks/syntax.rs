//! Syntax check.
//!
//! Reports lines that name a path without any owner.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::validate::{Comment, Finding};

/// A check that reports declaration lines with no owners.
#[derive(Debug, Clone, Default)]
pub struct SyntaxCheck;

impl SyntaxCheck {
    /// Creates a new syntax check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for SyntaxCheck {
    fn name(&self) -> &'static str {
        "syntax"
    }

    fn summary(&self) -> &'static str {
        "Executing Valid Syntax Checker"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
        Ok(ctx
            .index
            .unrecognized_assignments()
            .into_iter()
            .map(|decl| {
                Comment::from(Finding::MissingOwner {
                    line: decl.line,
                    path: decl.path().unwrap_or_default().to_string(),
                })
            })
            .collect())
    }
}
