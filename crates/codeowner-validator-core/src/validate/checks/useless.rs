//! Useless pattern check.
//!
//! Experimental: asks git which tracked files each pattern lists and reports
//! patterns that list none in scope.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::validate::{Comment, Finding};
use log::warn;

/// A check that reports patterns matching no tracked, in-scope file.
#[derive(Debug, Clone, Default)]
pub struct UselessPatternCheck;

impl UselessPatternCheck {
    /// Creates a new useless pattern check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for UselessPatternCheck {
    fn name(&self) -> &'static str {
        "useless"
    }

    fn summary(&self) -> &'static str {
        "Executing Useless Pattern Checker"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
        let Some(git) = ctx.git else {
            warn!("No git access, skipping useless pattern check");
            return Ok(vec![Comment::warn(
                "Skipped: git access is required to list tracked files",
            )]);
        };

        Ok(ctx
            .index
            .useless_patterns(git)?
            .into_iter()
            .filter_map(|decl| {
                decl.pattern().map(|pattern| {
                    Comment::from(Finding::UselessPattern {
                        line: decl.line,
                        pattern: pattern.to_string(),
                    })
                })
            })
            .collect())
    }
}
