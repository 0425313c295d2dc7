//! Duplicate pattern detection check.
//!
//! This check detects when the same pattern text appears on more than one
//! line of the ownership file.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::validate::{Comment, Finding};
use log::trace;

/// A check that reports patterns declared more than once.
///
/// Patterns are compared as written, so `/docs/` and `docs/` are distinct.
#[derive(Debug, Clone, Default)]
pub struct DupPatternsCheck;

impl DupPatternsCheck {
    /// Creates a new duplicate patterns check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for DupPatternsCheck {
    fn name(&self) -> &'static str {
        "duppatterns"
    }

    fn summary(&self) -> &'static str {
        "Executing Duplicated Pattern Checker"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
        let comments = ctx
            .index
            .duplicated_patterns()
            .into_iter()
            .map(|(pattern, decls)| {
                let lines: Vec<usize> = decls.iter().map(|d| d.line).collect();
                trace!("Pattern '{}' duplicated on lines {:?}", pattern, lines);
                Comment::from(Finding::DuplicatePattern {
                    pattern: pattern.to_string(),
                    lines,
                })
            })
            .collect();
        Ok(comments)
    }
}
