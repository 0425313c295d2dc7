//! Files existence check.
//!
//! This check verifies that declared paths exist in the repository.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::validate::{Comment, Finding};
use log::debug;

/// A check that reports declared paths missing from the repository.
///
/// The path is tested literally, so a glob such as `*.rb` is reported unless
/// a file with that exact name exists. Paths that don't exist may indicate:
/// - Typos in the path
/// - Files that have been deleted or moved
#[derive(Debug, Clone, Default)]
pub struct FilesCheck;

impl FilesCheck {
    /// Creates a new files existence check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for FilesCheck {
    fn name(&self) -> &'static str {
        "files"
    }

    fn summary(&self) -> &'static str {
        "Executing File Exists Checker"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = ctx
            .index
            .invalid_reference_lines()
            .into_iter()
            .map(|decl| {
                Comment::from(Finding::PathNotFound {
                    line: decl.line,
                    path: decl.path().unwrap_or_default().to_string(),
                })
            })
            .collect();
        debug!("Files check complete: {} missing path(s)", comments.len());
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::checks::test_support::index_for;

    fn run_check(files: &[&str], input: &str) -> Vec<Comment> {
        let (_dir, index) = index_for(files, input);
        FilesCheck::new()
            .run(&CheckContext::new(&index, None))
            .unwrap()
    }

    #[test]
    fn existing_paths() {
        let comments = run_check(
            &["src/main.rs", "docs/readme.md"],
            "/src/main.rs @rust\ndocs/ @docs\nsrc @dev\n",
        );
        assert!(comments.is_empty());
    }

    #[test]
    fn missing_path() {
        let comments = run_check(&["src/main.rs"], "/lib/ @dev\n");
        assert_eq!(comments.len(), 1);
        assert_eq!(
            comments[0].message,
            "line 1: '/lib/' does not match any files in the repository"
        );
    }

    #[test]
    fn globs_are_not_expanded() {
        let comments = run_check(&["a.rb"], "*.rb @ruby\n");
        assert_eq!(comments.len(), 1);
        assert!(matches!(
            comments[0].finding,
            Some(Finding::PathNotFound { line: 1, .. })
        ));
    }

    #[test]
    fn unrecognized_lines_are_checked_too() {
        let comments = run_check(&["lib/foo.rb"], "lib/foo.rb\nghost.rb\n");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].finding.as_ref().and_then(Finding::line), Some(2));
    }
}
