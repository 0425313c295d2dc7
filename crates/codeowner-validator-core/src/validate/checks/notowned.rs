//! Not-owned files check.
//!
//! This check identifies in-scope files in the repository that are not
//! covered by any ownership pattern.

use super::{Check, CheckContext};
use crate::error::Result;
use crate::validate::{Comment, Finding};
use log::debug;

/// A check that identifies files without an owner.
///
/// Only files the scope rules put in scope are considered.
#[derive(Debug, Clone, Default)]
pub struct NotOwnedCheck;

impl NotOwnedCheck {
    /// Creates a new not-owned check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for NotOwnedCheck {
    fn name(&self) -> &'static str {
        "notowned"
    }

    fn summary(&self) -> &'static str {
        "Executing Missing Assignment Checker"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
        let missing = ctx.index.missing_assignments();
        debug!(
            "{} of {} in-scope file(s) have no owner",
            missing.len(),
            ctx.index.included_files().len()
        );
        Ok(missing
            .iter()
            .map(|path| Comment::from(Finding::FileNotOwned { path: path.clone() }))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::checks::test_support::{index_for, index_with_config};

    fn messages(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.message.as_str()).collect()
    }

    #[test]
    fn all_files_owned() {
        let (_dir, index) = index_for(&["a.yml", "b.yml"], "* @team\n");
        let comments = NotOwnedCheck::new()
            .run(&CheckContext::new(&index, None))
            .unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn unowned_files_are_reported_in_order() {
        let (_dir, index) = index_for(
            &["src/main.rs", "README.md", "lib/a.rb"],
            "*.rs @rust\nCODEOWNERS @admin\n",
        );
        let comments = NotOwnedCheck::new()
            .run(&CheckContext::new(&index, None))
            .unwrap();
        assert_eq!(
            messages(&comments),
            vec![
                "File 'README.md' is missing from the code owners file",
                "File 'lib/a.rb' is missing from the code owners file",
            ]
        );
    }

    #[test]
    fn out_of_scope_files_are_ignored() {
        let (_dir, index) = index_with_config(&["a.yml", "b.rb"], "*.rb @ruby\n", |config| {
            config.with_whitelist_rules(["*.yml", "*.rb"])
        });
        let comments = NotOwnedCheck::new()
            .run(&CheckContext::new(&index, None))
            .unwrap();
        assert_eq!(
            messages(&comments),
            vec!["File 'a.yml' is missing from the code owners file"]
        );
    }

    #[test]
    fn hidden_files_are_not_walked() {
        let (_dir, index) = index_for(
            &[".github/workflow.yml", "a.rs"],
            "*.rs @rust\nCODEOWNERS @admin\n",
        );
        let comments = NotOwnedCheck::new()
            .run(&CheckContext::new(&index, None))
            .unwrap();
        assert!(comments.is_empty());
    }
}
