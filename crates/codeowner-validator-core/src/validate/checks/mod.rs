//! Check trait and runner for ownership validation.
//!
//! Checks are independent: each reads the [`OwnershipIndex`] and returns its
//! own comments. The [`Validator`] runs them in registration order and wraps
//! each result under the check's heading. Every check runs; only an external
//! process failure stops the run.

mod duppatterns;
mod files;
mod notowned;
mod syntax;
mod useless;

pub use duppatterns::DupPatternsCheck;
pub use files::FilesCheck;
pub use notowned::NotOwnedCheck;
pub use syntax::SyntaxCheck;
pub use useless::UselessPatternCheck;

use crate::error::Result;
use crate::git::GitClient;
use crate::index::OwnershipIndex;
use crate::validate::{Comment, CommentGroup, ValidationReport};
use log::{debug, info};

/// Keys of the checks run by default, in run order.
pub const DEFAULT_CHECKS: [&str; 4] = ["duppatterns", "syntax", "files", "notowned"];

/// Keys of checks that must be requested explicitly.
pub const EXPERIMENTAL_CHECKS: [&str; 1] = ["useless"];

/// Context provided to checks.
pub struct CheckContext<'a> {
    /// The ownership index for the run.
    pub index: &'a OwnershipIndex,
    /// Git access, for checks that need tracked-file listings.
    pub git: Option<&'a dyn GitClient>,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(index: &'a OwnershipIndex, git: Option<&'a dyn GitClient>) -> Self {
        Self { index, git }
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("index", &self.index.codeowner_file())
            .field("git", &self.git.map(|_| "<dyn GitClient>"))
            .finish()
    }
}

/// A validation check.
pub trait Check: Send + Sync {
    /// Returns the stable key of this check.
    fn name(&self) -> &'static str;

    /// Returns the heading shown above this check's comments.
    fn summary(&self) -> &'static str;

    /// Runs the check.
    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Comment>>;
}

/// Returns the check registered under `name`, if there is one.
pub fn check_by_name(name: &str) -> Option<Box<dyn Check>> {
    match name {
        "duppatterns" => Some(Box::new(DupPatternsCheck::new())),
        "syntax" => Some(Box::new(SyntaxCheck::new())),
        "files" => Some(Box::new(FilesCheck::new())),
        "notowned" => Some(Box::new(NotOwnedCheck::new())),
        "useless" => Some(Box::new(UselessPatternCheck::new())),
        _ => None,
    }
}

/// Runs checks and collects their comments into a report.
#[derive(Default)]
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
    verbose: bool,
}

impl Validator {
    /// Creates a validator with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the default checks in their fixed order.
    pub fn with_default_checks() -> Self {
        let mut validator = Self::new();
        validator.add_check(DupPatternsCheck::new());
        validator.add_check(SyntaxCheck::new());
        validator.add_check(FilesCheck::new());
        validator.add_check(NotOwnedCheck::new());
        validator
    }

    /// Enables the start banner listing every check.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Adds an already-boxed check.
    pub fn add_boxed_check(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Returns the keys of the registered checks, in run order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Runs every check without git access.
    pub fn validate(&self, index: &OwnershipIndex) -> Result<ValidationReport> {
        self.run(&CheckContext::new(index, None))
    }

    /// Runs every check with git access.
    pub fn validate_with_git(
        &self,
        index: &OwnershipIndex,
        git: &dyn GitClient,
    ) -> Result<ValidationReport> {
        self.run(&CheckContext::new(index, Some(git)))
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<ValidationReport> {
        if self.verbose {
            info!("Started:");
            for check in &self.checks {
                info!(" * {}", check.summary());
            }
        }

        let mut report = ValidationReport::new();
        for check in &self.checks {
            debug!("Running check: {}", check.name());
            let comments = check.run(ctx)?;
            debug!("Check '{}' produced {} comment(s)", check.name(), comments.len());
            report.push(CommentGroup::new(check.name(), check.summary(), comments));
        }

        if self.verbose {
            info!("VALIDATION complete!");
        }
        info!("Checks complete: {} finding(s)", report.finding_count());
        Ok(report)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::index_for;
    use super::*;
    use crate::error::Error;
    use crate::validate::{Finding, Severity};

    struct FailingCheck;

    impl Check for FailingCheck {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn summary(&self) -> &'static str {
            "Executing Failing Checker"
        }

        fn run(&self, _ctx: &CheckContext<'_>) -> Result<Vec<Comment>> {
            Err(Error::CommandFailed {
                command: "git ls-files".to_string(),
                status: Some(1),
                output: String::new(),
            })
        }
    }

    #[test]
    fn validator_creation() {
        let validator = Validator::new();
        assert!(validator.checks.is_empty());
    }

    #[test]
    fn default_checks_in_fixed_order() {
        let validator = Validator::with_default_checks();
        assert_eq!(validator.check_names(), DEFAULT_CHECKS.to_vec());
    }

    #[test]
    fn check_lookup_by_name() {
        for name in DEFAULT_CHECKS.iter().chain(EXPERIMENTAL_CHECKS.iter()) {
            let check = check_by_name(name).unwrap();
            assert_eq!(check.name(), *name);
        }
        assert!(check_by_name("owners").is_none());
    }

    #[test]
    fn every_check_gets_a_group() {
        let (_dir, index) = index_for(&["a.yml"], "CODEOWNERS @admins\na.yml @team\n");
        let report = Validator::with_default_checks().validate(&index).unwrap();

        assert_eq!(report.groups.len(), 4);
        assert!(report.is_ok());
        let headings: Vec<_> = report.groups.iter().map(|g| g.heading.message.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Executing Duplicated Pattern Checker",
                "Executing Valid Syntax Checker",
                "Executing File Exists Checker",
                "Executing Missing Assignment Checker",
            ]
        );
        assert!(report.groups.iter().all(|g| g.heading.severity == Severity::Verbose));
    }

    #[test]
    fn checks_do_not_short_circuit() {
        let (_dir, index) = index_for(
            &["lib/a.rb", "docs/readme.md"],
            "lib/ @a\nlib/ @b\ndocs/\n",
        );
        let report = Validator::with_default_checks().validate(&index).unwrap();

        let dup = report.group("duppatterns").unwrap();
        assert_eq!(dup.findings().count(), 1);
        let syntax = report.group("syntax").unwrap();
        assert_eq!(syntax.findings().count(), 1);
        let notowned = report.group("notowned").unwrap();
        let unowned: Vec<_> = notowned.findings().collect();
        assert!(unowned.contains(&&Finding::FileNotOwned {
            path: "docs/readme.md".to_string()
        }));
    }

    #[test]
    fn process_failure_aborts_the_run() {
        let (_dir, index) = index_for(&[], "* @all\n");
        let mut validator = Validator::new();
        validator.add_check(FailingCheck);
        validator.add_check(DupPatternsCheck::new());

        let result = validator.validate(&index);
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }
}
