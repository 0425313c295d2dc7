//! Ownership queries over a repository.
//!
//! An [`OwnershipIndex`] combines the parsed declarations with the real file
//! tree (filtered through the [`ScopeMatcher`]) and answers the questions the
//! checks ask: which files have no owner, which patterns are duplicated,
//! which lines point at nothing.
//!
//! Results are computed on first use and cached for the life of the index.
//! The tree is assumed not to change during a run.

mod walk;

pub use walk::list_files;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::git::{ChangeStatus, GitClient};
use crate::matching::DeclarationMatcher;
use crate::parse::{Declaration, read_declarations};
use crate::scope::{ScopeMatcher, first_existing};
use log::{debug, trace};
use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Locates the ownership file for `config`.
///
/// Candidates are tried in order; the first existing file wins.
pub fn find_codeowners_file(config: &RunConfig) -> Result<PathBuf> {
    let candidates = config.codeowner_candidates();
    match first_existing(config.repo_path(), &candidates) {
        Some(path) => {
            debug!("Using ownership file {}", path.display());
            Ok(path)
        }
        None => Err(Error::CodeownersNotFound {
            searched: candidates,
        }),
    }
}

/// Read-only ownership view of one repository for one run.
#[derive(Debug)]
pub struct OwnershipIndex {
    repo_path: PathBuf,
    codeowner_file: PathBuf,
    declarations: Vec<Declaration>,
    scope: ScopeMatcher,
    matcher: DeclarationMatcher,
    included_files: OnceCell<Vec<String>>,
    missing_assignments: OnceCell<Vec<String>>,
    patterns_by_owner: OnceCell<BTreeMap<String, Vec<String>>>,
    useless_patterns: OnceCell<Vec<usize>>,
}

impl OwnershipIndex {
    /// Builds the index for `config`.
    ///
    /// Fails if no ownership file exists at any candidate location, or if it
    /// cannot be read.
    pub fn new(config: &RunConfig) -> Result<Self> {
        let codeowner_file = find_codeowners_file(config)?;
        let declarations = read_declarations(&codeowner_file)?;
        let scope = ScopeMatcher::from_config(config);
        Ok(Self::from_parts(
            config.repo_path(),
            codeowner_file,
            declarations,
            scope,
        ))
    }

    /// Builds an index from already-parsed declarations.
    pub fn from_parts(
        repo_path: impl Into<PathBuf>,
        codeowner_file: impl Into<PathBuf>,
        declarations: Vec<Declaration>,
        scope: ScopeMatcher,
    ) -> Self {
        let matcher = DeclarationMatcher::new(&declarations);
        Self {
            repo_path: repo_path.into(),
            codeowner_file: codeowner_file.into(),
            declarations,
            scope,
            matcher,
            included_files: OnceCell::new(),
            missing_assignments: OnceCell::new(),
            patterns_by_owner: OnceCell::new(),
            useless_patterns: OnceCell::new(),
        }
    }

    /// Returns the repository root.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Returns the path of the ownership file.
    pub fn codeowner_file(&self) -> &Path {
        &self.codeowner_file
    }

    /// Returns the parsed declarations (blank and comment lines excluded).
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the scope matcher.
    pub fn scope(&self) -> &ScopeMatcher {
        &self.scope
    }

    /// Returns true if `path` is in scope for ownership evaluation.
    pub fn in_scope(&self, path: &str) -> bool {
        self.scope.is_in_scope(path)
    }

    /// Regular files under the repository root that are in scope, sorted.
    pub fn included_files(&self) -> &[String] {
        self.included_files.get_or_init(|| {
            let files: Vec<String> = list_files(&self.repo_path)
                .into_iter()
                .filter(|file| self.scope.is_in_scope(file))
                .collect();
            debug!("{} file(s) in scope", files.len());
            files
        })
    }

    /// In-scope files that no `Pattern` declaration matches.
    pub fn missing_assignments(&self) -> &[String] {
        self.missing_assignments.get_or_init(|| {
            self.included_files()
                .iter()
                .filter(|file| !self.defined_owner(file))
                .cloned()
                .collect()
        })
    }

    /// Pattern texts declared more than once, with every declaring line in
    /// file order.
    ///
    /// Keys are the pattern text exactly as written.
    pub fn duplicated_patterns(&self) -> BTreeMap<&str, Vec<&Declaration>> {
        let mut by_pattern: BTreeMap<&str, Vec<&Declaration>> = BTreeMap::new();
        for decl in &self.declarations {
            if let Some(pattern) = decl.pattern() {
                by_pattern.entry(pattern).or_default().push(decl);
            }
        }
        by_pattern.retain(|_, decls| decls.len() > 1);
        by_pattern
    }

    /// Lines with a path but no owners, in file order.
    pub fn unrecognized_assignments(&self) -> Vec<&Declaration> {
        self.declarations
            .iter()
            .filter(|decl| decl.is_unrecognized())
            .collect()
    }

    /// `Pattern` and `Unrecognized` lines whose path does not exist on disk.
    ///
    /// The path is checked literally; glob characters are not expanded.
    pub fn invalid_reference_lines(&self) -> Vec<&Declaration> {
        self.declarations
            .iter()
            .filter(|decl| match decl.path() {
                Some(path) => {
                    let exists = self.repo_path.join(path.trim_start_matches('/')).exists();
                    trace!("line {}: '{}' exists={}", decl.line, path, exists);
                    !exists
                }
                None => false,
            })
            .collect()
    }

    /// Patterns owned by each owner, in file order, anchor slash stripped.
    pub fn patterns_by_owner(&self) -> &BTreeMap<String, Vec<String>> {
        self.patterns_by_owner.get_or_init(|| {
            let mut by_owner: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for decl in &self.declarations {
                let Some(pattern) = decl.pattern() else {
                    continue;
                };
                let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
                for owner in decl.owners() {
                    by_owner
                        .entry(owner.text.clone())
                        .or_default()
                        .push(pattern.to_string());
                }
            }
            by_owner
        })
    }

    /// `Pattern` declarations whose first owner is `owner`, in file order.
    pub fn find_by_owner(&self, owner: &str) -> Vec<&Declaration> {
        self.declarations
            .iter()
            .filter(|decl| decl.primary_owner().is_some_and(|o| o.text == owner))
            .collect()
    }

    /// Returns true if some `Pattern` declaration matches `file`.
    pub fn defined_owner(&self, file: &str) -> bool {
        self.matcher.is_match(file)
    }

    /// Returns the first `Pattern` declaration (in file order) matching `file`.
    pub fn owning_declaration(&self, file: &str) -> Option<&Declaration> {
        self.matcher
            .first_match(file)
            .map(|idx| &self.declarations[idx])
    }

    /// In-scope files changed between `from` and `to`.
    pub fn changes_to_analyze(
        &self,
        git: &dyn GitClient,
        from: &str,
        to: &str,
    ) -> Result<BTreeMap<String, ChangeStatus>> {
        let mut changes = git.diff_name_status(from, to)?;
        changes.retain(|path, _| self.scope.is_in_scope(path));
        debug!("{} in-scope change(s) between {} and {}", changes.len(), from, to);
        Ok(changes)
    }

    /// `Pattern` declarations whose pattern matches no in-scope tracked file.
    pub fn useless_patterns(&self, git: &dyn GitClient) -> Result<Vec<&Declaration>> {
        if let Some(indexes) = self.useless_patterns.get() {
            return Ok(self.pick(indexes));
        }

        let mut indexes = Vec::new();
        for (idx, decl) in self.declarations.iter().enumerate() {
            let Some(pattern) = decl.pattern() else {
                continue;
            };
            if !self.pattern_has_files(git, pattern)? {
                trace!("line {}: '{}' matches no tracked files", decl.line, pattern);
                indexes.push(idx);
            }
        }

        let indexes = self.useless_patterns.get_or_init(|| indexes);
        Ok(self.pick(indexes))
    }

    /// Returns true if `pattern` lists at least one in-scope tracked file.
    pub fn pattern_has_files(&self, git: &dyn GitClient, pattern: &str) -> Result<bool> {
        let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
        let files = git.ls_files(pattern)?;
        Ok(files.iter().any(|file| self.scope.is_in_scope(file)))
    }

    fn pick(&self, indexes: &[usize]) -> Vec<&Declaration> {
        indexes.iter().map(|&idx| &self.declarations[idx]).collect()
    }
}
