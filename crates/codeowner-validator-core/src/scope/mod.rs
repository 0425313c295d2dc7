//! Scope selection for ownership evaluation.
//!
//! A [`ScopeMatcher`] decides whether a repository-relative path takes part
//! in ownership checks. Rules use gitignore syntax with inverted polarity: a
//! plain rule brings matching paths *into* scope and a `!` rule takes them
//! back out. The last matching rule wins.
//!
//! Rules are collected from up to four sources, always in this order:
//!
//! 1. the project-local rule file (first existing candidate location)
//! 2. an explicitly supplied rule file
//! 3. inline rules
//! 4. the repository `.gitignore`, with every rule negated
//!
//! An empty rule set puts every path in scope.

use crate::config::{GITIGNORE_FILE, RunConfig};
use ignore::Match;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{debug, trace, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Glob that brings every path into scope.
const CATCH_ALL: &str = "**";

/// Where a scope rule came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// A rule file (project-local or explicit).
    File(PathBuf),
    /// An inline rule.
    Inline,
    /// A negated rule from the repository ignore file.
    Gitignore(PathBuf),
    /// The catch-all inserted ahead of ignore-file rules.
    CatchAll,
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSource::File(path) | RuleSource::Gitignore(path) => {
                write!(f, "{}", path.display())
            }
            RuleSource::Inline => f.write_str("inline"),
            RuleSource::CatchAll => f.write_str("catch-all"),
        }
    }
}

/// One inclusion or exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRule {
    /// The rule text as it is evaluated (exclusions start with `!`).
    pub glob: String,
    /// Where the rule came from.
    pub source: RuleSource,
}

impl ScopeRule {
    /// Returns true if this rule removes paths from scope.
    pub fn is_exclusion(&self) -> bool {
        self.glob.starts_with('!')
    }
}

/// Accumulates scope rules in evaluation order.
#[derive(Debug)]
pub struct ScopeMatcherBuilder {
    root: PathBuf,
    rules: Vec<ScopeRule>,
    matchers: Vec<Gitignore>,
}

impl ScopeMatcherBuilder {
    /// Creates a builder whose rules are relative to `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            rules: Vec::new(),
            matchers: Vec::new(),
        }
    }

    /// Adds a single rule. Blank lines and `#` comments are skipped, as are
    /// rules that fail to compile.
    pub fn add_rule(&mut self, rule: &str, source: RuleSource) -> &mut Self {
        let rule = rule.trim_end();
        if is_blank_or_comment(rule) {
            return self;
        }

        match compile_rule(&self.root, rule) {
            Ok(matcher) => {
                trace!("Scope rule '{}' from {}", rule, source);
                self.rules.push(ScopeRule {
                    glob: rule.to_string(),
                    source,
                });
                self.matchers.push(matcher);
            }
            Err(e) => warn!("Skipping invalid scope rule '{}' from {}: {}", rule, source, e),
        }
        self
    }

    /// Adds inline rules in order.
    pub fn add_rules<I, S>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for rule in rules {
            self.add_rule(rule.as_ref().trim(), RuleSource::Inline);
        }
        self
    }

    /// Adds every line of a rule file. A missing file is skipped.
    pub fn add_file(&mut self, path: &Path) -> &mut Self {
        let Some(content) = read_rule_file(path) else {
            return self;
        };
        debug!("Adding scope rules from {}", path.display());
        for line in content.lines() {
            self.add_rule(line, RuleSource::File(path.to_path_buf()));
        }
        self
    }

    /// Subtracts the rules of an ignore file from the current scope.
    ///
    /// Every rule is negated. If no rules exist yet, a catch-all inclusion is
    /// inserted first so that there is something to subtract from.
    pub fn subtract_ignore_file(&mut self, path: &Path) -> &mut Self {
        let Some(content) = read_rule_file(path) else {
            return self;
        };
        if self.rules.is_empty() {
            self.add_rule(CATCH_ALL, RuleSource::CatchAll);
        }
        debug!("Subtracting ignore rules from {}", path.display());
        for line in content.lines() {
            let line = line.trim_end();
            if is_blank_or_comment(line) {
                continue;
            }
            self.add_rule(&negate(line), RuleSource::Gitignore(path.to_path_buf()));
        }
        self
    }

    /// Finishes the matcher.
    pub fn build(self) -> ScopeMatcher {
        debug!("Scope matcher built with {} rule(s)", self.rules.len());
        ScopeMatcher {
            rules: self.rules,
            matchers: self.matchers,
        }
    }
}

/// Decides which repository paths are in scope for ownership evaluation.
#[derive(Debug, Clone)]
pub struct ScopeMatcher {
    rules: Vec<ScopeRule>,
    /// One single-rule matcher per entry in `rules`.
    matchers: Vec<Gitignore>,
}

impl ScopeMatcher {
    /// Returns a builder rooted at `root`.
    pub fn builder(root: impl AsRef<Path>) -> ScopeMatcherBuilder {
        ScopeMatcherBuilder::new(root)
    }

    /// Builds the matcher for a run from all four rule sources.
    pub fn from_config(config: &RunConfig) -> Self {
        let root = config.repo_path();
        let mut builder = ScopeMatcherBuilder::new(root);

        if let Some(path) = first_existing(root, &config.whitelist_candidates()) {
            builder.add_file(&path);
        }
        if let Some(path) = &config.whitelist_file {
            builder.add_file(path);
        }
        builder.add_rules(&config.whitelist_rules);

        let gitignore = root.join(GITIGNORE_FILE);
        if gitignore.is_file() {
            builder.subtract_ignore_file(&gitignore);
        }

        builder.build()
    }

    /// A matcher with no rules; every path is in scope.
    pub fn open() -> Self {
        ScopeMatcherBuilder::new(".").build()
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[ScopeRule] {
        &self.rules
    }

    /// Returns true if no rules were collected.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if `path` (relative to the repository root) is in scope.
    ///
    /// A rule applies when it matches the path or one of its parent
    /// directories. The last applicable rule decides; no applicable rule
    /// means out of scope.
    pub fn is_in_scope(&self, path: impl AsRef<Path>) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        let path = path.as_ref();
        let path = path.strip_prefix("/").unwrap_or(path);

        for matcher in self.matchers.iter().rev() {
            match matcher.matched_path_or_any_parents(path, false) {
                Match::Ignore(_) => return true,
                Match::Whitelist(_) => return false,
                Match::None => {}
            }
        }
        false
    }
}

fn compile_rule(root: &Path, rule: &str) -> Result<Gitignore, ignore::Error> {
    let mut builder = GitignoreBuilder::new(root);
    builder.add_line(None, rule)?;
    builder.build()
}

/// Returns the first candidate that exists as a file under `root`.
pub fn first_existing(root: &Path, candidates: &[String]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.is_file())
}

fn read_rule_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            trace!("Rule file {} not present", path.display());
            None
        }
        Err(e) => {
            warn!("Skipping unreadable rule file {}: {}", path.display(), e);
            None
        }
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Flips the polarity of an ignore-file rule.
fn negate(rule: &str) -> String {
    match rule.strip_prefix('!') {
        Some(included) => included.to_string(),
        None => format!("!{}", rule),
    }
}
