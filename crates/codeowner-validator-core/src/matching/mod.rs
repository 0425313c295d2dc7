//! Matching declared ownership patterns against file paths.
//!
//! Declaration patterns follow the CODEOWNERS flavour of gitignore syntax:
//!
//! - `*` matches any sequence of non-slash characters
//! - `**` matches any sequence including slashes
//! - `/` at the start anchors to the repository root
//! - `/` at the end matches only directories (and so everything below them)
//! - patterns without a `/` match at any depth
//! - a pattern naming a directory also owns everything below it

use crate::parse::Declaration;
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use log::warn;

/// A compiled declaration pattern.
#[derive(Debug, Clone)]
pub struct OwnerPattern {
    original: String,
    matchers: Vec<GlobMatcher>,
}

impl OwnerPattern {
    /// Compiles a declaration pattern.
    ///
    /// Returns `None` if the pattern is not a valid glob.
    pub fn new(pattern: &str) -> Option<Self> {
        let globs = compile_globs(pattern)?;
        Some(Self {
            original: pattern.to_string(),
            matchers: globs.iter().map(Glob::compile_matcher).collect(),
        })
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks a path relative to the repository root, using `/` separators.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.matchers.iter().any(|m| m.is_match(path))
    }
}

/// Matches paths against every `Pattern` declaration at once.
///
/// Results refer to declarations by their position in the slice the matcher
/// was built from.
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    glob_set: GlobSet,
    /// Declaration index for each glob in `glob_set`.
    owners_of_glob: Vec<usize>,
}

impl DeclarationMatcher {
    /// Builds a matcher over the `Pattern` declarations in `declarations`.
    ///
    /// Patterns that fail to compile are logged and never match.
    pub fn new(declarations: &[Declaration]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut owners_of_glob = Vec::new();

        for (idx, decl) in declarations.iter().enumerate() {
            let Some(pattern) = decl.pattern() else {
                continue;
            };
            match compile_globs(pattern) {
                Some(globs) => {
                    for glob in globs {
                        builder.add(glob);
                        owners_of_glob.push(idx);
                    }
                }
                None => warn!("line {}: cannot compile pattern '{}'", decl.line, pattern),
            }
        }

        let glob_set = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build pattern set: {}", e);
            owners_of_glob.clear();
            GlobSet::empty()
        });

        Self {
            glob_set,
            owners_of_glob,
        }
    }

    /// Returns true if any declaration matches `path`.
    pub fn is_match(&self, path: &str) -> bool {
        self.glob_set.is_match(path.strip_prefix('/').unwrap_or(path))
    }

    /// Returns the index of the first declaration (in file order) matching `path`.
    pub fn first_match(&self, path: &str) -> Option<usize> {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.glob_set
            .matches(path)
            .into_iter()
            .map(|glob| self.owners_of_glob[glob])
            .min()
    }
}

/// Compiles a declaration pattern into one or two globs.
fn compile_globs(pattern: &str) -> Option<Vec<Glob>> {
    let (glob_pattern, directory_only) = normalize_pattern(pattern);
    let mut sources = vec![glob_pattern.clone()];
    if !directory_only && !glob_pattern.ends_with("**") {
        // A pattern naming a directory owns its contents.
        sources.push(format!("{}/**", glob_pattern));
    }

    let globs = sources
        .iter()
        .map(|source| {
            GlobBuilder::new(source)
                .literal_separator(true)
                .build()
                .ok()
        })
        .collect::<Option<Vec<_>>>()?;
    Some(globs)
}

/// Normalizes a declaration pattern to a glob pattern.
///
/// Returns (glob_pattern, is_directory_only).
fn normalize_pattern(pattern: &str) -> (String, bool) {
    let mut pattern = pattern.to_string();
    let mut directory_only = false;

    if pattern.ends_with('/') {
        directory_only = true;
        pattern = pattern.trim_end_matches('/').to_string();
    }

    if let Some(stripped) = pattern.strip_prefix('/') {
        pattern = stripped.to_string();
    } else if !pattern.contains('/') {
        pattern = format!("**/{}", pattern);
    }

    if directory_only {
        pattern = format!("{}/**", pattern);
    }

    (pattern, directory_only)
}
