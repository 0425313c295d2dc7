//! Synthetic ownership files and repository trees for benchmarking.
//!
//! Uses the declaration types directly so the output always parses.
//! Generated declarations carry placeholder spans and line numbers.

use crate::parse::{Declaration, DeclarationKind, Owner, Span};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::path::Path;

/// Configuration for generating ownership files and trees.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of pattern lines to generate.
    pub num_rules: usize,
    /// Number of comment lines to generate.
    pub num_comments: usize,
    /// Maximum owners per rule (1-4 typical).
    pub max_owners_per_rule: usize,
    /// Number of files to place in a generated tree.
    pub num_files: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 4,
            num_files: 500,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with `num_rules` rules, ~20% comments and five files
    /// per rule.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            num_files: num_rules * 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }

    /// Set the number of files in a generated tree.
    pub fn with_files(mut self, num_files: usize) -> Self {
        self.num_files = num_files;
        self
    }
}

/// Vocabulary for generating realistic patterns, owners and paths.
mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*.{ext}",
        "**/*.{ext}",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "/{dir}/sub/",
        "{dir}/**/test_*.{ext}",
        "/{dir}/file.{ext}",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "rb", "yml", "md", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &["src", "lib", "spec", "docs", "config", "scripts"];
    pub const FILE_STEMS: &[&str] = &["file", "nested", "test_example", "main"];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer"];
    pub const ORGS: &[&str] = &["acme", "orion"];
    pub const TEAMS: &[&str] = &["core", "platform", "delivery", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Services", "Configuration", "Documentation"];
}

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

fn declaration(kind: DeclarationKind) -> Declaration {
    Declaration::new(0, String::new(), kind, Span::default())
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generates declarations, including comment and blank lines.
pub fn generate_declarations(config: &GeneratorConfig) -> Vec<Declaration> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut lines = Vec::with_capacity(config.num_rules + config.num_comments * 2 + 2);

    lines.push(declaration(DeclarationKind::Comment {
        content: " Auto-generated ownership file for benchmarking".to_string(),
    }));
    lines.push(declaration(DeclarationKind::Blank));

    let mut rules_added = 0;
    let mut comments_added = 0;

    while rules_added < config.num_rules {
        if comments_added < config.num_comments
            && rules_added > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            lines.push(declaration(DeclarationKind::Blank));
            lines.push(declaration(DeclarationKind::Comment {
                content: format!(" {} section", pick(&mut rng, SECTION_NAMES)),
            }));
            comments_added += 1;
        }

        let template = pick(&mut rng, PATTERN_TEMPLATES);
        let pattern = template
            .replace("{ext}", pick(&mut rng, EXTENSIONS))
            .replace("{dir}", pick(&mut rng, DIRECTORIES));

        let num_owners = rng.random_range(1..=config.max_owners_per_rule);
        let owners = (0..num_owners).map(|_| generate_owner(&mut rng)).collect();

        lines.push(declaration(DeclarationKind::Pattern {
            pattern,
            pattern_span: Span::default(),
            owners,
        }));
        rules_added += 1;
    }

    lines
}

/// Generate a random owner token.
fn generate_owner(rng: &mut StdRng) -> Owner {
    use vocabulary::*;

    let text = match rng.random_range(0..10) {
        0..5 => format!("@{}", pick(rng, USERNAMES)),
        5..8 => format!("@{}/{}", pick(rng, ORGS), pick(rng, TEAMS)),
        _ => format!("{}@example.com", pick(rng, USERNAMES)),
    };
    Owner::new(text, Span::default())
}

/// Generates an ownership file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    let mut out = String::new();
    for decl in generate_declarations(config) {
        out.push_str(&decl.to_string());
        out.push('\n');
    }
    out
}

/// Returns deterministic relative file paths drawn from the same vocabulary
/// as the generated patterns.
pub fn generate_paths(config: &GeneratorConfig) -> Vec<String> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut paths: Vec<String> = (0..config.num_files)
        .map(|n| {
            let stem = pick(&mut rng, FILE_STEMS);
            let ext = pick(&mut rng, EXTENSIONS);
            match rng.random_range(0..3) {
                0 => format!("{stem}_{n}.{ext}"),
                1 => format!("{}/{stem}_{n}.{ext}", pick(&mut rng, DIRECTORIES)),
                _ => format!("{}/sub/{stem}_{n}.{ext}", pick(&mut rng, DIRECTORIES)),
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Creates the generated files under `root` along with an ownership file at
/// `root/CODEOWNERS`. Returns the relative paths created.
pub fn write_repository(root: &Path, config: &GeneratorConfig) -> io::Result<Vec<String>> {
    let paths = generate_paths(config);
    for path in &paths {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, "")?;
    }
    fs::write(root.join("CODEOWNERS"), generate(config))?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::index::OwnershipIndex;
    use crate::parse::parse_declarations;
    use tempfile::TempDir;

    #[test]
    fn generated_text_parses_as_patterns() {
        let content = generate(&GeneratorConfig::small());
        let decls = parse_declarations(&content);
        assert_eq!(decls.len(), 10);
        assert!(decls.iter().all(Declaration::is_pattern));
    }

    #[test]
    fn large_rule_count() {
        let decls = parse_declarations(&generate(&GeneratorConfig::large()));
        assert_eq!(decls.len(), 1_000);
    }

    #[test]
    fn deterministic_generation() {
        let config = GeneratorConfig::medium();
        assert_eq!(generate(&config), generate(&config));
        assert_eq!(generate_paths(&config), generate_paths(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let content1 = generate(&GeneratorConfig::medium().with_seed(1));
        let content2 = generate(&GeneratorConfig::medium().with_seed(2));
        assert_ne!(content1, content2);
    }

    #[test]
    fn zero_rules_produces_header_only() {
        let content = generate(&GeneratorConfig::new(0));
        assert!(parse_declarations(&content).is_empty());
        assert!(content.starts_with("# Auto-generated"));
    }

    #[test]
    fn with_max_owners_minimum() {
        let config = GeneratorConfig::default().with_max_owners(0);
        assert_eq!(config.max_owners_per_rule, 1);
    }

    #[test]
    fn written_repository_indexes() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::small().with_files(20);
        let paths = write_repository(dir.path(), &config).unwrap();
        assert_eq!(paths.len(), 20);

        let index = OwnershipIndex::new(&RunConfig::new(dir.path())).unwrap();
        // Generated paths plus the ownership file itself.
        assert_eq!(index.included_files().len(), 21);
        assert_eq!(index.declarations().len(), 10);
    }
}
