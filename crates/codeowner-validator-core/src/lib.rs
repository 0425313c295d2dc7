//! CODEOWNERS Validator Core
//!
//! A library for checking a repository's ownership declaration file against
//! the files that actually exist.
//!
//! # Features
//!
//! - **Scope**: gitignore-style inclusion/exclusion rules pick which files need an owner
//! - **Parser**: declaration lines become typed records that keep their line numbers
//! - **Index**: unowned files, duplicated patterns and dangling paths
//! - **Validation**: independent checks producing grouped diagnostics
//!
//! # Quick Start
//!
//! ```no_run
//! use codeowner_validator_core::{OwnershipIndex, RunConfig, Validator};
//!
//! let config = RunConfig::new(".").with_whitelist_rules(["config/**"]);
//! let index = OwnershipIndex::new(&config)?;
//!
//! let report = Validator::with_default_checks()
//!     .with_verbose(config.verbose)
//!     .validate(&index)?;
//!
//! if report.is_ok() {
//!     println!("Ownership file is valid!");
//! } else {
//!     for finding in report.findings() {
//!         eprintln!("{}", finding);
//!     }
//! }
//! # Ok::<(), codeowner_validator_core::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`scope`]: which repository paths are in scope
//! - [`parse`]: parser for ownership files
//! - [`matching`]: matching declared patterns against paths
//! - [`index`]: ownership queries over a repository
//! - [`validate`]: checks and their diagnostics
//! - [`git`]: git collaborators

pub mod config;
pub mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod git;
pub mod index;
pub mod matching;
pub mod parse;
pub mod scope;
pub mod validate;

// Re-export commonly used types at the crate root
pub use config::RunConfig;
pub use error::{Error, Result};
pub use git::{ChangeStatus, GitCli, GitClient};
pub use index::{OwnershipIndex, find_codeowners_file};
pub use parse::{Declaration, DeclarationKind, parse_declarations};
pub use scope::ScopeMatcher;
pub use validate::{Check, Comment, CommentGroup, Finding, Severity, ValidationReport, Validator};
