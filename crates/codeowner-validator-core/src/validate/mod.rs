//! Validation pipeline for ownership files.
//!
//! Checks run over an [`OwnershipIndex`](crate::index::OwnershipIndex) and
//! report [`Comment`]s, grouped per check in a [`ValidationReport`].
//!
//! # Example
//!
//! ```no_run
//! use codeowner_validator_core::config::RunConfig;
//! use codeowner_validator_core::index::OwnershipIndex;
//! use codeowner_validator_core::validate::Validator;
//!
//! let config = RunConfig::new("/path/to/repo");
//! let index = OwnershipIndex::new(&config)?;
//! let report = Validator::with_default_checks().validate(&index)?;
//!
//! for group in &report.groups {
//!     for comment in &group.comments {
//!         eprintln!("{}", comment);
//!     }
//! }
//! # Ok::<(), codeowner_validator_core::Error>(())
//! ```

pub mod checks;
mod comment;

pub use checks::{Check, CheckContext, Validator};
pub use comment::{Comment, CommentGroup, Finding, Severity, ValidationReport};
