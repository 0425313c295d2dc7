//! Parser for ownership declaration files.
//!
//! Turns the raw lines of a CODEOWNERS-style file into [`Declaration`]
//! records that keep their original line numbers.
//!
//! # Example
//!
//! ```rust
//! use codeowner_validator_core::parse::parse_declarations;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean
//! /docs/
//! "#;
//!
//! let declarations = parse_declarations(input);
//! assert_eq!(declarations.len(), 2);
//! assert!(declarations[0].is_pattern());
//! assert!(declarations[1].is_unrecognized());
//! ```

mod ast;
mod lexer;
mod parser;
pub mod span;

pub use ast::{Declaration, DeclarationKind, Owner};
pub use parser::{parse_declarations, parse_line, parse_lines, read_declarations};
pub use span::Span;
