//! Declaration records produced by the parser.
//!
//! Each record describes one physical line of the ownership file and keeps
//! its 1-based line number so diagnostics can cite it.

use super::span::Span;
use std::fmt::{self, Display};

/// An owner token following a pattern.
///
/// Owners are not validated; any non-whitespace token is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The token as written (e.g. "@org/team", "dev@example.com").
    pub text: String,
    /// Location in the source file.
    pub span: Span,
}

impl Owner {
    /// Creates a new owner token.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the owner text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What a declaration line contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A path pattern with at least one owner.
    Pattern {
        /// The path pattern as written; may start with `/`.
        pattern: String,
        /// Location of the pattern token.
        pattern_span: Span,
        /// Owners in the order written.
        owners: Vec<Owner>,
    },
    /// A comment line.
    Comment {
        /// Text after the leading `#`.
        content: String,
    },
    /// An empty or whitespace-only line.
    Blank,
    /// A path token with no owners.
    Unrecognized {
        /// The path token as written.
        path: String,
        /// Location of the path token.
        path_span: Span,
    },
}

/// One line of the ownership file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// 1-based line number.
    pub line: usize,
    /// The line text without its line ending.
    pub raw: String,
    /// Parsed content.
    pub kind: DeclarationKind,
    /// Location of the whole line.
    pub span: Span,
}

impl Declaration {
    /// Creates a declaration.
    pub fn new(line: usize, raw: impl Into<String>, kind: DeclarationKind, span: Span) -> Self {
        Self {
            line,
            raw: raw.into(),
            kind,
            span,
        }
    }

    /// Returns true for a pattern with owners.
    pub fn is_pattern(&self) -> bool {
        matches!(self.kind, DeclarationKind::Pattern { .. })
    }

    /// Returns true for a path with no owners.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self.kind, DeclarationKind::Unrecognized { .. })
    }

    /// Returns true for blank and comment lines.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            DeclarationKind::Blank | DeclarationKind::Comment { .. }
        )
    }

    /// Returns the pattern text of a `Pattern` declaration.
    pub fn pattern(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::Pattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Returns the leading path token of a `Pattern` or `Unrecognized` line.
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::Pattern { pattern, .. } => Some(pattern),
            DeclarationKind::Unrecognized { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the owners of a `Pattern` declaration (empty otherwise).
    pub fn owners(&self) -> &[Owner] {
        match &self.kind {
            DeclarationKind::Pattern { owners, .. } => owners,
            _ => &[],
        }
    }

    /// Returns the first owner listed on a `Pattern` line.
    pub fn primary_owner(&self) -> Option<&Owner> {
        self.owners().first()
    }

    /// Returns true if `owner` is listed on this line.
    pub fn has_owner(&self, owner: &str) -> bool {
        self.owners().iter().any(|o| o.text == owner)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeclarationKind::Pattern { pattern, owners, .. } => {
                write!(f, "{}", pattern)?;
                for owner in owners {
                    write!(f, " {}", owner)?;
                }
                Ok(())
            }
            DeclarationKind::Comment { content } => write!(f, "#{}", content),
            DeclarationKind::Blank => Ok(()),
            DeclarationKind::Unrecognized { path, .. } => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_line(pattern: &str, owners: &[&str]) -> Declaration {
        Declaration::new(
            1,
            "",
            DeclarationKind::Pattern {
                pattern: pattern.to_string(),
                pattern_span: Span::default(),
                owners: owners
                    .iter()
                    .map(|o| Owner::new(*o, Span::default()))
                    .collect(),
            },
            Span::default(),
        )
    }

    #[test]
    fn pattern_accessors() {
        let decl = pattern_line("/docs/", &["@docs", "dev@example.com"]);
        assert!(decl.is_pattern());
        assert!(!decl.is_unrecognized());
        assert_eq!(decl.pattern(), Some("/docs/"));
        assert_eq!(decl.path(), Some("/docs/"));
        assert_eq!(decl.owners().len(), 2);
        assert!(decl.has_owner("@docs"));
        assert!(!decl.has_owner("@other"));
    }

    #[test]
    fn unrecognized_has_path_but_no_pattern() {
        let decl = Declaration::new(
            3,
            "lib/",
            DeclarationKind::Unrecognized {
                path: "lib/".to_string(),
                path_span: Span::default(),
            },
            Span::default(),
        );
        assert!(decl.is_unrecognized());
        assert_eq!(decl.pattern(), None);
        assert_eq!(decl.path(), Some("lib/"));
        assert!(decl.owners().is_empty());
    }

    #[test]
    fn display_pattern_line() {
        let decl = pattern_line("*.rs", &["@rust", "@core"]);
        assert_eq!(decl.to_string(), "*.rs @rust @core");
    }

    #[test]
    fn trivia_kinds() {
        let blank = Declaration::new(1, "", DeclarationKind::Blank, Span::default());
        let comment = Declaration::new(
            2,
            "# hi",
            DeclarationKind::Comment {
                content: " hi".to_string(),
            },
            Span::default(),
        );
        assert!(blank.is_trivia());
        assert!(comment.is_trivia());
        assert_eq!(comment.to_string(), "# hi");
    }
}
