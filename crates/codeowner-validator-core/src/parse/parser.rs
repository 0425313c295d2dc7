//! Line and file-level parsing of the ownership file.

use super::ast::{Declaration, DeclarationKind, Owner};
use super::lexer::{is_blank_line, parse_comment_line, parse_line_tokens};
use super::span::Span;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parses a single physical line.
///
/// Never fails: a line that is not blank, a comment, or a pattern with
/// owners is classified as `Unrecognized`.
pub fn parse_line(line_text: &str, line_num: usize, line_offset: usize) -> Declaration {
    let line_span = Span::new(line_offset, line_num, 1, line_text.len());

    if is_blank_line(line_text) {
        return Declaration::new(line_num, line_text, DeclarationKind::Blank, line_span);
    }

    if let Ok((_, content)) = parse_comment_line(line_text) {
        return Declaration::new(
            line_num,
            line_text,
            DeclarationKind::Comment {
                content: content.to_string(),
            },
            line_span,
        );
    }

    let kind = match parse_line_tokens(line_text) {
        Ok((_, tokens)) => {
            let path_span = Span::new(
                line_offset + tokens.path_offset,
                line_num,
                tokens.path_offset + 1,
                tokens.path.len(),
            );

            if tokens.owners.is_empty() {
                DeclarationKind::Unrecognized {
                    path: tokens.path.to_string(),
                    path_span,
                }
            } else {
                let owners = tokens
                    .owners
                    .iter()
                    .zip(tokens.owner_offsets.iter())
                    .map(|(text, &offset)| {
                        let span =
                            Span::new(line_offset + offset, line_num, offset + 1, text.len());
                        Owner::new(*text, span)
                    })
                    .collect();
                DeclarationKind::Pattern {
                    pattern: tokens.path.to_string(),
                    pattern_span: path_span,
                    owners,
                }
            }
        }
        Err(_) => DeclarationKind::Unrecognized {
            path: line_text.trim().to_string(),
            path_span: line_span,
        },
    };

    Declaration::new(line_num, line_text, kind, line_span)
}

/// Parses every physical line, including blank and comment lines.
pub fn parse_lines(input: &str) -> Vec<Declaration> {
    let mut lines = Vec::new();
    let mut offset = 0;
    let mut remaining = input;

    for (line_idx, line_text) in input.lines().enumerate() {
        let declaration = parse_line(line_text, line_idx + 1, offset);
        trace!("Line {}: {:?}", declaration.line, declaration.kind);
        lines.push(declaration);

        // Byte offset of the next line, for both LF and CRLF endings.
        let after_content = &remaining[line_text.len()..];
        let consumed = if after_content.starts_with("\r\n") {
            line_text.len() + 2
        } else if after_content.starts_with('\n') {
            line_text.len() + 1
        } else {
            line_text.len()
        };
        offset += consumed;
        remaining = &remaining[consumed..];
    }

    lines
}

/// Parses the ownership file text into declarations.
///
/// Blank and comment lines are dropped; every other line is kept with its
/// original line number.
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    debug!("Parsing ownership declarations ({} bytes)", input.len());
    let declarations: Vec<Declaration> = parse_lines(input)
        .into_iter()
        .filter(|decl| !decl.is_trivia())
        .collect();
    debug!("Parsed {} declaration(s)", declarations.len());
    declarations
}

/// Reads and parses the ownership file at `path`.
///
/// A missing file yields an empty sequence.
pub fn read_declarations(path: &Path) -> Result<Vec<Declaration>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_declarations(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No ownership file at {}", path.display());
            Ok(Vec::new())
        }
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
