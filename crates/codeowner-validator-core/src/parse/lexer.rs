//! Token parsers for declaration lines.
//!
//! A declaration line is a path token followed by zero or more owner tokens.
//! A `#` at the start of a token ends the line.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
};

/// Characters that can appear in a path or owner token.
fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

/// Consumes any run of whitespace, including CR, form feed and non-breaking space.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (whitespace0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Raw tokens of a declaration line, with byte offsets within the line.
#[derive(Debug, Clone)]
pub struct LineTokens<'a> {
    /// The leading path token.
    pub path: &'a str,
    /// Byte offset of the path token.
    pub path_offset: usize,
    /// Owner tokens in order.
    pub owners: Vec<&'a str>,
    /// Byte offsets of each owner token.
    pub owner_offsets: Vec<usize>,
}

/// Parses a path token and any owner tokens that follow it.
///
/// Unlike a strict rule parser this accepts a line with no owners; the
/// caller decides how to classify it.
pub fn parse_line_tokens(input: &str) -> IResult<&str, LineTokens<'_>> {
    let (after_ws, leading_ws) = whitespace0(input)?;
    let path_offset = leading_ws.len();

    let (mut current, path) = take_while1(is_token_char)(after_ws)?;
    let mut current_offset = path_offset + path.len();

    let mut owners = Vec::new();
    let mut owner_offsets = Vec::new();

    loop {
        let (after_ws, ws) = whitespace0(current)?;
        current_offset += ws.len();

        if after_ws.is_empty() || after_ws.starts_with('#') {
            current = after_ws;
            break;
        }

        let (after_owner, owner) = take_while1(is_token_char)(after_ws)?;
        owner_offsets.push(current_offset);
        owners.push(owner);
        current_offset += owner.len();
        current = after_owner;
    }

    Ok((
        current,
        LineTokens {
            path,
            path_offset,
            owners,
            owner_offsets,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comment_line_with_leading_whitespace() {
        let (_rest, content) = parse_comment_line("   # comment").unwrap();
        assert_eq!(content, " comment");
    }

    #[test]
    fn parse_comment_line_rejects_pattern() {
        assert!(parse_comment_line("*.rs @owner").is_err());
    }

    #[test]
    fn is_blank_line_cases() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line("\t  \t"));
        assert!(!is_blank_line("*.rs @owner"));
        assert!(!is_blank_line("# comment"));
    }

    #[test]
    fn single_owner() {
        let (_rest, tokens) = parse_line_tokens("*.rs @owner").unwrap();
        assert_eq!(tokens.path, "*.rs");
        assert_eq!(tokens.path_offset, 0);
        assert_eq!(tokens.owners, vec!["@owner"]);
        assert_eq!(tokens.owner_offsets, vec![5]);
    }

    #[test]
    fn multiple_owners_of_any_shape() {
        let (_rest, tokens) =
            parse_line_tokens("/src/ @dev @github/core dev@example.com plain").unwrap();
        assert_eq!(tokens.path, "/src/");
        assert_eq!(
            tokens.owners,
            vec!["@dev", "@github/core", "dev@example.com", "plain"]
        );
    }

    #[test]
    fn leading_whitespace_offsets() {
        let (_rest, tokens) = parse_line_tokens("  *.md\t@docs").unwrap();
        assert_eq!(tokens.path, "*.md");
        assert_eq!(tokens.path_offset, 2);
        assert_eq!(tokens.owner_offsets, vec![7]);
    }

    #[test]
    fn trailing_comment_ends_owner_list() {
        let (rest, tokens) = parse_line_tokens("*.js @frontend # JavaScript files").unwrap();
        assert_eq!(tokens.owners, vec!["@frontend"]);
        assert!(rest.starts_with('#'));
    }

    #[test]
    fn path_without_owners() {
        let (rest, tokens) = parse_line_tokens("lib/foo.rb   ").unwrap();
        assert_eq!(tokens.path, "lib/foo.rb");
        assert!(tokens.owners.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn trailing_carriage_return_and_form_feed() {
        let (rest, tokens) = parse_line_tokens("*.rs @rust\r").unwrap();
        assert_eq!(tokens.owners, vec!["@rust"]);
        assert!(rest.is_empty());

        let (_rest, tokens) = parse_line_tokens("*.rs @rust\u{0c}").unwrap();
        assert_eq!(tokens.path, "*.rs");
        assert_eq!(tokens.owners, vec!["@rust"]);
    }

    #[test]
    fn non_breaking_space_separates_tokens() {
        let (_rest, tokens) = parse_line_tokens("*.rs\u{a0}@rust").unwrap();
        assert_eq!(tokens.path, "*.rs");
        assert_eq!(tokens.owners, vec!["@rust"]);
        // U+00A0 is two bytes in UTF-8.
        assert_eq!(tokens.owner_offsets, vec![6]);
    }

    #[test]
    fn comment_is_not_a_path() {
        assert!(parse_line_tokens("# comment").is_err());
    }
}
