//! dentml Parser
//!
//! Groups the lexer's token stream into a flat `Document`: tags with their
//! classes, ids and attributes, standalone text literals, whitespace runs and
//! line breaks. Nesting is not represented here; the renderer rebuilds it from
//! whitespace widths.

pub mod ast;
pub mod parser;

pub use ast::{Attribute, Class, Document, Id, Node, Tag, Whitespace};
pub use dentml_lexer::LexerError;
pub use parser::Parser;

use dentml_lexer::TokenKind;

/// Syntax error: the token sequence does not match the document grammar.
///
/// `expected` lists every token kind that would have been accepted at the
/// failing position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Syntax error at line {line}, column {column} (offset {offset}): expected {}, found {found}",
    describe_expected(.expected)
)]
pub struct SyntaxError {
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexerError),
    /// A grammar error.
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
}

/// `[a]` -> "a", `[a, b]` -> "a or b", `[a, b, c]` -> "a, b or c".
fn describe_expected(expected: &[TokenKind]) -> String {
    let names: Vec<&str> = expected.iter().map(|k| k.describe()).collect();
    match names.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message_lists_expected() {
        let err = SyntaxError {
            expected: vec![TokenKind::Eol, TokenKind::Name, TokenKind::Eof],
            found: TokenKind::Eq,
            offset: 4,
            line: 1,
            column: 5,
        };
        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 5 (offset 4): expected line break, name or end of input, found `=`"
        );
    }

    #[test]
    fn test_single_expected_kind() {
        assert_eq!(describe_expected(&[TokenKind::String]), "string");
    }
}
