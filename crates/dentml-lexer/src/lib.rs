//! dentml Lexer
//!
//! Tokenizes dentml source into a flat stream of typed tokens.
//! Line breaks and whitespace runs are kept as tokens of their own: indentation
//! is measured later by the renderer, so the lexer never interprets it.
//!
//! # Example
//!
//! ```
//! use dentml_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("div.box").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Name);
//! assert_eq!(tokens[1].kind, TokenKind::Class);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Lexer error with position information.
///
/// `offset` counts characters from the start of the source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lex error at line {line}, column {column} (offset {offset}): {message}")]
pub struct LexerError {
    pub message: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}
