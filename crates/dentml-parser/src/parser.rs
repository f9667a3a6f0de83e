//! Document parser for dentml.
//!
//! Grammar:
//!
//! ```text
//! document  := { eol | tag | string | space }* eof
//! tag       := name { class | id | attribute | space }*
//! attribute := name eq string
//! ```
//!
//! A tag stops absorbing at the first token that is none of its modifier
//! kinds, so a second bare name on the same line starts a sibling tag.
//! Parsing is all-or-nothing: the first mismatch aborts the whole document.

use crate::ast::{Attribute, Class, Document, Id, Node, Tag, Whitespace};
use crate::{Error, SyntaxError};
use dentml_lexer::{Span, Token, TokenKind};

/// Token kinds that may start a top-level item, plus end of input.
const DOCUMENT_ITEMS: &[TokenKind] = &[
    TokenKind::Eol,
    TokenKind::Name,
    TokenKind::String,
    TokenKind::Space,
    TokenKind::Eof,
];

/// dentml document parser.
///
/// Consumes the full token sequence produced by `dentml_lexer::Scanner`.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Tokenize and parse source text into a document.
    pub fn parse(source: &str) -> Result<Document, Error> {
        let tokens = dentml_lexer::Scanner::tokenize(source)?;
        let document = Parser::new(tokens).parse_document()?;
        Ok(document)
    }

    /// Parse a full document.
    pub fn parse_document(&mut self) -> Result<Document, SyntaxError> {
        let mut nodes = Vec::new();

        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Eol => {
                    let text = self.advance().text;
                    nodes.push(Node::Eol(text));
                }
                TokenKind::Space => {
                    let text = self.advance().text;
                    nodes.push(Node::Space(Whitespace::new(text)));
                }
                TokenKind::String => {
                    let text = self.advance().text;
                    nodes.push(Node::Text(text));
                }
                TokenKind::Name => {
                    nodes.push(Node::Tag(self.parse_tag()?));
                }
                _ => return Err(self.error(DOCUMENT_ITEMS)),
            }
        }

        tracing::debug!(nodes = nodes.len(), "parsed document");
        Ok(Document { nodes })
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// Parse a tag and every modifier that follows it:
    /// ```text
    /// form.wide #main_form method="POST"
    /// ```
    /// Whitespace between modifiers is a separator and is dropped.
    fn parse_tag(&mut self) -> Result<Tag, SyntaxError> {
        let mut tag = Tag::new(self.advance().text);

        loop {
            match self.peek().kind {
                TokenKind::Class => {
                    let name = strip_sigil(self.advance().text);
                    tag.classes.push(Class { name });
                }
                TokenKind::Id => {
                    let name = strip_sigil(self.advance().text);
                    tag.ids.push(Id { name });
                }
                TokenKind::Space => {
                    self.advance();
                }
                TokenKind::Name if self.peek_next_is(TokenKind::Eq) => {
                    tag.attributes.push(self.parse_attribute()?);
                }
                _ => break,
            }
        }

        Ok(tag)
    }

    /// Parse `name="value"`. The caller has checked that `=` follows the name.
    fn parse_attribute(&mut self) -> Result<Attribute, SyntaxError> {
        let name = self.advance().text;
        self.advance(); // consume =

        if self.peek().kind != TokenKind::String {
            return Err(self.error(&[TokenKind::String]));
        }
        let value = self.advance().text;

        Ok(Attribute { name, value })
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        static EOF: std::sync::LazyLock<Token> =
            std::sync::LazyLock::new(|| Token::new(TokenKind::Eof, "", Span::new(0, 0, 0, 0)));
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    fn peek_next_is(&self, kind: TokenKind) -> bool {
        self.tokens.get(self.pos + 1).is_some_and(|t| t.kind == kind)
    }

    /// Take the current token and move past it.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, expected: &[TokenKind]) -> SyntaxError {
        let token = self.peek();
        SyntaxError {
            expected: expected.to_vec(),
            found: token.kind,
            offset: token.span.start,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Drop the leading `.` or `#` of a class or id token.
fn strip_sigil(mut text: String) -> String {
    text.remove(0);
    text
}
