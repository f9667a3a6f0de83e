use std::fmt;

/// A position in source text, tracking line and column for error reporting.
///
/// `start` and `end` are character offsets; `line` and `column` are 1-based
/// and refer to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the spanned text in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for dentml source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One or more `\r` / `\n` characters.
    Eol,
    /// A run of non-line-break whitespace.
    Space,
    /// A double-quoted literal. The token text is the content between the quotes.
    String,
    /// `[A-Za-z_][A-Za-z_0-9]*`
    Name,
    /// `.name`
    Class,
    /// `#name`
    Id,
    /// `=`
    Eq,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Eol => "line break",
            TokenKind::Space => "whitespace",
            TokenKind::String => "string",
            TokenKind::Name => "name",
            TokenKind::Class => "class",
            TokenKind::Id => "id",
            TokenKind::Eq => "`=`",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token produced by the dentml lexer.
///
/// `text` is the raw matched text, except for strings where the surrounding
/// quotes are stripped. Escape sequences are never decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Length of the matched source text in characters (quotes included for strings).
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
