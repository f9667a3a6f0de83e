use crate::token::{Span, Token, TokenKind};
use crate::LexerError;

/// dentml source scanner.
///
/// Splits the whole source into tokens with no gaps: every character ends up
/// in exactly one token. Whitespace is tokenized rather than skipped because
/// indentation width is significant downstream.
///
/// The scanner keeps per-run position state only, so a fresh one is built
/// for every call to [`Scanner::tokenize`].
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens ending with `Eof`.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()?;
        tracing::debug!(tokens = scanner.tokens.len(), "tokenized source");
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), LexerError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let span = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new(TokenKind::Eof, "", span));
        Ok(())
    }

    /// Scan the next token.
    fn scan_token(&mut self) -> Result<(), LexerError> {
        let ch = self.peek();

        match ch {
            '\r' | '\n' => {
                self.scan_while(TokenKind::Eol, is_line_break);
                Ok(())
            }
            c if is_space(c) => {
                self.scan_while(TokenKind::Space, is_space);
                Ok(())
            }
            '"' => self.scan_string(),
            '.' => self.scan_prefixed(TokenKind::Class),
            '#' => self.scan_prefixed(TokenKind::Id),
            '=' => {
                let (start, line, column) = (self.pos, self.line, self.column);
                self.advance();
                self.push(TokenKind::Eq, start, line, column);
                Ok(())
            }
            c if is_name_start(c) => {
                self.scan_while(TokenKind::Name, is_name_char);
                Ok(())
            }
            _ => Err(self.error(format!("Unexpected character: '{}'", ch.escape_debug()))),
        }
    }

    // --- Scanners ---

    /// Consume a maximal run of characters matching `pred` as one token.
    fn scan_while(&mut self, kind: TokenKind, pred: fn(char) -> bool) {
        let (start, line, column) = (self.pos, self.line, self.column);

        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }

        self.push(kind, start, line, column);
    }

    /// Scan `.name` or `#name`. The sigil must be followed directly by a name.
    fn scan_prefixed(&mut self, kind: TokenKind) -> Result<(), LexerError> {
        if !is_name_start(self.peek_next()) {
            return Err(self.error(format!(
                "Expected a name after '{}' to form a {kind}",
                self.peek()
            )));
        }

        let (start, line, column) = (self.pos, self.line, self.column);
        self.advance(); // sigil
        while !self.is_at_end() && is_name_char(self.peek()) {
            self.advance();
        }

        self.push(kind, start, line, column);
        Ok(())
    }

    /// Scan a string literal.
    ///
    /// Escape syntax is validated but not decoded: the token text is the
    /// verbatim content between the quotes. Any failure is reported at the
    /// opening quote, since no token can start there.
    fn scan_string(&mut self) -> Result<(), LexerError> {
        let start_err = self.error("Unterminated string literal".into());
        let (start, line, column) = (self.pos, self.line, self.column);
        self.advance(); // opening quote

        loop {
            if self.is_at_end() {
                return Err(start_err);
            }

            match self.peek() {
                '"' => break,
                '\\' => {
                    self.advance();
                    if !self.scan_escape() {
                        return Err(LexerError {
                            message: "Invalid escape sequence in string literal".into(),
                            ..start_err
                        });
                    }
                }
                c if c < ' ' => return Err(start_err),
                _ => self.advance(),
            }
        }

        let content_end = self.pos;
        self.advance(); // closing quote

        let span = Span::new(start, self.pos, line, column);
        let text: String = self.chars[start + 1..content_end].iter().collect();
        self.tokens.push(Token::new(TokenKind::String, text, span));
        Ok(())
    }

    /// Consume the body of an escape sequence (after the backslash).
    /// Returns false if it is not one of `\" \\ \/ \b \f \n \r \t \uXXXX`.
    fn scan_escape(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }

        match self.peek() {
            '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => {
                self.advance();
                true
            }
            'u' => {
                self.advance();
                for _ in 0..4 {
                    if self.is_at_end() || !self.peek().is_ascii_hexdigit() {
                        return false;
                    }
                    self.advance();
                }
                true
            }
            _ => false,
        }
    }

    // --- Helpers ---

    /// Push a token whose text runs from `start` to the current position.
    fn push(&mut self, kind: TokenKind, start: usize, line: usize, column: usize) {
        let text: String = self.chars[start..self.pos].iter().collect();
        let span = Span::new(start, self.pos, line, column);
        self.tokens.push(Token::new(kind, text, span));
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + 1]
        }
    }

    /// Advance one character, keeping line/column in sync.
    /// `\r\n` counts as a single line break.
    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let ch = self.chars[self.pos];
        self.pos += 1;

        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\r' if self.peek() != '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_space(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
