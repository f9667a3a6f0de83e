//! dentml Renderer
//!
//! Turns a parsed dentml document into a lazy stream of markup fragments by
//! tracking indentation with a stack of frames.
//!
//! ```text
//! source → Scanner::tokenize → Parser::parse_document → Render (Iterator<Item = String>)
//! ```
//!
//! Lexing and parsing run eagerly and fail atomically; rendering is lazy and
//! cannot fail.
//!
//! # Example
//!
//! ```
//! let fragments: Vec<String> = dentml_render::compile("div.box", false).unwrap().collect();
//! assert_eq!(fragments, vec!["<div id=\"\" class=\"box\">", "</div>"]);
//! ```

pub mod frame;
pub mod html;
pub mod render;

pub use dentml_parser::Error;
pub use frame::{Frame, FrameStack};
pub use render::Render;

use dentml_lexer::Scanner;
use dentml_parser::{Document, Parser};

/// Compiler configuration. Holds no per-document state, so one value can
/// compile any number of sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compiler {
    pretty: bool,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interleave the source's line breaks and indentation with the tags.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Lex and parse `source`, returning the lazy fragment stream.
    pub fn compile(&self, source: &str) -> Result<Render, Error> {
        let tokens = Scanner::tokenize(source)?;
        let document = Parser::new(tokens).parse_document()?;
        Ok(self.render(document))
    }

    /// Render an already parsed document.
    pub fn render(&self, document: Document) -> Render {
        Render::new(document, self.pretty)
    }
}

/// Compile dentml source into an ordered stream of markup fragments.
///
/// Concatenating the fragments yields the final markup.
pub fn compile(source: &str, pretty: bool) -> Result<Render, Error> {
    Compiler::new().pretty(pretty).compile(source)
}

/// Compile and concatenate every fragment.
pub fn compile_to_string(source: &str, pretty: bool) -> Result<String, Error> {
    Ok(compile(source, pretty)?.collect())
}
