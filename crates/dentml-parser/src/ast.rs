//! Syntax nodes for dentml.
//!
//! A `Document` is a flat sequence. Tags hold their own modifiers but never
//! children; which tag contains which is decided by the renderer from the
//! `Space` nodes at line starts.

/// A complete dentml document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

/// A top-level node in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element declaration.
    Tag(Tag),

    /// A standalone string literal, content verbatim (escapes undecoded).
    Text(String),

    /// A whitespace run outside any tag's modifier list.
    Space(Whitespace),

    /// A run of line-break characters, kept verbatim.
    Eol(String),
}

/// A whitespace run. Only its width matters for nesting; the text is kept
/// so pretty output can reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitespace {
    pub text: String,
}

impl Whitespace {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// An element declaration: `name[.class]*[#id]*[attr="value"]*`.
///
/// Each modifier list keeps encounter order within its own kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub name: String,
    pub classes: Vec<Class>,
    pub ids: Vec<Id>,
    pub attributes: Vec<Attribute>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A `.class` shorthand, sigil stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
}

/// An `#id` shorthand, sigil stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    pub name: String,
}

/// A `name="value"` pair. The value is the string token's verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}
