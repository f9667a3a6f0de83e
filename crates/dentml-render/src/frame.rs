//! Indentation frames.
//!
//! One `Frame` per open indentation level. The stack always holds at least
//! the width-0 root frame while rendering, and widths strictly increase from
//! bottom to top.

use dentml_parser::Tag;

/// One indentation level and the tags opened while it was on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Leading whitespace that opened this level (empty for the root).
    pub indent: String,
    pub width: usize,
    /// Tags awaiting a close, in opening order.
    pub tags: Vec<Tag>,
}

impl Frame {
    pub fn new(indent: impl Into<String>) -> Self {
        let indent = indent.into();
        Self {
            width: indent.chars().count(),
            indent,
            tags: Vec::new(),
        }
    }

    /// The width-0 frame at the bottom of every stack.
    pub fn root() -> Self {
        Self::default()
    }
}

/// Stack of open frames, owned by a single render run.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    /// A stack holding only the root frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::root()],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width of the top frame, or 0 once the stack has been drained.
    pub fn top_width(&self) -> usize {
        self.frames.last().map_or(0, |f| f.width)
    }

    /// Record a newly opened tag in the top frame.
    ///
    /// A drained stack gets a fresh root first, so a tag is never lost.
    pub fn open(&mut self, tag: Tag) {
        if self.frames.is_empty() {
            self.frames.push(Frame::root());
        }
        if let Some(top) = self.frames.last_mut() {
            top.tags.push(tag);
        }
    }

    /// Push a deeper level. `frame.width` must exceed the current top width.
    pub fn push(&mut self, frame: Frame) {
        debug_assert!(
            self.frames.is_empty() || frame.width > self.top_width(),
            "frame widths must strictly increase"
        );
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Remove and return the top frame's open tags, leaving the frame in place.
    pub fn take_top_tags(&mut self) -> Vec<Tag> {
        self.frames
            .last_mut()
            .map(|f| std::mem::take(&mut f.tags))
            .unwrap_or_default()
    }

    /// Indentation text of the top frame.
    pub fn top_indent(&self) -> &str {
        self.frames.last().map_or("", |f| f.indent.as_str())
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}
