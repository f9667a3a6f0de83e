//! Indentation renderer.
//!
//! Walks the flat node sequence once and decides, from the width of each
//! line's leading whitespace, when to open a nesting level and when to close
//! one:
//!
//! - deeper than the top frame: push a new frame;
//! - equal or shallower: close the top frame's tags (last opened first);
//!   if shallower, also pop that frame. Only one level is popped per line.
//!
//! A line with no leading whitespace triggers neither, so its tags join the
//! current top frame. At end of input every frame is closed innermost first.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use dentml_parser::{Document, Node, Tag, Whitespace};

use crate::frame::{Frame, FrameStack};
use crate::html::{close_tag, open_tag};

/// Lazy fragment stream for one document.
///
/// Each call to `next` advances through the document only as far as needed
/// to produce the next fragment. The stream is single-pass.
#[derive(Debug)]
pub struct Render {
    nodes: std::vec::IntoIter<Node>,
    frames: FrameStack,
    at_line_start: bool,
    pretty: bool,
    pending: VecDeque<String>,
    finished: bool,
}

impl Render {
    pub fn new(document: Document, pretty: bool) -> Self {
        Self {
            nodes: document.nodes.into_iter(),
            frames: FrameStack::new(),
            at_line_start: true,
            pretty,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Number of frames still open. Zero once the stream is exhausted.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn step(&mut self, node: Node) {
        match node {
            Node::Tag(tag) => {
                self.emit(open_tag(&tag));
                self.frames.open(tag);
                self.at_line_start = false;
            }
            Node::Space(ws) if self.at_line_start => {
                self.at_line_start = false;
                self.indent(ws);
            }
            Node::Space(_) => {}
            Node::Eol(text) => {
                self.at_line_start = true;
                if self.pretty {
                    self.emit(text);
                }
            }
            Node::Text(text) => self.emit(text),
        }
    }

    /// Handle the leading whitespace run of a line.
    fn indent(&mut self, ws: Whitespace) {
        let width = ws.width();
        let top = self.frames.top_width();

        if width > top {
            tracing::trace!(width, depth = self.frames.len(), "push frame");
            self.frames.push(Frame::new(ws.text.clone()));
        } else {
            let indent = self.frames.top_indent().to_string();
            let tags = self.frames.take_top_tags();
            self.close_all(&indent, tags);

            if width < top {
                tracing::trace!(width, top, depth = self.frames.len(), "pop frame");
                self.frames.pop();
            }
        }

        if self.pretty {
            self.emit(ws.text);
        }
    }

    /// Emit close fragments for `tags` in reverse opening order. In pretty
    /// mode they go on their own line at the frame's indentation.
    fn close_all(&mut self, indent: &str, tags: Vec<Tag>) {
        if tags.is_empty() {
            return;
        }
        tracing::trace!(tags = tags.len(), "close frame");

        if self.pretty {
            self.emit(indent.to_string());
        }
        for tag in tags.iter().rev() {
            self.emit(close_tag(tag));
        }
        if self.pretty {
            self.emit("\n".to_string());
        }
    }

    /// Close every remaining frame, innermost first.
    fn finish(&mut self) {
        while let Some(frame) = self.frames.pop() {
            self.close_all(&frame.indent, frame.tags);
        }
        self.finished = true;
    }

    fn emit(&mut self, fragment: String) {
        self.pending.push_back(fragment);
    }
}

impl Iterator for Render {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(fragment);
            }

            match self.nodes.next() {
                Some(node) => self.step(node),
                None if !self.finished => self.finish(),
                None => return None,
            }
        }
    }
}

impl FusedIterator for Render {}

#[cfg(test)]
mod tests {
    use super::*;
    use dentml_parser::Parser;
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> Vec<String> {
        Render::new(Parser::parse(source).unwrap(), false).collect()
    }

    fn render_pretty(source: &str) -> String {
        Render::new(Parser::parse(source).unwrap(), true).collect()
    }

    // =========================================================================
    // Opening and closing
    // =========================================================================

    #[test]
    fn test_empty_document() {
        assert!(render("").is_empty());
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(render("div"), vec!["<div id=\"\" class=\"\">", "</div>"]);
    }

    #[test]
    fn test_nested_child() {
        assert_eq!(
            render("div\n  p"),
            vec![
                "<div id=\"\" class=\"\">",
                "<p id=\"\" class=\"\">",
                "</p>",
                "</div>",
            ]
        );
    }

    #[test]
    fn test_equal_indent_closes_previous_sibling() {
        assert_eq!(
            render("ul\n  li\n  li"),
            vec![
                "<ul id=\"\" class=\"\">",
                "<li id=\"\" class=\"\">",
                "</li>",
                "<li id=\"\" class=\"\">",
                "</li>",
                "</ul>",
            ]
        );
    }

    #[test]
    fn test_same_line_siblings_close_in_reverse() {
        assert_eq!(
            render("a\n  b c\n  d"),
            vec![
                "<a id=\"\" class=\"\">",
                "<b id=\"\" class=\"\">",
                "<c id=\"\" class=\"\">",
                "</c>",
                "</b>",
                "<d id=\"\" class=\"\">",
                "</d>",
                "</a>",
            ]
        );
    }

    #[test]
    fn test_dedent_pops_one_level_only() {
        // `d` dedents two levels at once; only the innermost is closed, so
        // `d` lands in `c`'s frame.
        let out = render("a\n  b\n    c\n      e\n  d");
        assert_eq!(
            out,
            vec![
                "<a id=\"\" class=\"\">",
                "<b id=\"\" class=\"\">",
                "<c id=\"\" class=\"\">",
                "<e id=\"\" class=\"\">",
                "</e>",
                "<d id=\"\" class=\"\">",
                "</d>",
                "</c>",
                "</b>",
                "</a>",
            ]
        );
    }

    #[test]
    fn test_line_without_indent_joins_top_frame() {
        assert_eq!(
            render("a\n  b\nc"),
            vec![
                "<a id=\"\" class=\"\">",
                "<b id=\"\" class=\"\">",
                "<c id=\"\" class=\"\">",
                "</c>",
                "</b>",
                "</a>",
            ]
        );
    }

    #[test]
    fn test_blank_indented_line_still_closes() {
        assert_eq!(
            render("a\n  b\n  \n  c"),
            vec![
                "<a id=\"\" class=\"\">",
                "<b id=\"\" class=\"\">",
                "</b>",
                "<c id=\"\" class=\"\">",
                "</c>",
                "</a>",
            ]
        );
    }

    #[test]
    fn test_first_line_indented() {
        assert_eq!(
            render("  a\n  b"),
            vec![
                "<a id=\"\" class=\"\">",
                "</a>",
                "<b id=\"\" class=\"\">",
                "</b>",
            ]
        );
    }

    // =========================================================================
    // Text and whitespace
    // =========================================================================

    #[test]
    fn test_text_is_emitted_in_place() {
        assert_eq!(
            render("p \"hi\""),
            vec!["<p id=\"\" class=\"\">", "hi", "</p>"]
        );
    }

    #[test]
    fn test_text_does_not_end_line_start() {
        // The run after the text is still this line's first whitespace.
        assert_eq!(
            render("a\n\"t\"  b"),
            vec!["<a id=\"\" class=\"\">", "t", "<b id=\"\" class=\"\">", "</b>", "</a>"]
        );
    }

    #[test]
    fn test_inner_spaces_not_emitted() {
        assert_eq!(
            render_pretty("p \"a\" \"b\""),
            "<p id=\"\" class=\"\">ab</p>\n"
        );
    }

    #[test]
    fn test_pretty_reproduces_layout() {
        assert_eq!(
            render_pretty("div\n  p \"hi\"\n  p"),
            "<div id=\"\" class=\"\">\n  <p id=\"\" class=\"\">hi\n  </p>\n  <p id=\"\" class=\"\">  </p>\n</div>\n"
        );
    }

    #[test]
    fn test_pretty_keeps_original_line_breaks() {
        let out = render_pretty("a\r\n\tb");
        assert_eq!(
            out,
            "<a id=\"\" class=\"\">\r\n\t<b id=\"\" class=\"\">\t</b>\n</a>\n"
        );
    }

    // =========================================================================
    // Laziness
    // =========================================================================

    #[test]
    fn test_fragments_are_produced_incrementally() {
        let mut r = Render::new(Parser::parse("a\n  b").unwrap(), false);
        assert_eq!(r.next().as_deref(), Some("<a id=\"\" class=\"\">"));
        assert_eq!(r.depth(), 1);
        assert_eq!(r.next().as_deref(), Some("<b id=\"\" class=\"\">"));
        assert_eq!(r.depth(), 2);
        assert_eq!(r.next().as_deref(), Some("</b>"));
        assert_eq!(r.next().as_deref(), Some("</a>"));
        assert_eq!(r.next(), None);
        assert_eq!(r.depth(), 0);
        assert_eq!(r.next(), None);
    }
}
