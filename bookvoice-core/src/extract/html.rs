//! Chapter markup to plain text
//!
//! Only the `<body>` is rendered. Images, scripts, styles and comments are
//! dropped, links keep their text but lose the href. Block elements are
//! separated by a blank line, smaller containers by a single line break.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose content is never spoken
const SKIPPED: &[&str] = &[
    "head", "title", "img", "image", "svg", "style", "script", "noscript", "template",
];

/// Elements separated from their neighbours by a blank line
const PARAGRAPHS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "ul", "ol", "dl", "table",
    "figure", "hr",
];

/// Elements separated from their neighbours by a line break
const LINES: &[&str] = &[
    "div", "section", "article", "aside", "header", "footer", "nav", "main", "li", "dt", "dd",
    "tr", "figcaption", "caption",
];

/// Convert chapter markup to plain text
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let body = root
        .descendants()
        .find(|node| matches!(node.value(), Node::Element(el) if el.name() == "body"))
        .unwrap_or(*root);

    let mut writer = TextWriter::default();
    for child in body.children() {
        walk(child, &mut writer);
    }
    writer.finish()
}

fn walk(node: NodeRef<'_, Node>, writer: &mut TextWriter) {
    match node.value() {
        Node::Text(text) => writer.push_text(text),
        Node::Element(el) => {
            let tag = el.name();
            if SKIPPED.contains(&tag) {
                return;
            }
            if tag == "br" {
                writer.request_breaks(1);
                return;
            }

            let breaks = if PARAGRAPHS.contains(&tag) {
                2
            } else if LINES.contains(&tag) {
                1
            } else {
                0
            };

            writer.request_breaks(breaks);
            for child in node.children() {
                walk(child, writer);
            }
            writer.request_breaks(breaks);
        }
        // Comments, doctypes and processing instructions
        _ => {}
    }
}

/// Accumulates words, deferring line breaks until the next word arrives
#[derive(Default)]
struct TextWriter {
    out: String,
    pending_breaks: usize,
    pending_space: bool,
}

impl TextWriter {
    fn request_breaks(&mut self, count: usize) {
        if count > 0 {
            self.pending_breaks = self.pending_breaks.max(count);
            self.pending_space = false;
        }
    }

    fn push_text(&mut self, text: &str) {
        let mut words = text.split_whitespace().peekable();

        if words.peek().is_none() {
            if !text.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        let leading_space = text.starts_with(char::is_whitespace);
        if !self.out.is_empty() {
            if self.pending_breaks > 0 {
                self.out.push_str(&"\n".repeat(self.pending_breaks));
            } else if self.pending_space || leading_space {
                self.out.push(' ');
            }
        }
        self.pending_breaks = 0;

        for (i, word) in words.enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(word);
        }

        self.pending_space = text.ends_with(char::is_whitespace);
    }

    fn finish(self) -> String {
        self.out
    }
}
