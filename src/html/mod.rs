//! HTML rendering: a small element tree and the paragraph renderer

mod node;
mod options;
mod render;

pub use node::{HtmlContent, HtmlNode};
pub use options::{Doctype, HtmlOptions};
pub use render::{block_for, inline_content_for, render_document};

use std::fmt;

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A complete HTML document: doctype, `<head>` with a title, and `<body>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlDocument {
    pub doctype: Doctype,
    pub head: HtmlNode,
    pub body: HtmlNode,
}

impl HtmlDocument {
    /// Create a document with an empty body
    pub fn new(doctype: Doctype, title: &str) -> Self {
        Self {
            doctype,
            head: HtmlNode::new("head").with_child(HtmlNode::new("title").with_text(title)),
            body: HtmlNode::new("body"),
        }
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut html = HtmlNode::new("html");
        if self.doctype.is_xhtml() {
            html.set_attr("xmlns", XHTML_NAMESPACE);
        }

        f.write_str(self.doctype.declaration())?;
        html.write_open(f)?;
        self.head.write_to(f)?;
        self.body.write_to(f)?;
        html.write_close(f)
    }
}
