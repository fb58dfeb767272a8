//! Minimal HTML element tree

use quick_xml::escape::{escape, partial_escape};
use std::fmt;

/// Content of an HTML element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlContent {
    /// Text, escaped when written
    Text(String),
    /// Nested element
    Element(HtmlNode),
}

/// HTML element with attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlNode {
    tag: String,
    /// Attributes in insertion order; keys are unique
    attributes: Vec<(String, String)>,
    children: Vec<HtmlContent>,
}

impl HtmlNode {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child content
    pub fn children(&self) -> &[HtmlContent] {
        &self.children
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append child content
    pub fn push(&mut self, content: impl Into<HtmlContent>) {
        self.children.push(content.into());
    }

    /// Add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Add child content
    pub fn with_child(mut self, content: impl Into<HtmlContent>) -> Self {
        self.push(content);
        self
    }

    /// Add a text child
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(HtmlContent::Text(text.into()))
    }

    /// Write the element and its children with no whitespace between tags
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.write_open(out)?;
        for child in &self.children {
            child.write_to(out)?;
        }
        self.write_close(out)
    }

    pub(crate) fn write_open<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, escape(value.as_str()))?;
        }
        out.write_char('>')
    }

    pub(crate) fn write_close<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "</{}>", self.tag)
    }
}

impl HtmlContent {
    /// Write the content
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            HtmlContent::Text(text) => out.write_str(&partial_escape(text.as_str())),
            HtmlContent::Element(node) => node.write_to(out),
        }
    }
}

impl From<HtmlNode> for HtmlContent {
    fn from(node: HtmlNode) -> Self {
        HtmlContent::Element(node)
    }
}

impl From<String> for HtmlContent {
    fn from(text: String) -> Self {
        HtmlContent::Text(text)
    }
}

impl From<&str> for HtmlContent {
    fn from(text: &str) -> Self {
        HtmlContent::Text(text.to_string())
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for HtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
