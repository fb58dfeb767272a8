//! Run (w:r) - a contiguous span of text with uniform formatting

use crate::xml::{get_w_val, parse_bool, RawXmlElement, RawXmlNode};

/// A run of text read from the main document part
///
/// Runs are plain values: they are rebuilt from the XML tree every time
/// paragraphs are read, and editing one does not touch the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Run {
    /// Text content
    pub text: String,
    /// Bold (w:b)
    pub bold: bool,
    /// Italic (w:i)
    pub italic: bool,
    /// Underline (w:u other than "none")
    pub underline: bool,
    /// Heading level 1-6 taken from the paragraph style
    pub heading_level: Option<u8>,
}

impl Run {
    /// Create a plain run with text
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Read a run from its `w:r` element
    pub fn from_element(element: &RawXmlElement, heading_level: Option<u8>) -> Self {
        let mut run = Run {
            text: run_text(element),
            heading_level,
            ..Default::default()
        };

        if let Some(props) = element.child("rPr") {
            for prop in props.elements() {
                match prop.local_name() {
                    "b" => run.bold = parse_bool(prop),
                    "i" => run.italic = parse_bool(prop),
                    "u" => run.underline = get_w_val(prop) != Some("none"),
                    _ => {}
                }
            }
        }

        run
    }

    /// Get the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if this run belongs to a heading paragraph
    pub fn is_heading(&self) -> bool {
        self.heading_level.is_some()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set heading level
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = Some(level);
        self
    }
}

/// Text of a `w:r` element: `w:t` content, tabs and line breaks
pub(crate) fn run_text(element: &RawXmlElement) -> String {
    let mut result = String::new();
    for child in element.elements() {
        match child.local_name() {
            "t" => result.push_str(&child.text()),
            "tab" => result.push('\t'),
            "cr" => result.push('\n'),
            // Page and column breaks carry no text
            "br" if matches!(
                child.attr("w:type").or_else(|| child.attr("type")),
                None | Some("textWrapping")
            ) =>
            {
                result.push('\n')
            }
            _ => {}
        }
    }
    result
}

/// Replace the text of a `w:r` element, keeping its properties and other content
pub(crate) fn set_run_text(element: &mut RawXmlElement, text: &str) {
    element.children.retain(|child| match child {
        RawXmlNode::Element(e) => !matches!(e.local_name(), "t" | "tab" | "cr")
            && !(e.local_name() == "br"
                && matches!(
                    e.attr("w:type").or_else(|| e.attr("type")),
                    None | Some("textWrapping")
                )),
        RawXmlNode::Text(_) => false,
        _ => true,
    });
    element.children.push(RawXmlNode::Element(text_element(text)));
}

/// Create a plain `w:r` element holding text
pub(crate) fn new_run_element(text: &str) -> RawXmlElement {
    RawXmlElement::new("w:r").with_child(text_element(text))
}

fn text_element(text: &str) -> RawXmlElement {
    let mut t = RawXmlElement::new("w:t");
    // Preserve space if text has leading/trailing whitespace
    if text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
        || text.contains("  ")
    {
        t.set_attr("xml:space", "preserve");
    }
    t.with_text(text)
}
