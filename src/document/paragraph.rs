//! Paragraph (w:p)

use crate::document::run::{new_run_element, set_run_text};
use crate::document::{Run, StyleMap};
use crate::xml::{get_w_val, RawXmlElement, RawXmlNode};

/// A paragraph read from the main document part
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph style ID (w:pStyle)
    pub style: Option<String>,
    /// Runs in document order, hyperlink runs included
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a paragraph from runs
    pub fn new(runs: Vec<Run>) -> Self {
        Paragraph { style: None, runs }
    }

    /// Read a paragraph from its `w:p` element
    pub fn from_element(element: &RawXmlElement, styles: &StyleMap) -> Self {
        let style = element
            .child("pPr")
            .and_then(|props| props.child("pStyle"))
            .and_then(get_w_val)
            .map(str::to_string);

        let heading_level = style.as_deref().and_then(|s| styles.heading_level(s));

        let mut runs = Vec::new();
        for child in element.elements() {
            match child.local_name() {
                "r" => runs.push(Run::from_element(child, heading_level)),
                "hyperlink" => runs.extend(
                    child
                        .elements_named("r")
                        .map(|r| Run::from_element(r, heading_level)),
                ),
                _ => {}
            }
        }

        Paragraph { style, runs }
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Get style ID
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Get all runs
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Heading level, read off the first run
    pub fn heading_level(&self) -> Option<u8> {
        self.runs.first()?.heading_level
    }

    /// Check if this paragraph renders as a heading
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }
}

/// Replace the text of a `w:p` element
///
/// The first run keeps its formatting and takes the new text; all other runs
/// are dropped, along with hyperlinks left without runs.
pub(crate) fn replace_text(paragraph: &mut RawXmlElement, text: &str) {
    let mut kept = false;
    keep_first_run(&mut paragraph.children, text, &mut kept);
    if !kept {
        paragraph
            .children
            .push(RawXmlNode::Element(new_run_element(text)));
    }
}

fn keep_first_run(children: &mut Vec<RawXmlNode>, text: &str, kept: &mut bool) {
    children.retain_mut(|node| {
        let RawXmlNode::Element(e) = node else {
            return true;
        };
        match e.local_name() {
            "r" if *kept => false,
            "r" => {
                set_run_text(e, text);
                *kept = true;
                true
            }
            "hyperlink" => {
                keep_first_run(&mut e.children, text, kept);
                e.elements_named("r").next().is_some()
            }
            _ => true,
        }
    });
}
