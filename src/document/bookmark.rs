//! Bookmarks (w:bookmarkStart) inside body paragraphs

use crate::document::run::{new_run_element, run_text, set_run_text};
use crate::xml::{RawXmlElement, RawXmlNode};

/// Word's marker for the last edit position; not a user bookmark
const GO_BACK: &str = "_GoBack";

/// A bookmark anchored in a body paragraph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    /// Bookmark ID (w:id)
    pub id: String,
    /// Bookmark name (w:name)
    pub name: String,
    /// Index of the body paragraph holding the bookmark start
    pub paragraph: usize,
}

impl Bookmark {
    /// Collect the bookmarks started directly inside a paragraph element
    pub(crate) fn collect(paragraph: &RawXmlElement, index: usize) -> Vec<Bookmark> {
        paragraph
            .elements_named("bookmarkStart")
            .filter_map(|e| {
                let name = e.attr("w:name").or_else(|| e.attr("name"))?;
                if name == GO_BACK {
                    return None;
                }
                Some(Bookmark {
                    id: e
                        .attr("w:id")
                        .or_else(|| e.attr("id"))
                        .unwrap_or_default()
                        .to_string(),
                    name: name.to_string(),
                    paragraph: index,
                })
            })
            .collect()
    }
}

/// Insert text right after the named bookmark start
///
/// Appends to the run just before the bookmark when there is one, otherwise
/// inserts a new plain run after it. Returns false if the bookmark is not in
/// this paragraph.
pub(crate) fn insert_text_after(paragraph: &mut RawXmlElement, name: &str, text: &str) -> bool {
    let Some(position) = paragraph.children.iter().position(|node| {
        node.as_element().is_some_and(|e| {
            e.local_name() == "bookmarkStart"
                && e.attr("w:name").or_else(|| e.attr("name")) == Some(name)
        })
    }) else {
        return false;
    };

    let previous = paragraph.children[..position]
        .iter_mut()
        .rev()
        .find_map(|node| match node {
            RawXmlNode::Element(e) => Some(e),
            _ => None,
        })
        .filter(|e| e.local_name() == "r");

    match previous {
        Some(run) => {
            let combined = format!("{}{}", run_text(run), text);
            set_run_text(run, &combined);
        }
        None => paragraph
            .children
            .insert(position + 1, RawXmlNode::Element(new_run_element(text))),
    }

    true
}
