//! Style definitions (word/styles.xml), reduced to what heading lookup needs

use crate::xml::{get_w_val, XmlTree};
use std::collections::HashMap;

/// Maps style IDs to their display names
#[derive(Clone, Debug, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `w:style` definitions from a parsed styles part
    pub fn from_tree(tree: &XmlTree) -> Self {
        let mut styles = Self::new();
        for style in tree.root.elements_named("style") {
            let id = style.attr("w:styleId").or_else(|| style.attr("styleId"));
            let name = style.child("name").and_then(get_w_val);
            if let (Some(id), Some(name)) = (id, name) {
                styles.insert(id, name);
            }
        }
        styles
    }

    /// Register a style ID with its display name
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Display name for a style ID
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of known styles
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no styles are known
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Heading level of a paragraph style, looked up by ID first, then by display name
    pub fn heading_level(&self, style_id: &str) -> Option<u8> {
        heading_level_for(style_id).or_else(|| self.name(style_id).and_then(heading_level_for))
    }
}

/// Heading level encoded in a style name such as `Heading1` or `heading 3`
pub fn heading_level_for(name: &str) -> Option<u8> {
    let compact = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    match compact.strip_prefix("heading")?.as_bytes() {
        [digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}
