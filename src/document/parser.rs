//! Document model: the opened package plus the live main-part XML tree

use crate::document::{Bookmark, Paragraph, StyleMap, Table};
use crate::error::{Error, Result};
use crate::opc::{Package, MAIN_DOCUMENT_PART, STYLES_PART};
use crate::xml::{RawXmlElement, XmlTree};

/// Parsed view of a DOCX package
///
/// Owns the package handle and the main-part tree. Paragraphs, tables and
/// bookmarks are read from the tree on demand.
#[derive(Debug)]
pub struct Parser {
    package: Package,
    xml: XmlTree,
    styles: StyleMap,
}

impl Parser {
    /// Parse the main document part (and styles, if present) of a package
    pub fn new(mut package: Package) -> Result<Self> {
        if !package.contains(MAIN_DOCUMENT_PART) {
            return Err(Error::MissingPart(MAIN_DOCUMENT_PART.into()));
        }

        let bytes = package.read(MAIN_DOCUMENT_PART)?;
        let xml = XmlTree::parse(&bytes)?;
        if xml.root.child("body").is_none() {
            return Err(Error::InvalidDocument("Missing w:body element".into()));
        }

        let styles = match package.read_optional(STYLES_PART)? {
            Some(bytes) => match XmlTree::parse(&bytes) {
                Ok(tree) => StyleMap::from_tree(&tree),
                Err(e) => {
                    log::warn!("ignoring unreadable {}: {}", STYLES_PART, e);
                    StyleMap::new()
                }
            },
            None => StyleMap::new(),
        };

        Ok(Self {
            package,
            xml,
            styles,
        })
    }

    /// Body-level paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph> + '_ {
        self.body_elements("p")
            .map(move |p| Paragraph::from_element(p, &self.styles))
    }

    /// Number of body-level paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.body_elements("p").count()
    }

    /// Body-level tables
    pub fn tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.body_elements("tbl")
            .map(move |t| Table::from_element(t, &self.styles))
    }

    /// Bookmarks started in body-level paragraphs, in document order
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.body_elements("p")
            .enumerate()
            .flat_map(|(i, p)| Bookmark::collect(p, i))
            .collect()
    }

    /// Mutable `w:p` element of a body-level paragraph
    pub fn paragraph_element_mut(&mut self, index: usize) -> Option<&mut RawXmlElement> {
        self.xml
            .root
            .child_mut("body")?
            .elements_named_mut("p")
            .nth(index)
    }

    /// Mutable `w:p` elements of all body-level paragraphs
    pub fn paragraph_elements_mut(&mut self) -> impl Iterator<Item = &mut RawXmlElement> {
        self.xml
            .root
            .child_mut("body")
            .into_iter()
            .flat_map(|body| body.elements_named_mut("p"))
    }

    /// Live main-part tree
    pub fn xml(&self) -> &XmlTree {
        &self.xml
    }

    /// Mutable main-part tree
    pub fn xml_mut(&mut self) -> &mut XmlTree {
        &mut self.xml
    }

    /// Underlying package
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Mutable underlying package
    pub fn package_mut(&mut self) -> &mut Package {
        &mut self.package
    }

    fn body_elements<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a RawXmlElement> + 'a {
        self.xml
            .root
            .child("body")
            .into_iter()
            .flat_map(move |body| body.elements_named(local))
    }
}
