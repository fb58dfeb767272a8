//! Document model - high-level API for DOCX documents

mod bookmark;
mod paragraph;
mod parser;
mod run;
mod styles;
mod table;

pub use bookmark::Bookmark;
pub use paragraph::Paragraph;
pub use parser::Parser;
pub use run::Run;
pub use styles::{heading_level_for, StyleMap};
pub use table::{Table, TableCell, TableRow};

use crate::error::{Error, Result};
use crate::html::{self, HtmlOptions};
use crate::opc::{Package, MAIN_DOCUMENT_PART};
use crate::xml::XmlTree;
use std::collections::HashMap;
use std::fmt;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

/// A DOCX document
///
/// ```rust,ignore
/// use docx_lite::{Document, HtmlOptions};
///
/// let mut doc = Document::open("report.docx")?;
/// println!("{}", doc.text());
///
/// let html = doc.to_html(&HtmlOptions::new().with_title("Report"));
///
/// doc.set_paragraph_text(0, "Quarterly report")?;
/// doc.save("report-edited.docx")?;
/// ```
#[derive(Debug)]
pub struct Document {
    /// Package and main-part tree
    parser: Parser,
    /// Entry name -> bytes to write instead of the original entry
    replacements: HashMap<String, Vec<u8>>,
}

impl Document {
    /// Open a document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());
        Self::from_package(Package::open(path)?)
    }

    /// Open a document, run `f` on it, then release the archive
    ///
    /// The archive is released whether `f` succeeds or fails; its result is
    /// returned unchanged.
    pub fn open_with<P, T, F>(path: P, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let mut doc = Self::open(path)?;
        let result = f(&mut doc);
        doc.close();
        result
    }

    /// Open a document from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_package(Package::from_bytes(bytes)?)
    }

    /// Create document from an OPC package
    fn from_package(package: Package) -> Result<Self> {
        let parser = Parser::new(package)?;
        log::debug!(
            "parsed main document: {} paragraphs",
            parser.paragraph_count()
        );

        Ok(Self {
            parser,
            replacements: HashMap::new(),
        })
    }

    /// Get all body paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph> + '_ {
        self.parser.paragraphs()
    }

    /// Get paragraph count
    pub fn paragraph_count(&self) -> usize {
        self.parser.paragraph_count()
    }

    /// Get paragraph by index
    pub fn paragraph(&self, index: usize) -> Option<Paragraph> {
        self.parser.paragraphs().nth(index)
    }

    /// Visit paragraphs in document order
    #[deprecated(note = "iterate `paragraphs()` instead")]
    pub fn each_paragraph<F: FnMut(&Paragraph)>(&self, mut visit: F) {
        for paragraph in self.paragraphs() {
            visit(&paragraph);
        }
    }

    /// Get all body tables
    pub fn tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.parser.tables()
    }

    /// Get all bookmarks
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.parser.bookmarks()
    }

    /// Get a bookmark by name
    pub fn bookmark(&self, name: &str) -> Option<Bookmark> {
        self.parser.bookmarks().into_iter().find(|b| b.name == name)
    }

    /// Get the live main-part XML tree
    pub fn xml(&self) -> &XmlTree {
        self.parser.xml()
    }

    /// Get the live main-part XML tree for editing
    pub fn xml_mut(&mut self) -> &mut XmlTree {
        self.parser.xml_mut()
    }

    /// Get the underlying package
    pub fn package(&self) -> &Package {
        self.parser.package()
    }

    /// Get all text in the document, one line per paragraph
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render body paragraphs as an HTML document
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        html::render_document(self.paragraphs(), options)
    }

    /// Replace a paragraph's text, keeping the formatting of its first run
    pub fn set_paragraph_text(&mut self, index: usize, text: &str) -> Result<()> {
        let paragraph = self
            .parser
            .paragraph_element_mut(index)
            .ok_or(Error::ParagraphOutOfRange(index))?;
        paragraph::replace_text(paragraph, text);
        Ok(())
    }

    /// Insert text right after a bookmark
    pub fn insert_text_after_bookmark(&mut self, name: &str, text: &str) -> Result<()> {
        for paragraph in self.parser.paragraph_elements_mut() {
            if bookmark::insert_text_after(paragraph, name, text) {
                return Ok(());
            }
        }
        Err(Error::BookmarkNotFound(name.to_string()))
    }

    /// Save the document to a file and release the source archive
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if !self.package().is_open() {
            return Err(Error::ArchiveClosed);
        }

        self.update()?;
        let result = self
            .parser
            .package_mut()
            .save(path.as_ref(), &self.replacements);
        self.close();
        result
    }

    /// Write the document as a new archive, keeping the source archive open
    pub fn write_to<W: Write + Seek>(&mut self, writer: W) -> Result<()> {
        self.update()?;
        self.parser
            .package_mut()
            .write_to(writer, &self.replacements)
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Release the source archive
    pub fn close(&mut self) {
        self.parser.package_mut().close();
    }

    /// Stage the serialized main-part tree as a replacement
    ///
    /// There is no dirty tracking: the tree is serialized on every save.
    fn update(&mut self) -> Result<()> {
        let bytes = self.parser.xml().to_bytes()?;
        log::debug!(
            "staging {} ({} bytes)",
            MAIN_DOCUMENT_PART,
            bytes.len()
        );
        self.replacements
            .insert(MAIN_DOCUMENT_PART.to_string(), bytes);
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
