//! Error types for docx-lite

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Missing required part: {0}")]
    MissingPart(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Archive has already been closed")]
    ArchiveClosed,

    #[error("Paragraph index out of range: {0}")]
    ParagraphOutOfRange(usize),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
