//! # docx-lite
//!
//! Read the paragraphs of a DOCX file, render them to HTML, and save edits
//! back into the original package.
//!
//! ## Features
//!
//! - Paragraphs and runs with bold/italic/underline and heading levels
//! - HTML output with a fixed, predictable tag nesting
//! - Selective resave: only `word/document.xml` is rewritten, every other
//!   archive entry is copied byte-for-byte
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docx_lite::{Document, HtmlOptions};
//!
//! // Open a document
//! let mut doc = Document::open("example.docx")?;
//!
//! // Read paragraphs
//! for para in doc.paragraphs() {
//!     println!("{}", para.text());
//! }
//!
//! // Render to HTML
//! let html = doc.to_html(&HtmlOptions::new().with_title("Example"));
//!
//! // Edit and save
//! doc.set_paragraph_text(0, "Hello World!")?;
//! doc.save("output.docx")?;
//!
//! // Scoped use: the archive is released when the closure returns
//! let text = Document::open_with("example.docx", |doc| Ok(doc.text()))?;
//! ```

pub mod document;
pub mod error;
pub mod html;
pub mod opc;
pub mod xml;

pub use document::{Bookmark, Document, Paragraph, Run, Table};
pub use error::{Error, Result};
pub use html::{Doctype, HtmlOptions};
pub use opc::Package;
