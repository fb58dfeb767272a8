//! Open Packaging Convention (OPC) implementation
//!
//! This module handles the ZIP-based package format used by DOCX files.

mod package;

pub use package::{Package, ReadSeek, MAIN_DOCUMENT_PART, STYLES_PART};
