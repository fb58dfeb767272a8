//! OPC Package implementation
//!
//! Holds the source ZIP archive in memory and streams it into a new
//! archive, substituting replaced entries and copying all others verbatim.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::read::ZipArchive;
use zip::result::ZipError;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// Well-known name of the main document part
pub const MAIN_DOCUMENT_PART: &str = "word/document.xml";
/// Well-known name of the style definitions part
pub const STYLES_PART: &str = "word/styles.xml";

/// Any seekable byte source an archive can be read from
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// An OPC package (ZIP-based container for DOCX, XLSX, PPTX, etc.)
pub struct Package {
    /// Source archive; `None` once released
    archive: Option<ZipArchive<Box<dyn ReadSeek>>>,
    /// Entry names in central directory order
    entry_names: Vec<String>,
}

impl Package {
    /// Open a package from a file path
    ///
    /// The file is read into memory and not held open, so the package can
    /// be saved back over its own path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Open a package from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Open a package from a reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(Box::new(reader) as Box<dyn ReadSeek>)?;

        let entry_names = (0..archive.len())
            .filter_map(|i| archive.name_for_index(i).map(str::to_string))
            .collect::<Vec<_>>();

        log::debug!("opened package with {} entries", entry_names.len());

        Ok(Self {
            archive: Some(archive),
            entry_names,
        })
    }

    /// Entry names in their original order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entry_names.iter().map(String::as_str)
    }

    /// Check if an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.entry_names.iter().any(|n| n == name)
    }

    /// Whether the source archive is still held
    pub fn is_open(&self) -> bool {
        self.archive.is_some()
    }

    /// Read the uncompressed bytes of an entry
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>> {
        let archive = self.archive.as_mut().ok_or(Error::ArchiveClosed)?;

        let mut file = archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => Error::PartNotFound(name.to_string()),
            other => Error::Zip(other),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read an entry if it exists
    pub fn read_optional(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        if self.contains(name) {
            self.read(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Save the package to a file, applying replacements
    pub fn save<P: AsRef<Path>>(
        &mut self,
        path: P,
        replacements: &HashMap<String, Vec<u8>>,
    ) -> Result<()> {
        self.check_writable(replacements)?;
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file), replacements)
    }

    /// Stream every entry into a new archive
    ///
    /// Entries named in `replacements` get the replacement bytes; every other
    /// entry is copied with its compressed data untouched.
    pub fn write_to<W: Write + Seek>(
        &mut self,
        writer: W,
        replacements: &HashMap<String, Vec<u8>>,
    ) -> Result<()> {
        self.check_writable(replacements)?;

        let archive = self.archive.as_mut().ok_or(Error::ArchiveClosed)?;
        let mut zip = ZipWriter::new(writer);
        let mut replaced = 0;

        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i)?;
            let name = entry.name().to_string();

            match replacements.get(&name) {
                Some(data) => {
                    let method = match entry.compression() {
                        CompressionMethod::Stored => CompressionMethod::Stored,
                        _ => CompressionMethod::Deflated,
                    };
                    drop(entry);

                    log::trace!("writing replacement for {} ({} bytes)", name, data.len());
                    let options = SimpleFileOptions::default().compression_method(method);
                    zip.start_file(name.as_str(), options)?;
                    zip.write_all(data)?;
                    replaced += 1;
                }
                None => {
                    log::trace!("copying {} verbatim", name);
                    zip.raw_copy_file(entry)?;
                }
            }
        }

        zip.finish()?.flush()?;

        log::debug!(
            "wrote package: {} entries copied, {} replaced",
            self.entry_names.len() - replaced,
            replaced
        );

        Ok(())
    }

    /// Fail early if a save cannot start
    fn check_writable(&self, replacements: &HashMap<String, Vec<u8>>) -> Result<()> {
        if !self.is_open() {
            return Err(Error::ArchiveClosed);
        }
        // Replacements only override existing entries
        if let Some(unknown) = replacements.keys().find(|name| !self.contains(name)) {
            return Err(Error::PartNotFound(unknown.clone()));
        }
        Ok(())
    }

    /// Release the source archive
    ///
    /// Reads and saves fail with [`Error::ArchiveClosed`] afterwards.
    pub fn close(&mut self) {
        if self.archive.take().is_some() {
            log::debug!("released package archive");
        }
    }
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("open", &self.is_open())
            .field("entry_names", &self.entry_names)
            .finish()
    }
}
