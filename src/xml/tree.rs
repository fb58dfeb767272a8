//! Whole-part XML tree: parse a part's bytes and serialize it back

use quick_xml::events::{BytesDecl, Event};
use quick_xml::{Reader, Writer};
use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::xml::{RawXmlElement, RawXmlNode};

/// XML declaration (`<?xml version=... ?>`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

/// A parsed XML part
///
/// Whitespace and text are kept exactly as read, so serializing a tree
/// that was not edited reproduces the same infoset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlTree {
    /// Declaration, if the source had one
    pub declaration: Option<XmlDeclaration>,
    /// Doctype, comments and processing instructions before the root element
    pub prolog: Vec<RawXmlNode>,
    /// Root element
    pub root: RawXmlElement,
    /// Comments and processing instructions after the root element
    pub epilog: Vec<RawXmlNode>,
}

impl XmlTree {
    /// Parse a part from raw bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(bytes);

        let mut buf = Vec::new();
        let mut declaration = None;
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Decl(decl) => {
                    declaration = Some(read_declaration(&decl)?);
                }
                Event::Start(e) if root.is_none() => {
                    root = Some(RawXmlElement::from_reader(&mut reader, &e)?);
                }
                Event::Empty(e) if root.is_none() => {
                    root = Some(RawXmlElement::from_empty(&e)?);
                }
                Event::Start(_) | Event::Empty(_) => {
                    return Err(Error::InvalidDocument(
                        "more than one root element".into(),
                    ));
                }
                Event::DocType(d) if root.is_none() => {
                    prolog.push(RawXmlNode::DocType(String::from_utf8_lossy(&d).to_string()));
                }
                Event::Comment(c) => {
                    let node = RawXmlNode::Comment(String::from_utf8_lossy(&c).to_string());
                    if root.is_none() {
                        prolog.push(node);
                    } else {
                        epilog.push(node);
                    }
                }
                Event::PI(pi) => {
                    let node =
                        RawXmlNode::ProcessingInstruction(String::from_utf8_lossy(&pi).to_string());
                    if root.is_none() {
                        prolog.push(node);
                    } else {
                        epilog.push(node);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let root = root.ok_or_else(|| Error::InvalidDocument("missing root element".into()))?;

        Ok(Self {
            declaration,
            prolog,
            root,
            epilog,
        })
    }

    /// Serialize without added indentation
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());

        if let Some(decl) = &self.declaration {
            writer.write_event(Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )))?;
        }

        for node in &self.prolog {
            node.write_to(&mut writer)?;
        }

        self.root.write_to(&mut writer)?;

        for node in &self.epilog {
            node.write_to(&mut writer)?;
        }

        Ok(writer.into_inner())
    }
}

fn read_declaration(decl: &BytesDecl) -> Result<XmlDeclaration> {
    Ok(XmlDeclaration {
        version: lossy(decl.version()?),
        encoding: decl.encoding().transpose()?.map(lossy),
        standalone: decl.standalone().transpose()?.map(lossy),
    })
}

fn lossy(bytes: Cow<[u8]>) -> String {
    String::from_utf8_lossy(&bytes).to_string()
}
