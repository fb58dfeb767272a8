//! Raw XML node types backing the live main-part tree

use quick_xml::escape::{escape, partial_escape, unescape};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use std::borrow::Cow;
use std::io::BufRead;

use crate::error::{Error, Result};

/// Raw XML node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawXmlNode {
    /// Element node
    Element(RawXmlElement),
    /// Text node (unescaped)
    Text(String),
    /// CDATA section
    CData(String),
    /// Comment node
    Comment(String),
    /// Processing instruction (content between `<?` and `?>`)
    ProcessingInstruction(String),
    /// Document type declaration (content between `<!DOCTYPE ` and `>`)
    DocType(String),
}

/// Raw XML element with attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawXmlElement {
    /// Full element name (with prefix, e.g., "w:p")
    pub name: String,
    /// Attributes as (name, unescaped value) pairs, in source order
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<RawXmlNode>,
    /// Whether this was a self-closing element
    pub self_closing: bool,
}

impl RawXmlElement {
    /// Create a new empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Read a complete element from XML reader (starting after the start tag was read)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut element = Self {
            name: String::from_utf8_lossy(start.name().as_ref()).to_string(),
            attributes: read_attributes(start)?,
            children: Vec::new(),
            self_closing: false,
        };

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let child = Self::from_reader(reader, &e)?;
                    element.children.push(RawXmlNode::Element(child));
                }
                Event::Empty(e) => {
                    element
                        .children
                        .push(RawXmlNode::Element(Self::from_empty(&e)?));
                }
                Event::Text(t) => {
                    let text = read_text(&t)?;
                    if !text.is_empty() {
                        element.children.push(RawXmlNode::Text(text));
                    }
                }
                Event::CData(c) => {
                    element
                        .children
                        .push(RawXmlNode::CData(String::from_utf8_lossy(&c).to_string()));
                }
                Event::Comment(c) => {
                    element
                        .children
                        .push(RawXmlNode::Comment(String::from_utf8_lossy(&c).to_string()));
                }
                Event::PI(pi) => {
                    element.children.push(RawXmlNode::ProcessingInstruction(
                        String::from_utf8_lossy(&pi).to_string(),
                    ));
                }
                // The reader checks end names, so any end tag here closes this element
                Event::End(_) => break,
                Event::Eof => {
                    return Err(Error::InvalidDocument(format!(
                        "unexpected EOF inside <{}>",
                        element.name
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(element)
    }

    /// Create from empty element tag
    pub fn from_empty(e: &BytesStart) -> Result<Self> {
        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
            attributes: read_attributes(e)?,
            children: Vec::new(),
            self_closing: true,
        })
    }

    /// Write element to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: escape_attribute(value).into_owned().into_bytes().into(),
            });
        }

        if self.children.is_empty() && self.self_closing {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &self.children {
                child.write_to(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        }

        Ok(())
    }

    /// Name without the namespace prefix (`w:p` -> `p`)
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Get an attribute value by its full name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Child elements, skipping text and comments
    pub fn elements(&self) -> impl Iterator<Item = &RawXmlElement> {
        self.children.iter().filter_map(|c| match c {
            RawXmlNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Child elements with the given local name
    pub fn elements_named<'a>(
        &'a self,
        local: &'a str,
    ) -> impl Iterator<Item = &'a RawXmlElement> + 'a {
        self.elements().filter(move |e| e.local_name() == local)
    }

    /// Mutable child elements with the given local name
    pub fn elements_named_mut<'a>(
        &'a mut self,
        local: &'a str,
    ) -> impl Iterator<Item = &'a mut RawXmlElement> + 'a {
        self.children.iter_mut().filter_map(move |c| match c {
            RawXmlNode::Element(e) if e.local_name() == local => Some(e),
            _ => None,
        })
    }

    /// First child element with the given local name
    pub fn child(&self, local: &str) -> Option<&RawXmlElement> {
        self.elements().find(|e| e.local_name() == local)
    }

    /// First mutable child element with the given local name
    pub fn child_mut(&mut self, local: &str) -> Option<&mut RawXmlElement> {
        self.children.iter_mut().find_map(|c| match c {
            RawXmlNode::Element(e) if e.local_name() == local => Some(e),
            _ => None,
        })
    }

    /// Concatenated text and CDATA of direct children
    pub fn text(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            match child {
                RawXmlNode::Text(t) | RawXmlNode::CData(t) => result.push_str(t),
                _ => {}
            }
        }
        result
    }

    /// Add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: RawXmlElement) -> Self {
        self.children.push(RawXmlNode::Element(child));
        self
    }

    /// Add a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(RawXmlNode::Text(text.into()));
        self
    }
}

impl RawXmlNode {
    /// Write node to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            RawXmlNode::Element(e) => e.write_to(writer),
            RawXmlNode::Text(t) => {
                writer.write_event(Event::Text(BytesText::from_escaped(escape_text(t))))?;
                Ok(())
            }
            RawXmlNode::CData(c) => {
                writer.write_event(Event::CData(BytesCData::new(c.as_str())))?;
                Ok(())
            }
            RawXmlNode::Comment(c) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(c.as_str())))?;
                Ok(())
            }
            RawXmlNode::ProcessingInstruction(pi) => {
                writer.write_event(Event::PI(BytesPI::new(pi.as_str())))?;
                Ok(())
            }
            RawXmlNode::DocType(d) => {
                writer.write_event(Event::DocType(BytesText::from_escaped(d.as_str())))?;
                Ok(())
            }
        }
    }

    /// Element view of this node, if it is one
    pub fn as_element(&self) -> Option<&RawXmlElement> {
        match self {
            RawXmlNode::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Collect attributes with their values normalized and unescaped
fn read_attributes(start: &BytesStart) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let raw = String::from_utf8_lossy(&attr.value);
        // Literal whitespace in an attribute value reads as a space
        let normalized = normalize_line_endings(&raw).replace(['\t', '\n'], " ");
        attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
            unescape(&normalized)
                .map_err(quick_xml::Error::from)?
                .into_owned(),
        ));
    }
    Ok(attributes)
}

/// Unescape character data, reading literal CRLF and CR as LF
fn read_text(raw: &[u8]) -> Result<String> {
    let raw = String::from_utf8_lossy(raw);
    let normalized = normalize_line_endings(&raw);
    Ok(unescape(&normalized)
        .map_err(quick_xml::Error::from)?
        .into_owned())
}

fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Escape character data; CR must stay a reference to survive a reparse
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = partial_escape(text);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

/// Escape an attribute value, keeping tabs and line breaks as references
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if escaped.contains(['\t', '\n', '\r']) {
        Cow::Owned(
            escaped
                .replace('\t', "&#9;")
                .replace('\n', "&#10;")
                .replace('\r', "&#13;"),
        )
    } else {
        escaped
    }
}
