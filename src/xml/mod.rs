//! XML adapter: a generic node tree for one package part

mod raw;
mod tree;

pub use raw::{RawXmlElement, RawXmlNode};
pub use tree::{XmlDeclaration, XmlTree};

/// Helper to get w:val attribute (common in OOXML)
pub fn get_w_val(element: &RawXmlElement) -> Option<&str> {
    element.attr("w:val").or_else(|| element.attr("val"))
}

/// Parse a boolean value from OOXML (handles "1", "true", "on", or missing val)
pub fn parse_bool(element: &RawXmlElement) -> bool {
    match get_w_val(element) {
        None => true, // No val attribute means true (e.g., <w:b/>)
        Some(v) => matches!(v, "1" | "true" | "on"),
    }
}
