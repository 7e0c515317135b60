//! XML format
//!
//! Element trees map onto XML directly: attributes in the attribute prefix
//! become XML attributes, child elements become child elements and each run
//! of adjacent text fragments becomes one text node.
//!
//! # Lossy Conversions
//!
//! - Attributes placed after a child element or text move into the start tag.
//! - Adjacent text fragments are merged.
//! - Comments, processing instructions and doctypes are dropped on import.
//! - Indented output drops whitespace-only text nodes.
//!
//! Options:
//! - `indent`: spaces per nesting level; `0` or absent writes compact output.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::Document;
use serializer::XmlOptions;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlFormat {
    options: XmlOptions,
}

impl XmlFormat {
    pub fn new(options: XmlOptions) -> Self {
        Self { options }
    }
}

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_xml(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_xml(doc, self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut xml_options = self.options;
        if let Some(indent) = options.get("indent") {
            let width: usize = indent.parse().map_err(|_| {
                FormatError::SerializationError(format!("Invalid indent '{indent}'"))
            })?;
            xml_options.indent = (width > 0).then_some(width);
        }
        serializer::serialize_to_xml(doc, xml_options)
    }
}
