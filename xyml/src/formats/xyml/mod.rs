//! XYML format
//!
//! XYML is a YAML dialect for element trees: an element is a single-entry
//! mapping from its name to a sequence of members, where `{key: scalar}`
//! items at the head of the sequence are attributes, nested single-entry
//! mappings are child elements and bare scalars are text.
//!
//! Extensions: `xyml`, `yaml`, `yml`.
//!
//! Options:
//! - `style`: `field` (default) keeps every text fragment on its own line;
//!   `canonical` joins adjacent fragments so that two documents with the same
//!   content render to the same bytes.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::Document;
use serializer::RenderStyle;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
pub struct XymlFormat {
    style: RenderStyle,
}

impl XymlFormat {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }
}

impl Format for XymlFormat {
    fn name(&self) -> &str {
        "xyml"
    }

    fn description(&self) -> &str {
        "XYML element trees in YAML list notation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xyml", "yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_xyml(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::render_document(doc, self.style))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let style = match options.get("style") {
            Some(name) => name.parse().map_err(FormatError::SerializationError)?,
            None => self.style,
        };
        Ok(serializer::render_document(doc, style))
    }
}
