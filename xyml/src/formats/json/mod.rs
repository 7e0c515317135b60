//! JSON format
//!
//! JSON carries the raw tree as is: `[{"a":[{"b":"ccc"},{"d":["eee"]}]}]`.
//! Reading goes through the same classification as XYML. Writing serializes
//! the plain raw tree, so parent links never reach the output and every
//! attribute value and text fragment is a JSON string.
//!
//! Options:
//! - `pretty`: `true` writes indented JSON.

use crate::convert::raw::document_from_raw;
use crate::error::FormatError;
use crate::format::Format;
use crate::Document;
use serde_yaml::Value;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn write(&self, doc: &Document, pretty: bool) -> Result<String, FormatError> {
        let raw = doc.to_raw();
        let written = if pretty {
            serde_json::to_string_pretty(&raw)
        } else {
            serde_json::to_string(&raw)
        };
        written.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON interchange of the raw element tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let raw: Value =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        Ok(document_from_raw(&raw)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        self.write(doc, self.pretty)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = match options.get("pretty").map(String::as_str) {
            None => self.pretty,
            Some("true") | Some("") => true,
            Some("false") => false,
            Some(other) => {
                return Err(FormatError::SerializationError(format!(
                    "Invalid value for pretty: '{other}'"
                )))
            }
        };
        self.write(doc, pretty)
    }
}
