//! XYML renderers
//!
//! Both styles walk the tree depth-first and write one `- ` entry per line,
//! indented two spaces per nesting level:
//!
//! ```text
//! ---
//! - quiz:
//!   - type: test
//!   - question:
//!     - some text
//!   - empty:
//!     -
//! ```
//!
//! The field-preserving style writes every text fragment on its own line.
//! The canonical style joins each run of adjacent fragments, trims it and
//! writes it once, so that reading the output back yields one fragment per
//! run and rendering again gives the same bytes.

use crate::element::{Element, Member};
use crate::escape::render_scalar;
use crate::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indent unit per nesting level.
pub const INDENT: &str = "  ";
/// Prefix of every sequence entry.
pub const SEQUENCE_ENTRY: &str = "- ";
/// Between an attribute name and its value.
pub const MAPPING_VALUE: &str = ": ";
/// First line of a rendered document.
pub const DOCUMENT_START: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderStyle {
    /// One line per stored text fragment
    #[default]
    #[serde(rename = "field")]
    FieldPreserving,
    /// Adjacent fragments joined and trimmed
    #[serde(rename = "canonical")]
    Canonical,
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field" | "field-preserving" => Ok(RenderStyle::FieldPreserving),
            "canonical" | "standard" => Ok(RenderStyle::Canonical),
            other => Err(format!(
                "Unknown render style '{other}' (expected 'field' or 'canonical')"
            )),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::FieldPreserving => f.write_str("field"),
            RenderStyle::Canonical => f.write_str("canonical"),
        }
    }
}

/// Render a whole document, starting with the `---` line.
pub fn render_document(doc: &Document, style: RenderStyle) -> String {
    let mut serializer = XymlSerializer::new(style);
    serializer.output.push_str(DOCUMENT_START);
    serializer.output.push('\n');
    serializer.element(doc.root(), 0);
    serializer.output
}

/// Render one element as a top-level entry, without the document line.
pub fn render_element(element: &Element, style: RenderStyle) -> String {
    let mut serializer = XymlSerializer::new(style);
    serializer.element(element, 0);
    serializer.output
}

struct XymlSerializer {
    style: RenderStyle,
    output: String,
}

impl XymlSerializer {
    fn new(style: RenderStyle) -> Self {
        Self {
            style,
            output: String::new(),
        }
    }

    fn element(&mut self, element: &Element, depth: usize) {
        self.line(depth, &format!("{}:", element.name()));
        let written = self.output.len();
        match self.style {
            RenderStyle::FieldPreserving => self.members_as_stored(element, depth + 1),
            RenderStyle::Canonical => self.members_joined(element, depth + 1),
        }
        if self.output.len() == written {
            self.line(depth + 1, "");
        }
    }

    fn members_as_stored(&mut self, element: &Element, depth: usize) {
        for member in element.members().iter() {
            match member {
                Member::Attribute(attribute) => self.line(
                    depth,
                    &format!(
                        "{}{MAPPING_VALUE}{}",
                        attribute.name,
                        render_scalar(&attribute.value)
                    ),
                ),
                Member::Element(child) => self.element(child, depth),
                Member::Text(text) => self.line(depth, &render_scalar(text)),
            }
        }
    }

    fn members_joined(&mut self, element: &Element, depth: usize) {
        let mut pending = String::new();
        for member in element.members().iter() {
            match member {
                Member::Text(text) => pending.push_str(text),
                Member::Attribute(attribute) => {
                    self.flush_text(&mut pending, depth);
                    self.line(
                        depth,
                        &format!(
                            "{}{MAPPING_VALUE}{}",
                            attribute.name,
                            render_scalar(attribute.value.trim())
                        ),
                    );
                }
                Member::Element(child) => {
                    self.flush_text(&mut pending, depth);
                    self.element(child, depth);
                }
            }
        }
        self.flush_text(&mut pending, depth);
    }

    fn flush_text(&mut self, pending: &mut String, depth: usize) {
        let text = pending.trim();
        if !text.is_empty() {
            self.line(depth, &render_scalar(text));
        }
        pending.clear();
    }

    fn line(&mut self, depth: usize, content: &str) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(SEQUENCE_ENTRY);
        self.output.push_str(content);
        self.output.push('\n');
    }
}
