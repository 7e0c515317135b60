//! XML writer over a markup DOM
//!
//! Markup is written by `xml5ever`'s serializer: attribute values in double
//! quotes, and every element as a start and end tag, so an element without
//! content comes out as `<name></name>`. Output starts with the XML
//! declaration. Compact output reproduces text nodes exactly. Indented output
//! first reshapes the freshly built DOM: whitespace-only text nodes are
//! removed and line breaks are inserted before each child element and before
//! the end tag of an element holding children.

use crate::convert::markup::{create_text, document_to_dom};
use crate::error::FormatError;
use crate::Document;
use markup5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::rc::Rc;
use xml5ever::serialize::{serialize, SerializeOpts};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XmlOptions {
    /// Spaces per nesting level; `None` writes compact output
    pub indent: Option<usize>,
}

impl XmlOptions {
    pub fn indented(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

pub fn serialize_to_xml(doc: &Document, options: XmlOptions) -> Result<String, FormatError> {
    serialize_dom(&document_to_dom(doc), options)
}

/// Write every element under the document node of `dom`.
///
/// With an indent set, `dom` is reshaped in place before writing.
pub fn serialize_dom(dom: &RcDom, options: XmlOptions) -> Result<String, FormatError> {
    let elements: Vec<Handle> = dom
        .document
        .children
        .borrow()
        .iter()
        .filter(|child| is_element(child))
        .cloned()
        .collect();
    if let Some(width) = options.indent {
        for element in &elements {
            indent(element, 0, width);
        }
    }

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let mut output = Vec::new();
    output.extend_from_slice(XML_DECLARATION.as_bytes());
    output.push(b'\n');
    for element in elements {
        serialize(&mut output, &SerializableHandle::from(element), opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("Failed to serialize XML: {e}"))
        })?;
    }
    output.push(b'\n');

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("Invalid UTF-8 in XML output: {e}")))
}

fn is_element(handle: &Handle) -> bool {
    matches!(handle.data, NodeData::Element { .. })
}

fn indent(node: &Handle, depth: usize, width: usize) {
    let mut children = node.children.borrow_mut();
    children.retain(|child| match &child.data {
        NodeData::Text { contents } => !contents.borrow().trim().is_empty(),
        _ => true,
    });
    if !children.iter().any(is_element) {
        return;
    }

    for child in std::mem::take(&mut *children) {
        if is_element(&child) {
            indent(&child, depth + 1, width);
            children.push(line_break(node, depth + 1, width));
        }
        children.push(child);
    }
    children.push(line_break(node, depth, width));
}

fn line_break(parent: &Handle, depth: usize, width: usize) -> Handle {
    let text = create_text(format!("\n{}", " ".repeat(width * depth)));
    text.parent.set(Some(Rc::downgrade(parent)));
    text
}
