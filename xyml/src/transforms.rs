//! Pipeline helpers over the format registry
//!
//! Small functional entry points for the common conversions, usable from
//! the CLI or any other shell without touching the registry directly.

use crate::element::Element;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::xyml::serializer::{render_element, RenderStyle};
use crate::formats::xyml::XymlFormat;
use crate::registry::FormatRegistry;
use crate::Document;
use std::collections::HashMap;

/// Parse `source` as `from` and serialize it as `to` with default options.
///
/// ```ignore
/// let json = convert("<a b='c'/>", "xml", "json")?;
/// assert_eq!(json, r#"[{"a":[{"b":"c"}]}]"#);
/// ```
pub fn convert(source: &str, from: &str, to: &str) -> Result<String, FormatError> {
    convert_with_options(source, from, to, &HashMap::new())
}

/// Like [`convert`], passing `options` to the target format.
pub fn convert_with_options(
    source: &str,
    from: &str,
    to: &str,
    options: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(source, from)?;
    registry.serialize_with_options(&doc, to, options)
}

/// Round-trip XYML text through the element tree, re-rendering it in `style`.
///
/// ```ignore
/// let out = format_xyml_source("- a:\n  - te\n  - xt\n", RenderStyle::Canonical)?;
/// assert_eq!(out, "---\n- a:\n  - text\n");
/// ```
pub fn format_xyml_source(source: &str, style: RenderStyle) -> Result<String, FormatError> {
    let format = XymlFormat::new(style);
    let doc = format.parse(source)?;
    format.serialize(&doc)
}

/// Descendants of the root named `name`, optionally filtered by one
/// attribute value. The root itself is included when it matches.
pub fn select(doc: &Document, name: &str, attr: Option<(&str, &str)>) -> Vec<Element> {
    let root = doc.root();
    let matches_root = &**root.name() == name
        && attr.map_or(true, |(key, value)| root.attr(key).as_deref() == Some(value));

    let mut found = Vec::new();
    if matches_root {
        found.push(root.clone());
    }
    found.extend(match attr {
        Some((key, value)) => root.descendants_with_attr(name, key, value),
        None => root.descendants_named(name),
    });
    found
}

/// Render each element as a top-level XYML entry.
pub fn render_selection(elements: &[Element], style: RenderStyle) -> String {
    elements
        .iter()
        .map(|element| render_element(element, style))
        .collect()
}
