//! Raw tree ⇄ element tree
//!
//! A raw tree is what a generic YAML or JSON reader produces: mappings,
//! sequences and scalars. An element is a single-entry mapping from its name
//! to a sequence of members, and each member is classified by shape:
//!
//! | item                                   | member                |
//! |----------------------------------------|-----------------------|
//! | `{key: scalar}` in the leading run     | attribute             |
//! | `{key: [..]}`                          | child element         |
//! | bare scalar                            | text fragment         |
//! | bare sequence                          | ignored               |
//!
//! Classification is a one-way state machine. It starts by reading
//! attributes; the first item that is not attribute-shaped switches it to
//! reading content for the rest of the sequence. An attribute-shaped item met
//! after that point is not an attribute: it is read as content, where a
//! mapping without a sequence value carries no element and is dropped.
//!
//! ```text
//! - a:
//!   - x: 1        attribute
//!   - child:      element, switches to content
//!     - ...
//!   - y: 2        content: not an element, dropped
//! ```

use crate::element::{Attribute, Element, Member, Name};
use crate::error::StructureError;
use crate::Document;
use serde_yaml::{Mapping, Value};
use tracing::{debug, trace, warn};

/// Read an element from a raw tree, stringifying scalar keys.
pub fn normalize(raw: &Value) -> Result<Element, StructureError> {
    Normalizer { strict: false }.element(raw)
}

/// Read an element from a raw tree built by a program rather than a parser.
///
/// Every mapping key must be a string identifier token, `null` items are
/// skipped and empty text fragments are kept.
pub fn normalize_strict(raw: &Value) -> Result<Element, StructureError> {
    Normalizer { strict: true }.element(raw)
}

/// Read a document from a raw tree.
///
/// Accepts the document shape (a sequence holding the root mapping) or a
/// bare root mapping.
pub fn document_from_raw(raw: &Value) -> Result<Document, StructureError> {
    let root = match untag(raw) {
        Value::Sequence(items) => {
            let first = items.first().ok_or(StructureError::NoRootElement)?;
            if items.len() > 1 {
                warn!(ignored = items.len() - 1, "document holds more than one root");
            }
            if first.is_sequence() {
                return Err(StructureError::SequenceAtTop);
            }
            normalize(first)?
        }
        Value::Null => return Err(StructureError::NoRootElement),
        _ => normalize(raw)?,
    };
    Ok(Document::from_root(root))
}

/// Plain raw tree for `element`.
///
/// Parent links live outside the member sequence, so the result is plain
/// data that any serializer can write.
pub fn element_to_raw(element: &Element) -> Value {
    let members = element
        .members()
        .iter()
        .map(|member| match member {
            Member::Attribute(attribute) => single_entry(
                Value::String(attribute.name.to_string()),
                Value::String(attribute.value.clone()),
            ),
            Member::Element(child) => element_to_raw(child),
            Member::Text(text) => Value::String(text.clone()),
        })
        .collect();
    single_entry(
        Value::String(element.name().to_string()),
        Value::Sequence(members),
    )
}

/// Raw tree for a whole document: a sequence holding the root.
pub fn document_to_raw(doc: &Document) -> Value {
    Value::Sequence(vec![element_to_raw(doc.root())])
}

/// Render a scalar the way it reads as text.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => String::new(),
    }
}

enum Phase {
    Attributes,
    Content,
}

struct Normalizer {
    strict: bool,
}

impl Normalizer {
    fn element(&self, raw: &Value) -> Result<Element, StructureError> {
        let mapping = match untag(raw) {
            Value::Mapping(mapping) => mapping,
            Value::Sequence(_) => return Err(StructureError::SequenceAtTop),
            scalar => {
                return Err(StructureError::NotAnElement {
                    name: scalar_to_string(scalar),
                })
            }
        };
        let (name, value) = self.entry(mapping, "(top)")?;
        match untag(value) {
            Value::Sequence(items) => {
                let element = Element::new(name);
                self.fill(&element, items)?;
                Ok(element)
            }
            _ => Err(StructureError::NotAnElement {
                name: name.to_string(),
            }),
        }
    }

    fn fill(&self, element: &Element, items: &[Value]) -> Result<(), StructureError> {
        let mut phase = Phase::Attributes;
        let items = items
            .iter()
            .map(untag)
            .filter(|item| !(self.strict && item.is_null()));
        for item in items {
            if let Phase::Attributes = phase {
                if let Value::Mapping(mapping) = item {
                    let (name, value) = self.entry(mapping, element.name())?;
                    if !is_collection(value) {
                        self.push_attribute(element, name, value);
                        continue;
                    }
                }
                phase = Phase::Content;
            }
            self.push_content(element, item)?;
        }
        trace!(element = %element.name(), members = element.member_count(), "normalized");
        Ok(())
    }

    fn push_attribute(&self, element: &Element, name: Name, value: &Value) {
        let value = scalar_to_string(value);
        if self.strict {
            element
                .members_mut()
                .push(Member::Attribute(Attribute { name, value }));
        } else {
            element.set_attr(name, value);
        }
    }

    fn push_content(&self, element: &Element, item: &Value) -> Result<(), StructureError> {
        match item {
            Value::Mapping(mapping) => {
                let (name, value) = self.entry(mapping, element.name())?;
                match untag(value) {
                    Value::Sequence(items) => {
                        let child = Element::new(name);
                        self.fill(&child, items)?;
                        element.append_child(&child);
                    }
                    _ => debug!(
                        element = %element.name(),
                        key = %name,
                        "dropping non-element mapping after content"
                    ),
                }
            }
            Value::Sequence(_) => trace!(element = %element.name(), "ignoring bare sequence"),
            scalar => {
                let text = scalar_to_string(scalar);
                if self.strict || !text.is_empty() {
                    element.members_mut().push(Member::Text(text));
                }
            }
        }
        Ok(())
    }

    fn entry<'a>(
        &self,
        mapping: &'a Mapping,
        parent: &str,
    ) -> Result<(Name, &'a Value), StructureError> {
        let mut entries = mapping.iter();
        let (key, value) = entries.next().ok_or_else(|| StructureError::EmptyMapping {
            parent: parent.to_string(),
        })?;
        if entries.next().is_some() {
            return Err(StructureError::MultipleKeys {
                first_key: scalar_to_string(key),
            });
        }
        Ok((self.key_name(key, parent)?, value))
    }

    fn key_name(&self, key: &Value, parent: &str) -> Result<Name, StructureError> {
        let key = untag(key);
        if is_collection(key) {
            return Err(StructureError::NonScalarKey {
                parent: parent.to_string(),
            });
        }
        let name = scalar_to_string(key);
        let valid = if self.strict {
            key.is_string() && is_identifier(&name)
        } else {
            !name.is_empty()
        };
        if !valid {
            return Err(StructureError::InvalidIdentifier { key: name });
        }
        Ok(Name::from(name))
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn is_collection(value: &Value) -> bool {
    let value = untag(value);
    value.is_sequence() || value.is_mapping()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn single_entry(key: Value, value: Value) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert(key, value);
    Value::Mapping(mapping)
}
