//! Element tree ⇄ markup DOM
//!
//! The DOM side is `markup5ever_rcdom`, the same tree the markup reader
//! builds. Going out, attributes become DOM attributes in member order and
//! each run of adjacent text fragments becomes one text node. Coming back,
//! every DOM text node becomes one fragment; comments, processing
//! instructions and doctypes carry no members and are skipped.

use crate::element::{Attribute, Element, Member, Name};
use crate::error::StructureError;
use crate::Document;
use markup5ever::{ns, Attribute as DomAttribute, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{trace, warn};

/// Build a detached DOM subtree for `element`.
///
/// Names the lenient reader accepts but markup cannot carry, such as `1` or
/// `two words`, are copied as they are and logged at `warn`.
pub fn element_to_dom(element: &Element) -> Handle {
    let members = element.members();
    if !is_markup_name(element.name()) {
        warn!(element = %element.name(), "element name is not a valid markup name");
    }
    let attrs = members
        .iter()
        .filter_map(Member::as_attribute)
        .inspect(|attribute| {
            if !is_markup_name(&attribute.name) {
                warn!(
                    element = %element.name(),
                    attribute = %attribute.name,
                    "attribute name is not a valid markup name"
                );
            }
        })
        .map(|attribute| DomAttribute {
            name: QualName::new(None, ns!(), attribute.name.clone()),
            value: attribute.value.clone().into(),
        })
        .collect();
    let node = create_element(element.name().clone(), attrs);

    let mut pending = String::new();
    for member in members.iter() {
        match member {
            Member::Attribute(_) => {}
            Member::Text(text) => pending.push_str(text),
            Member::Element(child) => {
                flush_text(&node, &mut pending);
                append(&node, element_to_dom(child));
            }
        }
    }
    flush_text(&node, &mut pending);
    node
}

/// A fresh DOM whose document node holds the tree of `doc`.
pub fn document_to_dom(doc: &Document) -> RcDom {
    let dom = RcDom::default();
    append(&dom.document, element_to_dom(doc.root()));
    dom
}

/// Build an element from a DOM element node.
///
/// Returns `None` when `handle` is not an element.
pub fn dom_to_element(handle: &Handle) -> Option<Element> {
    let NodeData::Element { name, attrs, .. } = &handle.data else {
        return None;
    };
    let element = Element::new(qualified_name(name));
    element.members_mut().extend(attrs.borrow().iter().map(|attr| {
        Member::Attribute(Attribute {
            name: qualified_name(&attr.name),
            value: attr.value.to_string(),
        })
    }));

    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Element { .. } => {
                if let Some(child) = dom_to_element(child) {
                    element.append_child(&child);
                }
            }
            NodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.is_empty() {
                    element.append_text(&**text);
                }
            }
            _ => trace!(element = %element.name(), "skipping non-content node"),
        }
    }
    Some(element)
}

/// Read the document element of `dom` into a [`Document`].
pub fn document_from_dom(dom: &RcDom) -> Result<Document, StructureError> {
    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find_map(dom_to_element)
        .ok_or(StructureError::NoRootElement)?;
    Ok(Document::from_root(root))
}

/// Whether `name` can stand as an XML element or attribute name.
pub(crate) fn is_markup_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// `prefix:local` for prefixed names, the bare local name otherwise.
fn qualified_name(name: &QualName) -> Name {
    match &name.prefix {
        Some(prefix) => Name::from(format!("{}:{}", &**prefix, &*name.local)),
        None => name.local.clone(),
    }
}

fn create_element(name: Name, attrs: Vec<DomAttribute>) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: QualName::new(None, ns!(), name),
            attrs: RefCell::new(attrs),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

pub(crate) fn create_text(text: String) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.into()),
        },
    })
}

fn flush_text(parent: &Handle, pending: &mut String) {
    if !pending.is_empty() {
        append(parent, create_text(std::mem::take(pending)));
    }
}

fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup5ever::{LocalName, Namespace, Prefix};

    fn dom_text(handle: &Handle) -> Option<String> {
        match &handle.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }

    #[test]
    fn adjacent_text_becomes_one_node() {
        let e = Element::new("p");
        e.set_attr("lang", "en");
        e.append_text("te").append_text("xt");
        e.append_child(&Element::new("br"));
        e.append_text("tail");

        let node = element_to_dom(&e);
        let children = node.children.borrow();
        assert_eq!(children.len(), 3);
        assert_eq!(dom_text(&children[0]).as_deref(), Some("text"));
        assert_eq!(dom_text(&children[2]).as_deref(), Some("tail"));
        match &node.data {
            NodeData::Element { attrs, .. } => {
                let attrs = attrs.borrow();
                assert_eq!(&*attrs[0].name.local, "lang");
                assert_eq!(&*attrs[0].value, "en");
            }
            _ => panic!("expected an element node"),
        }
    }

    #[test]
    fn round_trip_keeps_structure() {
        let inner = Element::new("inner");
        inner.set_attr("k", "v").set_text("body");
        let outer = Element::new("outer");
        outer.set_attr("id", "1");
        outer.append_child(&inner);

        let back = dom_to_element(&element_to_dom(&outer)).unwrap();
        assert_eq!(back.attr("id").as_deref(), Some("1"));
        let child = back.first_child_named("inner").unwrap();
        assert_eq!(child.attr("k").as_deref(), Some("v"));
        assert_eq!(child.text(), "body");
        assert_eq!(child.parent(), Some(back));
    }

    #[test]
    fn prefixed_names_keep_their_prefix() {
        let name = QualName::new(
            Some(Prefix::from("q")),
            Namespace::from("urn:quiz"),
            LocalName::from("item"),
        );
        let node = Rc::new(Node {
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
            data: NodeData::Element {
                name,
                attrs: RefCell::new(Vec::new()),
                template_contents: Default::default(),
                mathml_annotation_xml_integration_point: false,
            },
        });
        assert_eq!(&**dom_to_element(&node).unwrap().name(), "q:item");
    }

    #[test]
    fn document_needs_an_element() {
        let dom = RcDom::default();
        assert_eq!(
            document_from_dom(&dom).unwrap_err(),
            StructureError::NoRootElement
        );
        append(&dom.document, create_text("stray".to_string()));
        append(
            &dom.document,
            create_element(LocalName::from("quiz"), Vec::new()),
        );
        let doc = document_from_dom(&dom).unwrap();
        assert!(doc.root().is_root());
        assert_eq!(&**doc.root().name(), "quiz");
    }

    #[test]
    fn markup_names() {
        for name in ["quiz", "questionText", "_x", "q:item", "data-id", "v1.2", "état"] {
            assert!(is_markup_name(name), "{name}");
        }
        for name in ["", "1", "1st", "two words", "-x", "a<b", "a=b"] {
            assert!(!is_markup_name(name), "{name}");
        }
    }

    #[test]
    fn invalid_names_are_still_carried() {
        let e = Element::new("1st");
        e.set_attr("two words", "x");
        let node = element_to_dom(&e);
        match &node.data {
            NodeData::Element { name, attrs, .. } => {
                assert_eq!(&*name.local, "1st");
                assert_eq!(&*attrs.borrow()[0].name.local, "two words");
            }
            _ => panic!("expected an element node"),
        }
    }

    #[test]
    fn non_element_handles_are_refused() {
        assert!(dom_to_element(&create_text("x".to_string())).is_none());
    }
}
