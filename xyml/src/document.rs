//! Document: the container owning one root element

use crate::convert::{markup, raw};
use crate::element::{Element, Name};
use crate::error::StructureError;
use crate::formats::xyml::serializer::{render_document, RenderStyle};
use markup5ever_rcdom::RcDom;
use serde_yaml::Value;

/// Owns exactly one root element, whose parent link marks it as the root.
///
/// Dropping the document demotes the root to a detached element, so handles
/// kept past the document see `root() == None` from then on.
#[derive(Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    /// A document whose root is a fresh, empty element.
    pub fn new(name: impl Into<Name>) -> Self {
        Self::from_root(Element::new(name))
    }

    /// Adopt `root` as the document root, taking it out of any parent first.
    pub fn from_root(root: Element) -> Self {
        root.remove_from_parent();
        root.mark_root();
        Self { root }
    }

    /// See [`raw::document_from_raw`].
    pub fn from_raw(raw: &Value) -> Result<Self, StructureError> {
        raw::document_from_raw(raw)
    }

    /// See [`markup::document_from_dom`].
    pub fn from_dom(dom: &RcDom) -> Result<Self, StructureError> {
        markup::document_from_dom(dom)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Give up the root. The returned element is detached.
    pub fn into_root(self) -> Element {
        self.root.clone()
    }

    /// Plain raw tree, ready for any serializer.
    pub fn to_raw(&self) -> Value {
        raw::document_to_raw(self)
    }

    pub fn to_dom(&self) -> RcDom {
        markup::document_to_dom(self)
    }

    /// Render as XYML text in the given style.
    pub fn render(&self, style: RenderStyle) -> String {
        render_document(self, style)
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        self.root.detach_from_parent();
    }
}
