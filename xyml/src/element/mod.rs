//! Element tree model
//!
//! An element is a named node holding an ordered sequence of members. Each
//! member is an attribute, a child element or a text fragment, and the order
//! in which they were read is the order in which they are written back.
//!
//! ```text
//!     +-- element ------------------------+
//!     |  name                             |
//!     |  members: [attr, attr, elem, text]|
//!     |  parent:  Detached | Root | Weak  |
//!     +-----------------------------------+
//! ```
//!
//! [`Element`] is a handle: cloning it clones an `Rc`, and two handles are
//! equal only when they point at the same node. A parent owns its children
//! through its member sequence; the link back from a child to its parent is
//! weak, so a detached subtree lives exactly as long as someone holds it.
//!
//! Navigation lives in [`navigation`], in-place edits in [`mutation`].

mod mutation;
mod navigation;

use markup5ever::LocalName;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Interned element and attribute name.
pub type Name = LocalName;

/// One entry of an element's member sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Attribute(Attribute),
    Element(Element),
    Text(String),
}

impl Member {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Member::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Member::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Member::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A `name: value` member. Values are kept in their rendered string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Name,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<Name>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Upward link of a node.
#[derive(Debug, Clone, Default)]
pub(crate) enum ParentLink {
    /// Freshly built or detached
    #[default]
    Detached,
    /// Root of a [`crate::Document`]
    Root,
    Element(Weak<Node>),
}

pub(crate) struct Node {
    name: Name,
    members: RefCell<Vec<Member>>,
    parent: RefCell<ParentLink>,
}

/// Handle to a node of an element tree.
#[derive(Clone)]
pub struct Element(Rc<Node>);

impl Element {
    /// Create a detached element with no members.
    pub fn new(name: impl Into<Name>) -> Self {
        Self::with_members(name, Vec::new())
    }

    /// Create a detached element owning `members`.
    ///
    /// Child elements among `members` are re-parented to the new element.
    /// A child that cannot be adopted, such as the root of a live document,
    /// is left where it is and does not become a member.
    pub fn with_members(name: impl Into<Name>, members: Vec<Member>) -> Self {
        let element = Element(Rc::new(Node {
            name: name.into(),
            members: RefCell::new(Vec::new()),
            parent: RefCell::new(ParentLink::Detached),
        }));
        for member in members {
            match member {
                Member::Element(child) => {
                    if element.append_child(&child).is_none() {
                        debug!(
                            parent = %element.name(),
                            child = %child.name(),
                            "skipping member that cannot be adopted"
                        );
                    }
                }
                other => element.0.members.borrow_mut().push(other),
            }
        }
        element
    }

    pub fn name(&self) -> &Name {
        &self.0.name
    }

    /// True iff this node is the root of a document.
    pub fn is_root(&self) -> bool {
        matches!(*self.0.parent.borrow(), ParentLink::Root)
    }

    /// Forget the parent link without touching any member sequence.
    pub fn detach_from_parent(&self) {
        self.set_link(ParentLink::Detached);
    }

    /// Borrow the member sequence.
    ///
    /// The borrow must be released before the element is mutated.
    pub fn members(&self) -> Ref<'_, Vec<Member>> {
        self.0.members.borrow()
    }

    pub fn member_count(&self) -> usize {
        self.0.members.borrow().len()
    }

    pub(crate) fn members_mut(&self) -> std::cell::RefMut<'_, Vec<Member>> {
        self.0.members.borrow_mut()
    }

    pub(crate) fn set_link(&self, link: ParentLink) {
        *self.0.parent.borrow_mut() = link;
    }

    pub(crate) fn mark_root(&self) {
        self.set_link(ParentLink::Root);
    }

    pub(crate) fn link_to(&self, parent: &Element) {
        self.set_link(ParentLink::Element(Rc::downgrade(&parent.0)));
    }

    pub(crate) fn link(&self) -> ParentLink {
        self.0.parent.borrow().clone()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &&*self.0.name)
            .field("members", &*self.0.members.borrow())
            .finish()
    }
}
