//! Read-only queries over an element tree
//!
//! Only members that are elements count as children; attributes and text
//! never show up here. Every "first" query returns the first match in
//! source order, depth-first pre-order for descendants.

use super::{Element, Member, Name, ParentLink};

impl Element {
    /// All child elements, in source order.
    pub fn children(&self) -> Vec<Element> {
        self.collect_children(|_| true)
    }

    pub fn first_child(&self) -> Option<Element> {
        self.find_child(|_| true)
    }

    /// Child elements named `name`.
    pub fn children_named(&self, name: &str) -> Vec<Element> {
        self.collect_children(|child| &**child.name() == name)
    }

    pub fn first_child_named(&self, name: &str) -> Option<Element> {
        self.find_child(|child| &**child.name() == name)
    }

    /// Descendants named `name`, at any depth.
    pub fn descendants_named(&self, name: &str) -> Vec<Element> {
        self.collect_descendants(&|element| &**element.name() == name)
    }

    pub fn first_descendant_named(&self, name: &str) -> Option<Element> {
        self.find_descendant(&|element| &**element.name() == name)
    }

    /// Child elements named `name` whose attribute `attr` equals `value`.
    pub fn children_with_attr(&self, name: &str, attr: &str, value: &str) -> Vec<Element> {
        self.collect_children(|child| &**child.name() == name && child.has_attr_value(attr, value))
    }

    pub fn first_child_with_attr(&self, name: &str, attr: &str, value: &str) -> Option<Element> {
        self.find_child(|child| &**child.name() == name && child.has_attr_value(attr, value))
    }

    pub fn descendants_with_attr(&self, name: &str, attr: &str, value: &str) -> Vec<Element> {
        self.collect_descendants(&|element| {
            &**element.name() == name && element.has_attr_value(attr, value)
        })
    }

    pub fn first_descendant_with_attr(
        &self,
        name: &str,
        attr: &str,
        value: &str,
    ) -> Option<Element> {
        self.find_descendant(&|element| {
            &**element.name() == name && element.has_attr_value(attr, value)
        })
    }

    /// Child elements of any name whose attribute `attr` equals `value`.
    pub fn children_by_attr(&self, attr: &str, value: &str) -> Vec<Element> {
        self.collect_children(|child| child.has_attr_value(attr, value))
    }

    pub fn descendants_by_attr(&self, attr: &str, value: &str) -> Vec<Element> {
        self.collect_descendants(&|element| element.has_attr_value(attr, value))
    }

    /// The child element just before this one in its parent.
    pub fn prev_sibling(&self) -> Option<Element> {
        let siblings = self.parent()?.children();
        let index = siblings.iter().position(|sibling| sibling == self)?;
        index.checked_sub(1).map(|i| siblings[i].clone())
    }

    /// The child element just after this one in its parent.
    pub fn next_sibling(&self) -> Option<Element> {
        let siblings = self.parent()?.children();
        let index = siblings.iter().position(|sibling| sibling == self)?;
        siblings.get(index + 1).cloned()
    }

    /// Value of the first attribute named `name`.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.members().iter().find_map(|member| match member {
            Member::Attribute(attribute) if &*attribute.name == name => {
                Some(attribute.value.clone())
            }
            _ => None,
        })
    }

    /// All attributes as `(name, value)` pairs, in source order.
    pub fn attrs(&self) -> Vec<(Name, String)> {
        self.members()
            .iter()
            .filter_map(Member::as_attribute)
            .map(|attribute| (attribute.name.clone(), attribute.value.clone()))
            .collect()
    }

    /// Concatenation of all text fragments.
    pub fn text(&self) -> String {
        self.members()
            .iter()
            .filter_map(Member::as_text)
            .collect()
    }

    /// Text fragments as stored, without joining.
    pub fn text_fragments(&self) -> Vec<String> {
        self.members()
            .iter()
            .filter_map(Member::as_text)
            .map(str::to_string)
            .collect()
    }

    /// The parent element. A document root has none.
    pub fn parent(&self) -> Option<Element> {
        match self.link() {
            ParentLink::Element(weak) => weak.upgrade().map(Element),
            ParentLink::Root | ParentLink::Detached => None,
        }
    }

    /// Walk up to the document root.
    ///
    /// Returns `None` when the chain ends in a detached node instead.
    pub fn root(&self) -> Option<Element> {
        let mut current = self.clone();
        loop {
            match current.link() {
                ParentLink::Root => return Some(current),
                ParentLink::Detached => return None,
                ParentLink::Element(weak) => current = Element(weak.upgrade()?),
            }
        }
    }

    /// Whether `self` is `other` or one of its ancestors.
    pub(crate) fn is_ancestor_or_self_of(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if &element == self {
                return true;
            }
            current = element.parent();
        }
        false
    }

    fn has_attr_value(&self, attr: &str, value: &str) -> bool {
        self.attr(attr).as_deref() == Some(value)
    }

    fn collect_children(&self, predicate: impl Fn(&Element) -> bool) -> Vec<Element> {
        self.members()
            .iter()
            .filter_map(Member::as_element)
            .filter(|child| predicate(child))
            .cloned()
            .collect()
    }

    fn find_child(&self, predicate: impl Fn(&Element) -> bool) -> Option<Element> {
        self.members()
            .iter()
            .filter_map(Member::as_element)
            .find(|child| predicate(child))
            .cloned()
    }

    fn collect_descendants(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<Element> {
        let mut found = Vec::new();
        self.walk_descendants(predicate, &mut found);
        found
    }

    fn walk_descendants(&self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<Element>) {
        for child in self.members().iter().filter_map(Member::as_element) {
            if predicate(child) {
                found.push(child.clone());
            }
            child.walk_descendants(predicate, found);
        }
    }

    fn find_descendant(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<Element> {
        for child in self.members().iter().filter_map(Member::as_element) {
            if predicate(child) {
                return Some(child.clone());
            }
            if let Some(found) = child.find_descendant(predicate) {
                return Some(found);
            }
        }
        None
    }
}
