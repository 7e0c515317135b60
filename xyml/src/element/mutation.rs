//! In-place edits of an element tree
//!
//! Shape mismatches are not errors here: an edit that cannot be applied
//! returns `None` (or `false`) and leaves the tree as it was.

use super::{Attribute, Element, Member, Name};
use crate::convert::raw::{self, scalar_to_string};
use crate::error::StructureError;
use serde_yaml::Value;
use tracing::debug;

impl Element {
    /// Append `child` as the last member and make `self` its parent.
    ///
    /// A child that already has a parent is moved. Fails when `child` is a
    /// document root or when the move would put a node inside itself.
    pub fn append_child(&self, child: &Element) -> Option<Element> {
        if !self.can_adopt(child) {
            return None;
        }
        child.remove_from_parent();
        self.members_mut().push(Member::Element(child.clone()));
        child.link_to(self);
        Some(child.clone())
    }

    /// Normalize `raw` into an element and append it.
    ///
    /// Fails unless `raw` is a single-entry mapping whose value is a
    /// sequence of members with identifier keys.
    pub fn append_raw(&self, raw: &Value) -> Option<Element> {
        match raw::normalize_strict(raw) {
            Ok(child) => self.append_child(&child),
            Err(err) => {
                debug!(parent = %self.name(), %err, "raw value is not an element");
                None
            }
        }
    }

    /// Insert `sibling` into the parent's member sequence just before `self`.
    pub fn insert_before_sibling(&self, sibling: &Element) -> Option<Element> {
        self.insert_sibling(sibling, 0)
    }

    /// Insert `sibling` into the parent's member sequence just after `self`.
    pub fn insert_after_sibling(&self, sibling: &Element) -> Option<Element> {
        self.insert_sibling(sibling, 1)
    }

    /// Set attribute `name`, updating it in place when it already exists.
    ///
    /// Only the leading run of attributes is searched. A new attribute goes
    /// right before the first child element or text fragment, or at the end.
    pub fn set_attr(&self, name: impl Into<Name>, value: impl ToString) -> &Self {
        let name = name.into();
        let value = value.to_string();
        let mut members = self.members_mut();
        let boundary = attribute_prefix_len(&members);
        let existing = members[..boundary]
            .iter_mut()
            .find_map(|member| match member {
                Member::Attribute(attribute) if attribute.name == name => Some(attribute),
                _ => None,
            });
        match existing {
            Some(attribute) => attribute.value = value,
            None => members.insert(boundary, Member::Attribute(Attribute { name, value })),
        }
        self
    }

    /// Like [`Element::set_attr`] for an arbitrary raw value.
    ///
    /// Sequences and mappings are refused.
    pub fn set_attr_value(&self, name: impl Into<Name>, value: &Value) -> Option<&Self> {
        if value.is_sequence() || value.is_mapping() {
            return None;
        }
        Some(self.set_attr(name, scalar_to_string(value)))
    }

    /// Remove attribute `name` from the leading run of attributes.
    ///
    /// Returns the removed value.
    pub fn delete_attr(&self, name: &str) -> Option<String> {
        let mut members = self.members_mut();
        let boundary = attribute_prefix_len(&members);
        let index = members[..boundary].iter().position(|member| {
            matches!(member, Member::Attribute(attribute) if &*attribute.name == name)
        })?;
        match members.remove(index) {
            Member::Attribute(attribute) => Some(attribute.value),
            _ => None,
        }
    }

    /// Replace all text fragments with a single one holding `value`.
    pub fn set_text(&self, value: impl ToString) -> &Self {
        self.clear_text();
        self.members_mut().push(Member::Text(value.to_string()));
        self
    }

    /// Remove every text fragment.
    pub fn clear_text(&self) -> &Self {
        self.members_mut()
            .retain(|member| !matches!(member, Member::Text(_)));
        self
    }

    /// Append one more text fragment. Existing fragments are not merged.
    pub fn append_text(&self, value: impl ToString) -> &Self {
        self.members_mut().push(Member::Text(value.to_string()));
        self
    }

    /// Remove `self` from its parent's members and clear its parent link.
    ///
    /// Returns `Ok(false)` when there is no parent to leave.
    pub fn detach_self(&self) -> Result<bool, StructureError> {
        let Some(parent) = self.parent() else {
            return Ok(false);
        };
        let index = parent
            .position_of(self)
            .ok_or_else(|| StructureError::NotInParent {
                parent: parent.name().to_string(),
                child: self.name().to_string(),
            })?;
        parent.members_mut().remove(index);
        self.detach_from_parent();
        Ok(true)
    }

    fn insert_sibling(&self, sibling: &Element, offset: usize) -> Option<Element> {
        let parent = self.parent()?;
        if sibling == self || !parent.can_adopt(sibling) {
            return None;
        }
        parent.position_of(self)?;
        sibling.remove_from_parent();
        let index = parent.position_of(self)? + offset;
        parent
            .members_mut()
            .insert(index, Member::Element(sibling.clone()));
        sibling.link_to(&parent);
        Some(sibling.clone())
    }

    fn can_adopt(&self, child: &Element) -> bool {
        if child.is_root() {
            debug!(parent = %self.name(), child = %child.name(), "refusing to move a document root");
            return false;
        }
        if child.is_ancestor_or_self_of(self) {
            debug!(parent = %self.name(), child = %child.name(), "refusing to create a cycle");
            return false;
        }
        true
    }

    /// Take `self` out of its parent's members, if it has a parent.
    pub(crate) fn remove_from_parent(&self) {
        if let Some(parent) = self.parent() {
            if let Some(index) = parent.position_of(self) {
                parent.members_mut().remove(index);
            }
        }
        self.detach_from_parent();
    }

    fn position_of(&self, child: &Element) -> Option<usize> {
        self.members()
            .iter()
            .position(|member| matches!(member, Member::Element(element) if element == child))
    }
}

fn attribute_prefix_len(members: &[Member]) -> usize {
    members
        .iter()
        .position(|member| !matches!(member, Member::Attribute(_)))
        .unwrap_or(members.len())
}
