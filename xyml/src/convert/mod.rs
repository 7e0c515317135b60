//! Conversions between the element tree and external tree shapes
//!
//! - [`raw`]: generic mapping / sequence / scalar trees as produced by YAML
//!   and JSON readers.
//! - [`markup`]: markup DOM trees (`markup5ever_rcdom`).
//!
//! Both directions fail eagerly with a [`crate::error::StructureError`];
//! nothing malformed survives into an element tree.

pub mod markup;
pub mod raw;

pub use markup::{document_from_dom, document_to_dom, dom_to_element, element_to_dom};
pub use raw::{document_from_raw, document_to_raw, element_to_raw, normalize, normalize_strict};
