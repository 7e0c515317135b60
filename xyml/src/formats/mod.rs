//! Format implementations
//!
//! Each format converts between its text representation and a
//! [`crate::Document`].

pub mod json;
pub mod xml;
pub mod xyml;

pub use json::JsonFormat;
pub use xml::serializer::XmlOptions;
pub use xml::XmlFormat;
pub use xyml::serializer::RenderStyle;
pub use xyml::XymlFormat;
