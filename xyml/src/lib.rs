//! Element trees in XYML, XML and JSON
//!
//! ```text
//!     This crate provides an ordered element tree model and lossless conversions between its
//!     three text encodings: XYML (a YAML list notation), XML and JSON.
//!
//!     TLDR: For format authors:
//!         - Formats never classify raw input themselves: they hand a raw tree to convert::raw, or a
//!           markup DOM to convert::markup, and get a Document back.
//!         - Everything structural fails eagerly during that conversion. Renderers assume a well
//!           formed tree and do not fail.
//!         - Each format has parse and serialize unit tests next to it, and round trips are covered
//!           in tests/.
//! ```
//!
//! Architecture
//!
//! ```text
//!     An XYML element is a single-entry mapping whose value is a sequence of members:
//!
//!         - quiz:
//!           - type: test          attribute  ({name: scalar} in the leading run)
//!           - question:           child element ({name: [members]})
//!             - some text         text fragment (bare scalar)
//!
//!     The order of members is significant and is reproduced on output. The model keeps that
//!     order in one member sequence per element (./element/mod.rs), with the parent link stored
//!     next to it rather than inside it, so the sequence is always plain data.
//!
//!     This is a pure lib, that is, it powers the xyml-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── escape.rs               # Scalar quoting for XYML text
//!     ├── element                 # Element model, navigation and mutation
//!     ├── document.rs             # Document: owns the root element
//!     ├── convert
//!     │   ├── raw.rs              # raw tree (YAML / JSON values) ⇄ elements
//!     │   └── markup.rs           # markup DOM ⇄ elements
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # convert / format / select helpers
//!     └── formats
//!         └── <format>
//!             ├── parser.rs
//!             ├── serializer.rs
//!             └── mod.rs
//! ```
//!
//! Testing
//! ```text
//!     tests
//!     ├── lib.rs
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//! ```
//!
//! Core Algorithms
//!
//! ```text
//!     Reading a raw tree is a two phase scan per member sequence (./convert/raw.rs): leading
//!     attribute-shaped items are attributes, and the first item that is not ends the attribute
//!     run for good. An attribute-shaped item after that point is not promoted back.
//!
//!     Rendering comes in two styles (./formats/xyml/serializer.rs). The field-preserving style
//!     writes every text fragment as stored. The canonical style joins adjacent fragments, so
//!     rendering, reading and rendering again is a fixed point.
//! ```
//!
//! Library Choices
//!
//! ```text
//!     YAML and JSON meet at serde_yaml::Value as the raw tree. XYML text is read from
//!     yaml-rust2 parser events so every scalar keeps its source text; JSON goes through
//!     serde_json. The markup side uses the html5ever family: xml5ever reads into a
//!     markup5ever_rcdom DOM, and writes the DOM built from an element tree back out.
//! ```
//!
pub mod convert;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub use document::Document;
pub use element::{Attribute, Element, Member, Name};
pub use error::{FormatError, StructureError};
pub use escape::render_scalar;
pub use format::Format;
pub use formats::{RenderStyle, XmlOptions};
pub use registry::FormatRegistry;
