//! Error types for conversions and format operations

use thiserror::Error;

/// A raw tree or DOM tree that cannot be read as an element tree.
///
/// These are fatal for the conversion that detected them: nothing is
/// retried and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A mapping with no entries where an element or attribute was expected
    #[error("mapping with no pairs (parent={parent})")]
    EmptyMapping { parent: String },

    /// A mapping with more than one entry where exactly one was expected
    #[error("mapping with more than one pair (first key={first_key})")]
    MultipleKeys { first_key: String },

    /// A sequence where the document root element was expected
    #[error("sequence appears at the top of the document")]
    SequenceAtTop,

    /// A single-entry mapping whose value is not a sequence of members
    #[error("'{name}' is not an element (its value is not a sequence)")]
    NotAnElement { name: String },

    /// A mapping key that is itself a sequence or mapping
    #[error("mapping key is not a scalar (parent={parent})")]
    NonScalarKey { parent: String },

    /// A mapping key that is not an identifier token
    #[error("key '{key}' is not a valid identifier")]
    InvalidIdentifier { key: String },

    /// The input holds no root element at all
    #[error("document has no root element")]
    NoRootElement,

    /// A node points at a parent whose member list does not contain it
    #[error("parent '{parent}' does not hold '{child}' as a child")]
    NotInParent { parent: String, child: String },
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Format does not support the operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Input parsed but is not a valid element tree
    #[error("Illegal document structure: {0}")]
    Structure(#[from] StructureError),
}
