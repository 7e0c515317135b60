//! XYML reader
//!
//! XYML is plain YAML, so the text is read into a generic raw tree first and
//! classified afterwards. Every XYML scalar ends up as text, so the reader
//! works on parser events and keeps each scalar as written: `1.50`, `1e3`,
//! `true` and `null` stay strings instead of being resolved to typed values
//! and printed back differently. Only an empty entry (`- ` with nothing after
//! it) and an explicit `~` read as null.

use crate::convert::raw::document_from_raw;
use crate::error::FormatError;
use crate::Document;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use tracing::{debug, trace};
use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

pub fn parse_from_xyml(source: &str) -> Result<Document, FormatError> {
    let raw = read_raw(source)?;
    let doc = document_from_raw(&raw)?;
    debug!(root = %doc.root().name(), "read xyml document");
    Ok(doc)
}

/// Read the first YAML document of `source` into a raw tree of strings.
///
/// An empty source reads as null.
pub fn read_raw(source: &str) -> Result<Value, FormatError> {
    let mut builder = RawTreeBuilder::new();
    Parser::new_from_str(source)
        .load(&mut builder, false)
        .map_err(|e| FormatError::ParseError(e.to_string()))?;
    Ok(builder.root.unwrap_or(Value::Null))
}

enum Collection {
    Sequence(Vec<Value>),
    /// Entries so far, and a key still waiting for its value
    Mapping(Mapping, Option<Value>),
}

struct Frame {
    anchor: usize,
    collection: Collection,
}

struct RawTreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Value>,
    root: Option<Value>,
}

impl RawTreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
        }
    }

    /// The parser reports an empty entry as a plain `~`.
    fn scalar(text: String, style: TScalarStyle) -> Value {
        if matches!(style, TScalarStyle::Plain) && (text.is_empty() || text == "~") {
            Value::Null
        } else {
            Value::String(text)
        }
    }

    fn open(&mut self, anchor: usize, collection: Collection) {
        self.stack.push(Frame { anchor, collection });
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let value = match frame.collection {
            Collection::Sequence(items) => Value::Sequence(items),
            Collection::Mapping(mapping, pending) => {
                if pending.is_some() {
                    trace!("mapping closed with a dangling key");
                }
                Value::Mapping(mapping)
            }
        };
        self.finish(frame.anchor, value);
    }

    /// Register `value` under its anchor, then place it in the enclosing node.
    fn finish(&mut self, anchor: usize, value: Value) {
        if anchor > 0 {
            self.anchors.insert(anchor, value.clone());
        }
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(value);
                }
            }
            Some(Frame {
                collection: Collection::Sequence(items),
                ..
            }) => items.push(value),
            Some(Frame {
                collection: Collection::Mapping(mapping, pending),
                ..
            }) => match pending.take() {
                Some(key) => {
                    mapping.insert(key, value);
                }
                None => *pending = Some(value),
            },
        }
    }
}

impl EventReceiver for RawTreeBuilder {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Scalar(text, style, anchor, _) => {
                self.finish(anchor, Self::scalar(text, style));
            }
            Event::SequenceStart(anchor, ..) => self.open(anchor, Collection::Sequence(Vec::new())),
            Event::MappingStart(anchor, ..) => {
                self.open(anchor, Collection::Mapping(Mapping::new(), None))
            }
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(anchor) => {
                let value = self.anchors.get(&anchor).cloned().unwrap_or(Value::Null);
                self.finish(0, value);
            }
            _ => {}
        }
    }
}
