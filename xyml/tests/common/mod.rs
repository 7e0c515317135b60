//! Shared fixtures for the integration tests

use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;
use xyml::formats::XymlFormat;
use xyml::{Document, Element, Format};

/// `a` with an attribute, two `d` children, an `h` child and text in the second `d`.
pub const SAMPLE: &str = "---
- a:
  - b: ccc
  - d:
    - e: fff
  - d:
    - e: ggg
    - text
  - h:
    - e: fff
";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path:?}: {e}"))
}

pub fn sample() -> Document {
    XymlFormat::default().parse(SAMPLE).unwrap()
}

pub fn raw(source: &str) -> Value {
    serde_yaml::from_str(source).unwrap()
}

pub fn names(elements: &[Element]) -> Vec<String> {
    elements.iter().map(|e| e.name().to_string()).collect()
}
