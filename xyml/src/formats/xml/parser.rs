//! XML reader
//!
//! `xml5ever` builds the DOM and recovers from malformed input on its own;
//! whatever it complains about is logged and the recovered tree is used.

use crate::convert::markup::document_from_dom;
use crate::error::FormatError;
use crate::Document;
use markup5ever_rcdom::RcDom;
use tracing::{debug, warn};
use xml5ever::driver::{parse_document, XmlParseOpts};
use xml5ever::tendril::TendrilSink;

pub fn parse_from_xml(source: &str) -> Result<Document, FormatError> {
    let dom = parse_dom(source);
    let doc = document_from_dom(&dom)?;
    debug!(root = %doc.root().name(), "read xml document");
    Ok(doc)
}

/// Read `source` into a markup DOM.
pub fn parse_dom(source: &str) -> RcDom {
    let dom = parse_document(RcDom::default(), XmlParseOpts::default()).one(source);
    for error in dom.errors.borrow().iter() {
        warn!(%error, "xml reader recovered from an error");
    }
    dom
}
