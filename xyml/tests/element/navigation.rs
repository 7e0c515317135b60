use crate::common::{names, sample};
use xyml::formats::XmlFormat;
use xyml::Format;

#[test]
fn children_in_document_order() {
    let doc = sample();
    let children = doc.root().children();
    assert_eq!(names(&children), vec!["d", "d", "h"]);
    assert_eq!(children[0].attr("e").as_deref(), Some("fff"));
    assert_eq!(children[1].attr("e").as_deref(), Some("ggg"));
    assert_eq!(children[2].attr("e").as_deref(), Some("fff"));

    let first = doc.root().first_child().unwrap();
    assert_eq!(first, children[0]);
}

#[test]
fn children_by_name() {
    let doc = sample();
    let d = doc.root().children_named("d");
    assert_eq!(d.len(), 2);
    assert_eq!(d[1].attr("e").as_deref(), Some("ggg"));
    assert_eq!(
        doc.root().first_child_named("d").unwrap().attr("e").as_deref(),
        Some("fff")
    );
    assert!(doc.root().first_child_named("x").is_none());
}

#[test]
fn children_by_name_and_attribute() {
    let doc = sample();
    let root = doc.root();
    let ggg = root.children_with_attr("d", "e", "ggg");
    assert_eq!(ggg.len(), 1);
    assert_eq!(ggg[0].attr("e").as_deref(), Some("ggg"));
    assert_eq!(root.children_with_attr("d", "e", "fff").len(), 1);
    assert_eq!(root.first_child_with_attr("d", "e", "ggg"), Some(ggg[0].clone()));
    assert!(root.first_child_with_attr("h", "e", "ggg").is_none());
}

#[test]
fn children_by_attribute_only() {
    let doc = sample();
    let fff = doc.root().children_by_attr("e", "fff");
    assert_eq!(names(&fff), vec!["d", "h"]);
}

#[test]
fn siblings() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();

    let prev = ggg.prev_sibling().unwrap();
    assert_eq!(prev.attr("e").as_deref(), Some("fff"));
    assert_eq!(&**prev.name(), "d");
    assert_eq!(&**ggg.next_sibling().unwrap().name(), "h");

    assert!(prev.prev_sibling().is_none());
    assert!(ggg.next_sibling().unwrap().next_sibling().is_none());
    assert!(doc.root().prev_sibling().is_none());
    assert!(doc.root().next_sibling().is_none());
}

#[test]
fn attributes_and_text() {
    let doc = sample();
    assert_eq!(doc.root().attr("b").as_deref(), Some("ccc"));
    assert!(doc.root().attr("missing").is_none());

    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();
    assert_eq!(ggg.text(), "text");
    assert_eq!(doc.root().text(), "");
    assert_eq!(ggg.attrs().len(), 1);
}

#[test]
fn parent_and_root() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();
    assert_eq!(&**ggg.parent().unwrap().name(), "a");
    assert!(doc.root().parent().is_none());

    assert!(doc.root().is_root());
    assert!(!ggg.is_root());
    assert_eq!(ggg.root().as_ref(), Some(doc.root()));
}

#[test]
fn descendants_search_the_whole_subtree() {
    let doc = XmlFormat::default()
        .parse("<a><b k='1'><c k='2'/></b><c k='1'/></a>")
        .unwrap();

    let c = doc.root().descendants_named("c");
    assert_eq!(c.len(), 2);
    assert_eq!(c[0].attr("k").as_deref(), Some("2"));
    assert_eq!(doc.root().first_descendant_named("c").unwrap(), c[0]);
    assert_eq!(doc.root().descendants_with_attr("c", "k", "1").len(), 1);
    assert_eq!(names(&doc.root().descendants_by_attr("k", "1")), vec!["b", "c"]);
}
