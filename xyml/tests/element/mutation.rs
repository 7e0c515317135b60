use crate::common::{raw, sample};
use xyml::{Document, Element};

#[test]
fn append_raw_child() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();

    let j = ggg.append_raw(&raw("j:\n- e: kkk\n")).unwrap();
    assert_eq!(ggg.first_child(), Some(j.clone()));
    assert_eq!(j.attr("e").as_deref(), Some("kkk"));
    assert_eq!(j.parent(), Some(ggg.clone()));

    assert!(ggg.append_raw(&raw("j: kkk\n")).is_none());
    assert!(ggg.append_raw(&raw("- j: []\n")).is_none());
    assert_eq!(ggg.children().len(), 1);
}

#[test]
fn set_text_moves_text_after_children() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();
    ggg.append_child(&Element::new("j"));
    ggg.set_text(ggg.text());

    let members = ggg.members();
    assert_eq!(members.len(), 3);
    assert_eq!(members[2].as_text(), Some("text"));
}

#[test]
fn insert_siblings() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();

    let before = Element::new("j");
    before.set_attr("e", "kkk");
    ggg.insert_before_sibling(&before).unwrap();
    assert_eq!(ggg.prev_sibling(), Some(before.clone()));

    let after = Element::new("k");
    ggg.insert_after_sibling(&after).unwrap();
    assert_eq!(ggg.next_sibling(), Some(after.clone()));
    assert_eq!(after.root().as_ref(), Some(doc.root()));

    assert!(doc.root().insert_after_sibling(&Element::new("x")).is_none());
}

#[test]
fn set_and_delete_attributes() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();
    ggg.set_attr("e", "lll").set_attr("m", "nnn");
    assert_eq!(ggg.attr("e").as_deref(), Some("lll"));
    assert_eq!(ggg.attr("m").as_deref(), Some("nnn"));
    // New attributes stay in front of the text.
    assert_eq!(ggg.members()[1].as_attribute().map(|a| &*a.name), Some("m"));

    assert_eq!(doc.root().delete_attr("b").as_deref(), Some("ccc"));
    assert!(doc.root().attr("b").is_none());
    assert!(doc.root().delete_attr("b").is_none());
}

#[test]
fn text_editing() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();

    ggg.append_text("abc");
    assert_eq!(ggg.text(), "textabc");
    assert_eq!(ggg.text_fragments(), vec!["text", "abc"]);

    ggg.set_text("abc");
    assert_eq!(ggg.text(), "abc");

    ggg.clear_text();
    assert_eq!(ggg.text(), "");
    assert_eq!(ggg.attr("e").as_deref(), Some("ggg"));
}

#[test]
fn appended_elements_reach_the_root() {
    let doc = sample();
    let j = Element::new("j");
    doc.root()
        .first_child_with_attr("d", "e", "ggg")
        .unwrap()
        .append_child(&j);
    assert_eq!(&**j.root().unwrap().name(), "a");
}

#[test]
fn detach_self_removes_from_parent() {
    let doc = sample();
    let ggg = doc.root().first_child_with_attr("d", "e", "ggg").unwrap();
    assert_eq!(ggg.detach_self(), Ok(true));

    let children = doc.root().children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].attr("e").as_deref(), Some("fff"));
    assert_eq!(&**children[1].name(), "h");
    assert!(ggg.root().is_none());
    assert!(ggg.parent().is_none());
    assert_eq!(ggg.detach_self(), Ok(false));
}

#[test]
fn moving_a_child_between_parents() {
    let doc = sample();
    let children = doc.root().children();
    let (first, last) = (&children[0], &children[2]);
    last.append_child(first);

    assert_eq!(doc.root().children().len(), 2);
    assert_eq!(first.parent().as_ref(), Some(last));
    assert_eq!(last.children(), vec![first.clone()]);
}

#[test]
fn cycles_and_roots_are_refused() {
    let doc = sample();
    let d = doc.root().first_child().unwrap();
    assert!(d.append_child(doc.root()).is_none());
    assert!(d.append_child(&d).is_none());

    let other = Document::new("other");
    assert!(other.root().append_child(doc.root()).is_none());
    assert!(doc.root().is_root());
}
