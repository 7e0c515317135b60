use crate::common::fixture;
use xyml::formats::{XmlFormat, XmlOptions, XymlFormat};
use xyml::transforms::convert;
use xyml::{Format, RenderStyle};

#[test]
fn xml_to_xyml() {
    assert_eq!(
        convert(&fixture("quiz.xml"), "xml", "xyml").unwrap(),
        fixture("quiz.xyml")
    );
}

#[test]
fn xml_to_json() {
    assert_eq!(
        convert(&fixture("quiz.xml"), "xml", "json").unwrap(),
        fixture("quiz.json")
    );
}

#[test]
fn indented_xml_reads_back_canonically() {
    let doc = XymlFormat::default().parse(&fixture("quiz.xyml")).unwrap();
    let indented = XmlFormat::new(XmlOptions::indented(2)).serialize(&doc).unwrap();
    assert!(indented.contains("\n    <question level=\"easy\">\n"));

    let back = XmlFormat::default().parse(&indented).unwrap();
    assert_eq!(back.render(RenderStyle::Canonical), fixture("quiz.xyml"));
}

#[test]
fn markup_noise_is_skipped() {
    let source = "<?xml version='1.0'?>\n\
        <!-- leading comment -->\n\
        <quiz type='t'><?render fast?><!-- inner -->body &lt;b&gt; &amp; &apos;x&apos;</quiz>";
    let doc = XmlFormat::default().parse(source).unwrap();
    assert_eq!(doc.root().attr("type").as_deref(), Some("t"));
    assert_eq!(doc.root().text(), "body <b> & 'x'");
    assert!(doc.root().children().is_empty());
}

#[test]
fn text_around_children_keeps_its_position() {
    let doc = XmlFormat::default()
        .parse("<p>one<br/>two</p>")
        .unwrap();
    assert_eq!(
        doc.render(RenderStyle::FieldPreserving),
        "---\n- p:\n  - one\n  - br:\n    - \n  - two\n"
    );
    assert_eq!(
        XmlFormat::default().serialize(&doc).unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<p>one<br></br>two</p>\n"
    );
}
