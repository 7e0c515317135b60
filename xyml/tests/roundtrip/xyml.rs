use crate::common::fixture;
use xyml::formats::XymlFormat;
use xyml::transforms::convert;
use xyml::{Format, FormatError, RenderStyle, StructureError};

#[test]
fn fixture_renders_back_to_itself() {
    let source = fixture("quiz.xyml");
    let doc = XymlFormat::default().parse(&source).unwrap();
    assert_eq!(doc.render(RenderStyle::FieldPreserving), source);
    assert_eq!(doc.render(RenderStyle::Canonical), source);
}

#[test]
fn xyml_to_json() {
    assert_eq!(
        convert(&fixture("quiz.xyml"), "xyml", "json").unwrap(),
        fixture("quiz.json")
    );
}

#[test]
fn xyml_to_xml() {
    assert_eq!(
        convert(&fixture("quiz.xyml"), "xyml", "xml").unwrap(),
        fixture("quiz.xml")
    );
}

#[test]
fn canonical_output_is_a_fixed_point() {
    let source = "---
- p:
  - lang: en
  - \"  one \"
  - two
  - br:
    - \" \"
  - three
";
    let format = XymlFormat::new(RenderStyle::Canonical);
    let once = format.serialize(&format.parse(source).unwrap()).unwrap();
    assert_eq!(
        once,
        "---\n- p:\n  - lang: en\n  - one two\n  - br:\n    - \n  - three\n"
    );
    let twice = format.serialize(&format.parse(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn special_scalars_survive() {
    let source = "---
- a:
  - k: \"a: b\"
  - \"#not a comment\"
  - \"-\"
  - \"line\\nbreak\"
  - \"say \\\"hi\\\"\"
";
    let doc = XymlFormat::default().parse(source).unwrap();
    assert_eq!(doc.root().attr("k").as_deref(), Some("a: b"));
    assert_eq!(
        doc.root().text_fragments(),
        vec!["#not a comment", "-", "line\nbreak", "say \"hi\""]
    );
    assert_eq!(doc.render(RenderStyle::FieldPreserving), source);
}

#[test]
fn typed_scalars_keep_their_written_form() {
    let source = "---\n- a:\n  - n: 12\n  - flag: true\n  - v: 1.0\n  - 3.50\n  - null\n";
    let doc = XymlFormat::default().parse(source).unwrap();
    assert_eq!(doc.root().attr("n").as_deref(), Some("12"));
    assert_eq!(doc.root().attr("flag").as_deref(), Some("true"));
    assert_eq!(doc.root().attr("v").as_deref(), Some("1.0"));
    assert_eq!(doc.root().text_fragments(), ["3.50", "null"]);
    assert_eq!(doc.render(RenderStyle::FieldPreserving), source);
}

#[test]
fn attributes_after_content_are_not_promoted() {
    let doc = XymlFormat::default()
        .parse("- a:\n  - b: c\n  - body\n  - late: value\n")
        .unwrap();
    assert_eq!(doc.root().attrs().len(), 1);
    assert!(doc.root().attr("late").is_none());
    assert_eq!(doc.root().text(), "body");
}

#[test]
fn structural_errors() {
    let parse = |source: &str| XymlFormat::default().parse(source).unwrap_err();

    assert_eq!(
        parse("- a:\n  - {}\n"),
        FormatError::Structure(StructureError::EmptyMapping {
            parent: "a".to_string()
        })
    );
    assert!(parse("- a:\n  - {b: c, d: e}\n")
        .to_string()
        .contains("more than one pair"));
    assert!(parse("- - a: []\n").to_string().contains("top of the document"));
    assert!(parse("- a: b\n").to_string().contains("is not an element"));
}
