use crate::common::fixture;
use xyml::formats::JsonFormat;
use xyml::transforms::convert;
use xyml::{Format, FormatError, StructureError};

#[test]
fn json_to_xyml() {
    assert_eq!(
        convert(&fixture("quiz.json"), "json", "xyml").unwrap(),
        fixture("quiz.xyml")
    );
}

#[test]
fn json_to_xml() {
    assert_eq!(
        convert(&fixture("quiz.json"), "json", "xml").unwrap(),
        fixture("quiz.xml")
    );
}

#[test]
fn json_round_trip_is_exact() {
    let format = JsonFormat::default();
    let doc = format.parse(&fixture("quiz.json")).unwrap();
    assert_eq!(format.serialize(&doc).unwrap(), fixture("quiz.json"));
}

#[test]
fn bare_mapping_is_accepted_as_root() {
    let doc = JsonFormat::default()
        .parse(r#"{"a":[{"b":"c"},"text"]}"#)
        .unwrap();
    assert_eq!(doc.root().attr("b").as_deref(), Some("c"));
    assert_eq!(
        JsonFormat::default().serialize(&doc).unwrap(),
        r#"[{"a":[{"b":"c"},"text"]}]"#
    );
}

#[test]
fn json_structure_errors() {
    let format = JsonFormat::default();
    assert_eq!(
        format.parse("[]").unwrap_err(),
        FormatError::Structure(StructureError::NoRootElement)
    );
    assert_eq!(
        format.parse("null").unwrap_err(),
        FormatError::Structure(StructureError::NoRootElement)
    );
    assert_eq!(
        format.parse(r#"[{"a":[{}]}]"#).unwrap_err(),
        FormatError::Structure(StructureError::EmptyMapping {
            parent: "a".to_string()
        })
    );
    assert!(matches!(
        format.parse("[{"),
        Err(FormatError::ParseError(_))
    ));
}
