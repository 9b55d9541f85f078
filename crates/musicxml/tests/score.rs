//! Score-header decoding and full-document rendering.

use musicxml::{
    DecodeError, PartList, PartListItem, ScorePart, ScorePartwise, Work, from_xml_str,
    to_xml_string,
};

const HELLO_WORLD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">
<score-partwise version="4.0">
  <work>
    <work-title>Hello World</work-title>
  </work>
  <movement-title>First Steps</movement-title>
  <part-list>
    <score-part id="P1">
      <part-name>Music</part-name>
    </score-part>
  </part-list>
  <part id="P1">
    <measure number="1">
      <note><rest/><duration>4</duration></note>
    </measure>
  </part>
</score-partwise>
"#;

#[test]
fn test_decode_header_ignores_part_bodies() {
    let score: ScorePartwise = from_xml_str(HELLO_WORLD).unwrap();
    assert_eq!(score.version.as_deref(), Some("4.0"));
    assert_eq!(
        score.work.as_ref().and_then(|w| w.title.as_deref()),
        Some("Hello World")
    );
    assert_eq!(score.movement_title.as_deref(), Some("First Steps"));
    assert_eq!(score.part_list.items.len(), 1);
    assert_eq!(score.part_list.score_parts().next().unwrap().id, "P1");
}

#[test]
fn test_wrong_root_is_rejected() {
    let err = from_xml_str::<ScorePartwise>("<score-timewise/>").unwrap_err();
    match err {
        DecodeError::UnexpectedRoot { expected, found } => {
            assert_eq!(expected, "score-partwise");
            assert_eq!(found, "score-timewise");
        }
        other => panic!("expected UnexpectedRoot, got {other:?}"),
    }
}

#[test]
fn test_score_without_part_list_is_missing_field() {
    let err = from_xml_str::<ScorePartwise>("<score-partwise version=\"4.0\"/>").unwrap_err();
    match err {
        DecodeError::MissingRequiredField { field, path } => {
            assert_eq!(field, "part-list");
            assert_eq!(path.to_string(), "score-partwise");
        }
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn test_rendered_document_carries_doctype() {
    let mut score = ScorePartwise::new(PartList::from(vec![PartListItem::Part(
        ScorePart::new("P1", "Music"),
    )]));
    score.version = Some("4.0".to_string());
    score.work = Some(Work::titled("Hello World"));

    let xml = score.to_musicxml_string().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<!DOCTYPE score-partwise PUBLIC \"-//Recordare//DTD MusicXML 4.0 Partwise//EN\""));
    assert!(xml.contains("<work-title>Hello World</work-title>"));

    let reparsed: ScorePartwise = from_xml_str(&xml).unwrap();
    assert_eq!(reparsed, score);
}

#[test]
fn test_header_round_trip_all_optionals_absent() {
    let score = ScorePartwise::new(PartList::default());
    let xml = to_xml_string(&score).unwrap();
    // The XML declaration always carries version="1.0"; only the root element
    // must be attribute-free here.
    assert!(!xml.contains("<score-partwise version"));
    assert!(!xml.contains("<work"));
    assert!(!xml.contains("movement"));
    let reparsed: ScorePartwise = from_xml_str(&xml).unwrap();
    assert_eq!(reparsed, score);
}

#[test]
fn test_json_view_of_score_header() {
    let score: ScorePartwise = from_xml_str(HELLO_WORLD).unwrap();
    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["version"], "4.0");
    assert_eq!(json["work"]["title"], "Hello World");
    assert_eq!(json["part_list"][0]["score-part"]["id"], "P1");
}
