//! Part-list decoding and encoding against hand-written documents.

use musicxml::{
    DecodeError, DecodeXml, EncodeXml, GroupBarlineValue, GroupSymbolValue, PartGroup, PartList,
    PartListItem, PartName, ScorePart, StartStop, from_xml_str, to_xml_string,
};
use musicxml_codec::{DecodeNode, XmlPath, parse_element_tree};

#[test]
fn test_decode_single_part() {
    let part_list: PartList = from_xml_str(
        r#"<part-list>
             <score-part id="P1">
               <part-name>MusicXML Part</part-name>
             </score-part>
           </part-list>"#,
    )
    .unwrap();
    assert_eq!(part_list.items.len(), 1);
    let part = part_list.score_parts().next().unwrap();
    assert_eq!(part.id, "P1");
    assert_eq!(part.name.value, "MusicXML Part");
}

#[test]
fn test_item_order_survives_round_trip() {
    let source = PartList::from(vec![
        PartListItem::Part(ScorePart::new("P1", "Flute")),
        PartListItem::Group(PartGroup {
            name: Some("Strings".into()),
            symbol: Some(GroupSymbolValue::Bracket),
            barline: Some(GroupBarlineValue::Yes),
            ..PartGroup::new(StartStop::Start)
        }),
        PartListItem::Part(ScorePart::new("P2", "Violin I")),
        PartListItem::Group(PartGroup::new(StartStop::Stop)),
    ]);

    let xml = to_xml_string(&source).unwrap();
    let decoded: PartList = from_xml_str(&xml).unwrap();
    assert_eq!(decoded, source);

    let tags: Vec<&str> = decoded.items.iter().map(PartListItem::tag).collect();
    assert_eq!(tags, vec!["score-part", "part-group", "score-part", "part-group"]);
}

#[test]
fn test_part_group_fields_and_placement() {
    let group: PartGroup = from_xml_str(
        r#"<part-group type="start" number="2">
             <group-name justify="left">Brass</group-name>
             <group-symbol>brace</group-symbol>
             <group-barline>Mensurstrich</group-barline>
           </part-group>"#,
    )
    .unwrap();
    assert_eq!(group.kind, StartStop::Start);
    assert_eq!(group.number.as_deref(), Some("2"));
    assert_eq!(group.name.as_ref().map(|n| n.value.as_str()), Some("Brass"));
    assert_eq!(group.symbol, Some(GroupSymbolValue::Brace));
    assert_eq!(group.barline, Some(GroupBarlineValue::Mensurstrich));

    let xml = to_xml_string(&group).unwrap();
    assert!(xml.contains("type=\"start\""));
    assert!(xml.contains("<group-symbol>brace</group-symbol>"));
    assert!(!xml.contains("group-symbol=\""));
}

#[test]
fn test_empty_part_name_is_missing_value() {
    let err = from_xml_str::<PartList>(
        "<part-list><score-part id=\"P1\"><part-name></part-name></score-part></part-list>",
    )
    .unwrap_err();
    match err {
        DecodeError::MissingRequiredField { field, path } => {
            assert_eq!(field, "value");
            assert_eq!(path.to_string(), "part-list/score-part[0]/part-name");
        }
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn test_score_part_without_id_is_missing_id() {
    let err = from_xml_str::<PartList>(
        "<part-list><score-part><part-name>Flute</part-name></score-part></part-list>",
    )
    .unwrap_err();
    match err {
        DecodeError::MissingRequiredField { field, path } => {
            assert_eq!(field, "id");
            assert_eq!(path.to_string(), "part-list/score-part[0]");
        }
        other => panic!("expected MissingRequiredField, got {other:?}"),
    }
}

#[test]
fn test_unknown_entry_tag_is_rejected() {
    let err = from_xml_str::<PartList>("<part-list><part-spacer/></part-list>").unwrap_err();
    match err {
        DecodeError::UnrecognizedChoice {
            type_name,
            expected,
            path,
        } => {
            assert_eq!(type_name, "PartListItem");
            assert_eq!(expected, vec!["part-group", "score-part"]);
            assert_eq!(path.to_string(), "part-list/part-spacer[0]");
        }
        other => panic!("expected UnrecognizedChoice, got {other:?}"),
    }
}

#[test]
fn test_single_item_pick_prefers_declared_order() {
    // Both tags present under one parent: part-group is declared first and
    // wins even though score-part comes first in the document.
    let root = parse_element_tree(
        r#"<part-list>
             <score-part id="P1"><part-name>Flute</part-name></score-part>
             <part-group type="stop"/>
           </part-list>"#,
    )
    .unwrap();
    let node = DecodeNode::new(&root, XmlPath::root("part-list"));
    let item = PartListItem::decode_within(&node).unwrap();
    assert!(matches!(
        item,
        PartListItem::Group(PartGroup {
            kind: StartStop::Stop,
            ..
        })
    ));
}

#[test]
fn test_part_group_payload_error_is_not_masked() {
    // The part-group tag matches but its type attribute is bad; the payload
    // error must surface instead of UnrecognizedChoice.
    let err = from_xml_str::<PartList>("<part-list><part-group type=\"begin\"/></part-list>")
        .unwrap_err();
    match err {
        DecodeError::InvalidValue { value, path, .. } => {
            assert_eq!(value, "begin");
            assert_eq!(path.to_string(), "part-list/part-group[0]/type");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_score_part_groups_and_abbreviation() {
    let part: ScorePart = from_xml_str(
        r#"<score-part id="P3">
             <part-name print-object="no">Clarinet in A</part-name>
             <part-abbreviation>Cl.</part-abbreviation>
             <group>woodwinds</group>
             <group>transposing</group>
           </score-part>"#,
    )
    .unwrap();
    assert_eq!(part.abbreviation.as_ref().map(|n| n.value.as_str()), Some("Cl."));
    assert_eq!(part.groups, vec!["woodwinds", "transposing"]);

    let xml = to_xml_string(&part).unwrap();
    assert!(xml.contains("print-object=\"no\""));
    assert!(xml.contains("<group>woodwinds</group>"));
}

#[test]
fn test_off_schema_placement_still_decodes() {
    // justify arrives as a child element instead of an attribute; the decoder
    // accepts it, and re-encoding restores the schema placement. PartName has
    // no fixed wire tag, so the tag is supplied at both call sites.
    let root = parse_element_tree("<part-name>Viola<justify>right</justify></part-name>").unwrap();
    let name = PartName::decode(DecodeNode::new(&root, XmlPath::root("part-name"))).unwrap();
    assert_eq!(name.value, "Viola");
    assert_eq!(name.justify, Some(musicxml::LeftCenterRight::Right));

    let el = name.encode("part-name");
    assert_eq!(el.attribute("justify"), Some("right"));
    assert!(el.child("justify").is_none());
}

#[test]
fn test_json_view_of_part_list() {
    let part_list = PartList::from(vec![
        PartListItem::Group(PartGroup::new(StartStop::Start)),
        PartListItem::Part(ScorePart::new("P1", "Oboe")),
    ]);
    let json = serde_json::to_value(&part_list).unwrap();
    assert_eq!(json[0]["part-group"]["kind"], "start");
    assert_eq!(json[1]["score-part"]["id"], "P1");
    assert_eq!(json[1]["score-part"]["name"]["value"], "Oboe");
}
