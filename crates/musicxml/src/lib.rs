//! Strongly-typed MusicXML score metadata.
//!
//! This crate models the header portion of a partwise MusicXML document, the
//! part list above all, as plain Rust types with bidirectional XML
//! conversion. The XML mapping itself lives in `musicxml-codec`; the types
//! here declare their fields, field placement, and choice variants, and the
//! codec does the rest.
//!
//! ```ignore
//! use musicxml::{PartList, PartListItem, from_xml_str, to_xml_string};
//!
//! let xml = r#"<part-list>
//!   <score-part id="P1"><part-name>Flute</part-name></score-part>
//! </part-list>"#;
//! let part_list: PartList = from_xml_str(xml)?;
//! assert_eq!(part_list.items.len(), 1);
//! let rendered = to_xml_string(&part_list)?;
//! ```
//!
//! All model types also derive `serde::Serialize`, so a decoded score can be
//! re-viewed as JSON without a second schema.

pub mod datatypes;
pub mod display;
pub mod font;
pub mod part_list;
pub mod score;

pub use datatypes::{
    AccidentalValue, CommaSeparatedText, CssFontSize, FontSize, FontStyle, FontWeight,
    GroupBarlineValue, GroupSymbolValue, LeftCenterRight, StartStop, YesNo,
};
pub use display::{AccidentalText, FormattedText, NameDisplay, NameDisplayText};
pub use font::Font;
pub use part_list::{GroupName, PartGroup, PartList, PartListItem, PartName, ScorePart};
pub use score::{PARTWISE_DOCTYPE, ScorePartwise, Work};

pub use musicxml_codec::{
    DecodeError, DecodeXml, EncodeError, EncodeXml, XmlTagged, from_xml_reader, from_xml_slice,
    from_xml_str, to_xml_string, to_xml_string_with_doctype, to_xml_vec, to_xml_writer,
};
