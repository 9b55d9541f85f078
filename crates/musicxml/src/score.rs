//! The score-level document types.

use crate::part_list::PartList;
use musicxml_codec::{
    DecodeNode, DecodeXml, EncodeError, EncodeXml, FieldClass, FieldTable, Result, XmlElement,
    XmlTagged, to_xml_string_with_doctype,
};
use serde::Serialize;

/// The DOCTYPE line a partwise MusicXML file carries.
pub const PARTWISE_DOCTYPE: &str = "score-partwise PUBLIC \
     \"-//Recordare//DTD MusicXML 4.0 Partwise//EN\" \
     \"http://www.musicxml.org/dtds/partwise.dtd\"";

/// Identification of the work a score belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Work {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Work {
    const FIELDS: FieldTable = FieldTable::new(&[
        ("work-number", FieldClass::Element),
        ("work-title", FieldClass::Element),
    ]);

    pub fn titled(title: impl Into<String>) -> Self {
        Work {
            number: None,
            title: Some(title.into()),
        }
    }
}

impl XmlTagged for Work {
    const TAG: &'static str = "work";
}

impl DecodeXml for Work {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(Work {
            number: node.optional_scalar(&Self::FIELDS, "work-number")?,
            title: node.optional_scalar(&Self::FIELDS, "work-title")?,
        })
    }
}

impl EncodeXml for Work {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        el.put_optional_scalar(&Self::FIELDS, "work-number", self.number.as_ref());
        el.put_optional_scalar(&Self::FIELDS, "work-title", self.title.as_ref());
        el
    }
}

/// The header of a partwise score: work identification, movement labels, and
/// the part list.
///
/// Decoding reads the header children only; `<part>` bodies under the same
/// root are left untouched, so score metadata can be extracted without
/// parsing the music.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePartwise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Work>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_title: Option<String>,
    pub part_list: PartList,
}

impl ScorePartwise {
    const FIELDS: FieldTable = FieldTable::new(&[
        ("version", FieldClass::Attribute),
        ("movement-number", FieldClass::Element),
        ("movement-title", FieldClass::Element),
    ]);

    pub fn new(part_list: PartList) -> Self {
        ScorePartwise {
            version: None,
            work: None,
            movement_number: None,
            movement_title: None,
            part_list,
        }
    }

    /// Renders the score header as a complete MusicXML document, DOCTYPE
    /// included.
    pub fn to_musicxml_string(&self) -> Result<String, EncodeError> {
        to_xml_string_with_doctype(self, PARTWISE_DOCTYPE)
    }
}

impl XmlTagged for ScorePartwise {
    const TAG: &'static str = "score-partwise";
}

impl DecodeXml for ScorePartwise {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(ScorePartwise {
            version: node.optional_scalar(&Self::FIELDS, "version")?,
            work: node.optional_complex("work")?,
            movement_number: node.optional_scalar(&Self::FIELDS, "movement-number")?,
            movement_title: node.optional_scalar(&Self::FIELDS, "movement-title")?,
            part_list: node.required_complex("part-list")?,
        })
    }
}

impl EncodeXml for ScorePartwise {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        el.put_optional_scalar(&Self::FIELDS, "version", self.version.as_ref());
        if let Some(work) = &self.work {
            el.push_child(work.encode(Work::TAG));
        }
        el.put_optional_scalar(&Self::FIELDS, "movement-number", self.movement_number.as_ref());
        el.put_optional_scalar(&Self::FIELDS, "movement-title", self.movement_title.as_ref());
        el.push_child(self.part_list.encode(PartList::TAG));
        el
    }
}
