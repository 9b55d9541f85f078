//! The part list: the score header's identification of parts and part
//! groups.

use crate::datatypes::{
    GroupBarlineValue, GroupSymbolValue, LeftCenterRight, StartStop, YesNo,
};
use crate::display::NameDisplay;
use crate::font::Font;
use musicxml_codec::{
    ChoiceVariant, DecodeNode, DecodeXml, EncodeXml, FieldClass, FieldTable, Result, XmlElement,
    XmlTagged, decode_choice_child, decode_choice_dispatch, decode_choice_sequence,
};
use serde::Serialize;

/// The name of a score part, with optional styling.
///
/// Written as `part-name` or `part-abbreviation` depending on the field it
/// fills; the styling attributes ride on the same element as the name text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartName {
    pub value: String,
    #[serde(skip_serializing_if = "Font::is_empty")]
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_object: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<LeftCenterRight>,
}

impl PartName {
    const FIELDS: FieldTable = FieldTable::new(&[
        ("print-object", FieldClass::Attribute),
        ("justify", FieldClass::Attribute),
    ]);

    pub fn new(value: impl Into<String>) -> Self {
        PartName {
            value: value.into(),
            font: Font::default(),
            print_object: None,
            justify: None,
        }
    }
}

impl From<&str> for PartName {
    fn from(value: &str) -> Self {
        PartName::new(value)
    }
}

impl From<String> for PartName {
    fn from(value: String) -> Self {
        PartName::new(value)
    }
}

impl DecodeXml for PartName {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(PartName {
            value: node.required_text("value")?,
            font: Font::read_from(&node, &Font::ATTRIBUTES)?,
            print_object: node.optional_scalar(&Self::FIELDS, "print-object")?,
            justify: node.optional_scalar(&Self::FIELDS, "justify")?,
        })
    }
}

impl EncodeXml for PartName {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        self.font.write_onto(&mut el, &Font::ATTRIBUTES);
        el.put_optional_scalar(&Self::FIELDS, "print-object", self.print_object);
        el.put_optional_scalar(&Self::FIELDS, "justify", self.justify);
        el.push_text(&self.value);
        el
    }
}

/// The name of a part group, written as `group-name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupName {
    pub value: String,
    #[serde(skip_serializing_if = "Font::is_empty")]
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<LeftCenterRight>,
}

impl GroupName {
    const FIELDS: FieldTable = FieldTable::new(&[("justify", FieldClass::Attribute)]);

    pub fn new(value: impl Into<String>) -> Self {
        GroupName {
            value: value.into(),
            font: Font::default(),
            justify: None,
        }
    }
}

impl From<&str> for GroupName {
    fn from(value: &str) -> Self {
        GroupName::new(value)
    }
}

impl DecodeXml for GroupName {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(GroupName {
            value: node.required_text("value")?,
            font: Font::read_from(&node, &Font::ATTRIBUTES)?,
            justify: node.optional_scalar(&Self::FIELDS, "justify")?,
        })
    }
}

impl EncodeXml for GroupName {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        self.font.write_onto(&mut el, &Font::ATTRIBUTES);
        el.put_optional_scalar(&Self::FIELDS, "justify", self.justify);
        el.push_text(&self.value);
        el
    }
}

/// The start or stop marker of a bracketed group of parts.
///
/// Groups are spans over the part list rather than containers: a start
/// marker, the member parts, then a stop marker with the same number. Nesting
/// is expressed by overlapping numbered spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartGroup {
    /// Whether this marker opens or closes the group. Written as the `type`
    /// attribute.
    pub kind: StartStop,
    /// Distinguishes overlapping groups; pairs a stop with its start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<GroupName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_display: Option<NameDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<GroupSymbolValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barline: Option<GroupBarlineValue>,
}

impl PartGroup {
    const FIELDS: FieldTable = FieldTable::new(&[
        ("type", FieldClass::Attribute),
        ("number", FieldClass::Attribute),
        ("group-symbol", FieldClass::Element),
        ("group-barline", FieldClass::Element),
    ]);

    pub fn new(kind: StartStop) -> Self {
        PartGroup {
            kind,
            number: None,
            name: None,
            name_display: None,
            symbol: None,
            barline: None,
        }
    }
}

impl XmlTagged for PartGroup {
    const TAG: &'static str = "part-group";
}

impl DecodeXml for PartGroup {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(PartGroup {
            kind: node.required_scalar(&Self::FIELDS, "type")?,
            number: node.optional_scalar(&Self::FIELDS, "number")?,
            name: node.optional_complex("group-name")?,
            name_display: node.optional_complex("group-name-display")?,
            symbol: node.optional_scalar(&Self::FIELDS, "group-symbol")?,
            barline: node.optional_scalar(&Self::FIELDS, "group-barline")?,
        })
    }
}

impl EncodeXml for PartGroup {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        el.put_scalar(&Self::FIELDS, "type", self.kind);
        el.put_optional_scalar(&Self::FIELDS, "number", self.number.as_ref());
        if let Some(name) = &self.name {
            el.push_child(name.encode("group-name"));
        }
        if let Some(display) = &self.name_display {
            el.push_child(display.encode("group-name-display"));
        }
        el.put_optional_scalar(&Self::FIELDS, "group-symbol", self.symbol);
        el.put_optional_scalar(&Self::FIELDS, "group-barline", self.barline);
        el
    }
}

/// One performed part in the score header.
///
/// The `id` attribute links the header entry to the `<part>` element holding
/// the music.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePart {
    pub id: String,
    pub name: PartName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_display: Option<NameDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<PartName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation_display: Option<NameDisplay>,
    /// Editorial `group` memberships, free-form text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

impl ScorePart {
    pub fn new(id: impl Into<String>, name: impl Into<PartName>) -> Self {
        ScorePart {
            id: id.into(),
            name: name.into(),
            name_display: None,
            abbreviation: None,
            abbreviation_display: None,
            groups: Vec::new(),
        }
    }
}

impl XmlTagged for ScorePart {
    const TAG: &'static str = "score-part";
}

impl DecodeXml for ScorePart {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        let groups = node
            .children_named("group")
            .iter()
            .map(|child| child.required_text("group"))
            .collect::<Result<_>>()?;
        Ok(ScorePart {
            id: node.required_attribute("id")?.to_string(),
            name: node.required_complex("part-name")?,
            name_display: node.optional_complex("part-name-display")?,
            abbreviation: node.optional_complex("part-abbreviation")?,
            abbreviation_display: node.optional_complex("part-abbreviation-display")?,
            groups,
        })
    }
}

impl EncodeXml for ScorePart {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        el.set_attribute("id", &self.id);
        el.push_child(self.name.encode("part-name"));
        if let Some(display) = &self.name_display {
            el.push_child(display.encode("part-name-display"));
        }
        if let Some(abbreviation) = &self.abbreviation {
            el.push_child(abbreviation.encode("part-abbreviation"));
        }
        if let Some(display) = &self.abbreviation_display {
            el.push_child(display.encode("part-abbreviation-display"));
        }
        for group in &self.groups {
            el.push_child(XmlElement::with_text("group", group));
        }
        el
    }
}

/// One entry of the part list: a group marker or a part.
///
/// Variant declaration order is the decode tie-break order, `part-group`
/// before `score-part`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartListItem {
    #[serde(rename = "part-group")]
    Group(PartGroup),
    #[serde(rename = "score-part")]
    Part(ScorePart),
}

impl PartListItem {
    const TYPE_NAME: &'static str = "PartListItem";

    const VARIANTS: &'static [ChoiceVariant<PartListItem>] = &[
        ChoiceVariant {
            tag: PartGroup::TAG,
            decode: decode_group,
        },
        ChoiceVariant {
            tag: ScorePart::TAG,
            decode: decode_part,
        },
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PartListItem::Group(_) => PartGroup::TAG,
            PartListItem::Part(_) => ScorePart::TAG,
        }
    }

    pub fn encode(&self) -> XmlElement {
        match self {
            PartListItem::Group(group) => group.encode(self.tag()),
            PartListItem::Part(part) => part.encode(self.tag()),
        }
    }

    /// Decodes a single item from among a parent's children, first declared
    /// tag winning when both are present.
    pub fn decode_within(parent: &DecodeNode<'_>) -> Result<Self> {
        decode_choice_child(parent, Self::TYPE_NAME, Self::VARIANTS)
    }
}

fn decode_group(node: DecodeNode<'_>) -> Result<PartListItem> {
    PartGroup::decode(node).map(PartListItem::Group)
}

fn decode_part(node: DecodeNode<'_>) -> Result<PartListItem> {
    ScorePart::decode(node).map(PartListItem::Part)
}

impl DecodeXml for PartListItem {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        decode_choice_dispatch(node, Self::TYPE_NAME, Self::VARIANTS)
    }
}

impl From<PartGroup> for PartListItem {
    fn from(group: PartGroup) -> Self {
        PartListItem::Group(group)
    }
}

impl From<ScorePart> for PartListItem {
    fn from(part: ScorePart) -> Self {
        PartListItem::Part(part)
    }
}

/// The ordered part list itself.
///
/// Item order is the document order of the input and the visual order of the
/// score; it survives decode and encode untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PartList {
    pub items: Vec<PartListItem>,
}

impl PartList {
    pub fn new(items: Vec<PartListItem>) -> Self {
        PartList { items }
    }

    /// The score parts only, group markers skipped, in list order.
    pub fn score_parts(&self) -> impl Iterator<Item = &ScorePart> {
        self.items.iter().filter_map(|item| match item {
            PartListItem::Part(part) => Some(part),
            PartListItem::Group(_) => None,
        })
    }
}

impl XmlTagged for PartList {
    const TAG: &'static str = "part-list";
}

impl From<Vec<PartListItem>> for PartList {
    fn from(items: Vec<PartListItem>) -> Self {
        PartList { items }
    }
}

impl FromIterator<PartListItem> for PartList {
    fn from_iter<I: IntoIterator<Item = PartListItem>>(iter: I) -> Self {
        PartList {
            items: iter.into_iter().collect(),
        }
    }
}

impl DecodeXml for PartList {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(PartList {
            items: decode_choice_sequence(&node, PartListItem::TYPE_NAME, PartListItem::VARIANTS)?,
        })
    }
}

impl EncodeXml for PartList {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        for item in &self.items {
            el.push_child(item.encode());
        }
        el
    }
}
