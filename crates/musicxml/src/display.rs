//! Formatted display text for part and group names.

use crate::datatypes::{AccidentalValue, LeftCenterRight, YesNo};
use crate::font::Font;
use musicxml_codec::{
    ChoiceVariant, DecodeNode, DecodeXml, EncodeXml, FieldClass, FieldTable, Result, XmlElement,
    decode_choice_dispatch, decode_choice_sequence,
};
use serde::Serialize;

/// A text run with font styling and justification.
///
/// Appears under several element names (`display-text` among them), so the
/// wire tag is supplied by the embedding context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedText {
    pub value: String,
    #[serde(skip_serializing_if = "Font::is_empty")]
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<LeftCenterRight>,
}

impl FormattedText {
    const FIELDS: FieldTable = FieldTable::new(&[("justify", FieldClass::Attribute)]);

    pub fn new(value: impl Into<String>) -> Self {
        FormattedText {
            value: value.into(),
            font: Font::default(),
            justify: None,
        }
    }
}

impl From<&str> for FormattedText {
    fn from(value: &str) -> Self {
        FormattedText::new(value)
    }
}

impl DecodeXml for FormattedText {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(FormattedText {
            value: node.required_text("value")?,
            font: Font::read_from(&node, &Font::ATTRIBUTES)?,
            justify: node.optional_scalar(&Self::FIELDS, "justify")?,
        })
    }
}

impl EncodeXml for FormattedText {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        self.font.write_onto(&mut el, &Font::ATTRIBUTES);
        el.put_optional_scalar(&Self::FIELDS, "justify", self.justify);
        el.push_text(&self.value);
        el
    }
}

/// An accidental rendered inside a displayed name, with font styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccidentalText {
    pub value: AccidentalValue,
    #[serde(skip_serializing_if = "Font::is_empty")]
    pub font: Font,
}

impl AccidentalText {
    pub fn new(value: AccidentalValue) -> Self {
        AccidentalText {
            value,
            font: Font::default(),
        }
    }
}

impl DecodeXml for AccidentalText {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(AccidentalText {
            value: node.parse_text("value")?,
            font: Font::read_from(&node, &Font::ATTRIBUTES)?,
        })
    }
}

impl EncodeXml for AccidentalText {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        self.font.write_onto(&mut el, &Font::ATTRIBUTES);
        el.push_text(self.value.as_str());
        el
    }
}

/// One run of a displayed name: plain text or an accidental.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NameDisplayText {
    #[serde(rename = "display-text")]
    Text(FormattedText),
    #[serde(rename = "accidental-text")]
    Accidental(AccidentalText),
}

impl NameDisplayText {
    const TYPE_NAME: &'static str = "NameDisplayText";

    const VARIANTS: &'static [ChoiceVariant<NameDisplayText>] = &[
        ChoiceVariant {
            tag: "display-text",
            decode: decode_text,
        },
        ChoiceVariant {
            tag: "accidental-text",
            decode: decode_accidental,
        },
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            NameDisplayText::Text(_) => "display-text",
            NameDisplayText::Accidental(_) => "accidental-text",
        }
    }

    pub fn encode(&self) -> XmlElement {
        match self {
            NameDisplayText::Text(text) => text.encode(self.tag()),
            NameDisplayText::Accidental(accidental) => accidental.encode(self.tag()),
        }
    }
}

fn decode_text(node: DecodeNode<'_>) -> Result<NameDisplayText> {
    FormattedText::decode(node).map(NameDisplayText::Text)
}

fn decode_accidental(node: DecodeNode<'_>) -> Result<NameDisplayText> {
    AccidentalText::decode(node).map(NameDisplayText::Accidental)
}

impl DecodeXml for NameDisplayText {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        decode_choice_dispatch(node, Self::TYPE_NAME, Self::VARIANTS)
    }
}

/// How a part or group name is rendered, as an ordered mix of text and
/// accidental runs.
///
/// Written as `part-name-display`, `part-abbreviation-display`, or
/// `group-name-display` depending on the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NameDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_object: Option<YesNo>,
    pub texts: Vec<NameDisplayText>,
}

impl NameDisplay {
    const FIELDS: FieldTable = FieldTable::new(&[("print-object", FieldClass::Attribute)]);

    pub fn new(texts: Vec<NameDisplayText>) -> Self {
        NameDisplay {
            print_object: None,
            texts,
        }
    }
}

impl DecodeXml for NameDisplay {
    fn decode(node: DecodeNode<'_>) -> Result<Self> {
        Ok(NameDisplay {
            print_object: node.optional_scalar(&Self::FIELDS, "print-object")?,
            texts: decode_choice_sequence(
                &node,
                NameDisplayText::TYPE_NAME,
                NameDisplayText::VARIANTS,
            )?,
        })
    }
}

impl EncodeXml for NameDisplay {
    fn encode(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        el.put_optional_scalar(&Self::FIELDS, "print-object", self.print_object);
        for text in &self.texts {
            el.push_child(text.encode());
        }
        el
    }
}
