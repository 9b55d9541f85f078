//! The font attribute group shared by text-bearing elements.

use crate::datatypes::{CommaSeparatedText, FontSize, FontStyle, FontWeight};
use musicxml_codec::{DecodeNode, FieldClass, FieldTable, Result, XmlElement};
use serde::Serialize;

/// Font selection and styling, attached to formatted text elements.
///
/// All four fields are optional; an absent field defers to the application
/// default. Host types embed this group rather than repeating the fields, and
/// pass the [`FieldTable`] that matches their context. `font-family` is an
/// attribute in every context, including element-placed ones, so both tables
/// classify it as an attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<CommaSeparatedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
}

impl Font {
    /// The usual placement: every font field as an attribute.
    pub const ATTRIBUTES: FieldTable = FieldTable::new(&[
        ("font-family", FieldClass::Attribute),
        ("font-style", FieldClass::Attribute),
        ("font-size", FieldClass::Attribute),
        ("font-weight", FieldClass::Attribute),
    ]);

    /// Element placement for style, size, and weight. `font-family` stays an
    /// attribute even here.
    pub const ELEMENTS_EXCEPT_FAMILY: FieldTable = FieldTable::new(&[
        ("font-family", FieldClass::Attribute),
        ("font-style", FieldClass::Element),
        ("font-size", FieldClass::Element),
        ("font-weight", FieldClass::Element),
    ]);

    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.style.is_none() && self.size.is_none() && self.weight.is_none()
    }

    /// Reads the group from a host element under the given placement.
    pub fn read_from(node: &DecodeNode<'_>, table: &FieldTable) -> Result<Self> {
        Ok(Font {
            family: node.optional_scalar(table, "font-family")?,
            style: node.optional_scalar(table, "font-style")?,
            size: node.optional_scalar(table, "font-size")?,
            weight: node.optional_scalar(table, "font-weight")?,
        })
    }

    /// Writes the group onto a host element under the given placement.
    pub fn write_onto(&self, element: &mut XmlElement, table: &FieldTable) {
        element.put_optional_scalar(table, "font-family", self.family.as_ref());
        element.put_optional_scalar(table, "font-style", self.style.as_ref());
        element.put_optional_scalar(table, "font-size", self.size.as_ref());
        element.put_optional_scalar(table, "font-weight", self.weight.as_ref());
    }
}
