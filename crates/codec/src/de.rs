//! XML decoding: tree construction and field-level reads.
//!
//! Tokenization is delegated to `quick_xml::Reader`; this module builds the
//! [`XmlElement`] tree, resolves entity and character references back into
//! text, trims indentation-only whitespace, and gives model types the
//! [`DecodeNode`] cursor they decode their fields from.

use crate::class::{FieldClass, FieldTable};
use crate::element::XmlElement;
use crate::error::{DecodeError, Result};
use crate::path::XmlPath;
use crate::XmlTagged;
use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

/// Types that can be decoded from an XML element.
pub trait DecodeXml: Sized {
    fn decode(node: DecodeNode<'_>) -> Result<Self>;
}

/// Decode a value from an XML string.
///
/// The document root element must carry the type's wire tag.
///
/// # Examples
///
/// ```ignore
/// use musicxml_codec::from_xml_str;
/// use musicxml::PartList;
///
/// let xml = r#"<part-list><score-part id="P1">
///   <part-name>Music</part-name>
/// </score-part></part-list>"#;
/// let part_list: PartList = from_xml_str(xml)?;
/// ```
pub fn from_xml_str<T>(xml: &str) -> Result<T>
where
    T: DecodeXml + XmlTagged,
{
    let root = parse_element_tree(xml)?;
    if root.name() != T::TAG {
        return Err(DecodeError::UnexpectedRoot {
            expected: T::TAG,
            found: root.name().to_string(),
        });
    }
    T::decode(DecodeNode::new(&root, XmlPath::root(T::TAG)))
}

/// Decode a value from XML bytes.
pub fn from_xml_slice<T>(xml: &[u8]) -> Result<T>
where
    T: DecodeXml + XmlTagged,
{
    let xml = std::str::from_utf8(xml)?;
    from_xml_str(xml)
}

/// Decode a value from an XML reader.
pub fn from_xml_reader<R, T>(mut reader: R) -> Result<T>
where
    R: BufRead,
    T: DecodeXml + XmlTagged,
{
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    from_xml_str(&xml)
}

/// Parses XML text into an element tree.
///
/// The XML declaration, DOCTYPE, comments, and processing instructions are
/// skipped; only elements, attributes, and text survive into the tree.
pub fn parse_element_tree(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(start) => {
                stack.push(element_from_start(&reader, &start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&reader, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                // Tag pairing is validated by the reader; the stack cannot
                // underflow on well-formed input.
                let element = stack
                    .pop()
                    .ok_or_else(|| DecodeError::Syntax("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.decode().map_err(syntax)?;
                if let Some(parent) = stack.last_mut() {
                    if !text.is_empty() {
                        parent.push_text(text.into_owned());
                    }
                }
            }
            // Entity and character references arrive as their own events and
            // merge back into the surrounding text run.
            Event::GeneralRef(entity) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(resolve_reference(&entity)?);
                }
            }
            Event::CData(cdata) => {
                let text = std::str::from_utf8(cdata.as_ref())?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(text);
                }
            }
            Event::Eof => break,
            // Declaration, DOCTYPE, comments, processing instructions.
            _ => {}
        }
    }

    root.ok_or_else(|| DecodeError::Syntax("document has no root element".to_string()))
}

/// Resolves a character reference or one of the five predefined entities.
fn resolve_reference(entity: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = entity.resolve_char_ref().map_err(syntax)? {
        return Ok(ch.to_string());
    }
    let name = std::str::from_utf8(entity.as_ref())?;
    match name {
        "amp" => Ok("&".to_string()),
        "lt" => Ok("<".to_string()),
        "gt" => Ok(">".to_string()),
        "apos" => Ok("'".to_string()),
        "quot" => Ok("\"".to_string()),
        other => Err(DecodeError::Syntax(format!(
            "unresolved entity reference `&{other};`"
        ))),
    }
}

fn element_from_start(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<XmlElement> {
    let name = start.name();
    let name = std::str::from_utf8(name.as_ref())?;
    let mut element = XmlElement::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(syntax)?;
        let key = std::str::from_utf8(attribute.key.as_ref())?;
        let value = attribute
            .decode_and_unescape_value(reader.decoder())
            .map_err(syntax)?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn attach(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    mut element: XmlElement,
) -> Result<()> {
    element.trim_text_runs();
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DecodeError::Syntax(
            "document has more than one root element".to_string(),
        )),
    }
}

fn syntax(err: impl Display) -> DecodeError {
    DecodeError::Syntax(err.to_string())
}

/// A decode cursor: one element of the input tree plus the coding path that
/// led to it.
///
/// All lookups are reads; nothing is consumed. Required-field failures name
/// the missing field and carry the cursor's path.
#[derive(Debug, Clone)]
pub struct DecodeNode<'a> {
    element: &'a XmlElement,
    path: XmlPath,
}

impl<'a> DecodeNode<'a> {
    pub fn new(element: &'a XmlElement, path: XmlPath) -> Self {
        DecodeNode { element, path }
    }

    pub fn element(&self) -> &'a XmlElement {
        self.element
    }

    pub fn path(&self) -> &XmlPath {
        &self.path
    }

    /// The element's own tag name.
    pub fn tag(&self) -> &'a str {
        self.element.name()
    }

    /// Cursor for the first child element with the given tag.
    pub fn child(&self, name: &str) -> Option<DecodeNode<'a>> {
        self.element
            .child(name)
            .map(|el| DecodeNode::new(el, self.path.child(name)))
    }

    /// Cursor for a required child element.
    pub fn required_child(&self, name: &str) -> Result<DecodeNode<'a>> {
        self.child(name)
            .ok_or_else(|| self.missing_field(name))
    }

    /// Cursors for every child element, in document order, with positioned
    /// paths.
    pub fn element_children(&self) -> Vec<DecodeNode<'a>> {
        self.element
            .element_children()
            .enumerate()
            .map(|(index, el)| DecodeNode::new(el, self.path.indexed(el.name(), index)))
            .collect()
    }

    /// Cursors for every child element with the given tag, in document order.
    pub fn children_named(&self, name: &str) -> Vec<DecodeNode<'a>> {
        self.element
            .element_children()
            .enumerate()
            .filter(|(_, el)| el.name() == name)
            .map(|(index, el)| DecodeNode::new(el, self.path.indexed(name, index)))
            .collect()
    }

    pub fn optional_attribute(&self, name: &str) -> Option<&'a str> {
        self.element.attribute(name)
    }

    pub fn required_attribute(&self, name: &str) -> Result<&'a str> {
        self.optional_attribute(name)
            .ok_or_else(|| self.missing_field(name))
    }

    /// The element's direct text content.
    pub fn text(&self) -> String {
        self.element.text()
    }

    /// The element's text content, required to be non-empty.
    ///
    /// `field` names the model field the content binds to, for diagnostics.
    pub fn required_text(&self, field: &str) -> Result<String> {
        let text = self.text();
        if text.is_empty() {
            Err(self.missing_field(field))
        } else {
            Ok(text)
        }
    }

    /// Parses the element's text content.
    pub fn parse_text<T>(&self, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let text = self.required_text(field)?;
        self.parse_value(&text, field)
    }

    /// Reads and parses an optional scalar field through its classification.
    ///
    /// The classified store is consulted first; the decoder is deliberately
    /// more permissive than the encoder and falls back to the other store, so
    /// a value that arrives as a child element where an attribute was
    /// expected (or vice versa) still decodes.
    pub fn optional_scalar<T>(&self, table: &FieldTable, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let attribute = || self.element.attribute(name).map(str::to_owned);
        let child_text = || {
            self.element
                .child(name)
                .map(XmlElement::text)
                .filter(|text| !text.is_empty())
        };
        let raw = match table.classify(name) {
            Some(FieldClass::Attribute) => attribute().or_else(child_text),
            Some(FieldClass::Element) | None => child_text().or_else(attribute),
        };
        match raw {
            Some(raw) => self.parse_value(&raw, name).map(Some),
            None => Ok(None),
        }
    }

    /// Reads and parses a required scalar field through its classification.
    pub fn required_scalar<T>(&self, table: &FieldTable, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional_scalar(table, name)?
            .ok_or_else(|| self.missing_field(name))
    }

    /// Decodes an optional structured child.
    pub fn optional_complex<T: DecodeXml>(&self, name: &str) -> Result<Option<T>> {
        self.child(name).map(T::decode).transpose()
    }

    /// Decodes a required structured child.
    pub fn required_complex<T: DecodeXml>(&self, name: &str) -> Result<T> {
        T::decode(self.required_child(name)?)
    }

    fn parse_value<T>(&self, raw: &str, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse().map_err(|err: T::Err| DecodeError::InvalidValue {
            value: raw.to_string(),
            reason: err.to_string(),
            path: self.path.child(field),
        })
    }

    fn missing_field(&self, field: &str) -> DecodeError {
        DecodeError::MissingRequiredField {
            field: field.to_string(),
            path: self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_tree() {
        let xml = r#"<part-list><score-part id="P1"><part-name>Flute</part-name></score-part></part-list>"#;
        let root = parse_element_tree(xml).unwrap();
        assert_eq!(root.name(), "part-list");
        let part = root.child("score-part").unwrap();
        assert_eq!(part.attribute("id"), Some("P1"));
        assert_eq!(part.child("part-name").unwrap().text(), "Flute");
    }

    #[test]
    fn test_parse_skips_prolog_and_comments() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                   <!DOCTYPE score-partwise>\n\
                   <!-- a comment --><score-partwise version=\"4.0\"/>";
        let root = parse_element_tree(xml).unwrap();
        assert_eq!(root.name(), "score-partwise");
        assert_eq!(root.attribute("version"), Some("4.0"));
    }

    #[test]
    fn test_parse_unescapes_text_and_attributes() {
        let xml = r#"<part-name justify="left&amp;right">Oboe &amp; Bassoon</part-name>"#;
        let root = parse_element_tree(xml).unwrap();
        assert_eq!(root.text(), "Oboe & Bassoon");
        assert_eq!(root.attribute("justify"), Some("left&right"));
    }

    #[test]
    fn test_entity_references_merge_into_text() {
        // References split the text into separate reader events; the spacing
        // around them must survive.
        let root = parse_element_tree("<part-name>Oboe &amp; d&#39;Amore</part-name>").unwrap();
        assert_eq!(root.text(), "Oboe & d'Amore");

        let root = parse_element_tree("<work-title>B&#xE9;la B&#225;rt&#xF3;k</work-title>").unwrap();
        assert_eq!(root.text(), "Béla Bártók");
    }

    #[test]
    fn test_entity_reference_inside_indented_element() {
        let xml = "<part-name>\n  Oboe &amp; Bassoon\n</part-name>";
        let root = parse_element_tree(xml).unwrap();
        assert_eq!(root.text(), "Oboe & Bassoon");
    }

    #[test]
    fn test_undeclared_entity_is_rejected() {
        let err = parse_element_tree("<part-name>&flat;</part-name>").unwrap_err();
        match err {
            DecodeError::Syntax(message) => assert!(message.contains("&flat;")),
            other => panic!("expected Syntax, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            parse_element_tree("<part-list><score-part></part-list>"),
            Err(DecodeError::Syntax(_))
        ));
        assert!(matches!(
            parse_element_tree(""),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn test_trim_text_drops_indentation() {
        let xml = "<score-part id=\"P1\">\n  <part-name>Horn</part-name>\n</score-part>";
        let root = parse_element_tree(xml).unwrap();
        assert_eq!(root.text(), "");
        assert_eq!(root.child("part-name").unwrap().text(), "Horn");
    }
}
