//! XML encoding: element trees out through `quick_xml::Writer`.

use crate::element::{XmlElement, XmlNode};
use crate::error::EncodeError;
use crate::XmlTagged;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Types that can be encoded to an XML element.
///
/// The tag is supplied by the embedding context, because the same payload
/// type can appear under several element names (a part name is written as
/// both `part-name` and `part-abbreviation`).
pub trait EncodeXml {
    fn encode(&self, tag: &str) -> XmlElement;
}

/// Encode a value to an XML string under its default tag.
///
/// # Examples
///
/// ```ignore
/// use musicxml_codec::to_xml_string;
///
/// let xml = to_xml_string(&part_list)?;
/// assert!(xml.starts_with("<?xml"));
/// ```
pub fn to_xml_string<T>(value: &T) -> Result<String, EncodeError>
where
    T: EncodeXml + XmlTagged + ?Sized,
{
    Ok(String::from_utf8(to_xml_vec(value)?)?)
}

/// Encode a value to an XML string with a DOCTYPE line after the
/// declaration.
pub fn to_xml_string_with_doctype<T>(value: &T, doctype: &str) -> Result<String, EncodeError>
where
    T: EncodeXml + XmlTagged + ?Sized,
{
    let mut buffer = Vec::new();
    write_document(&value.encode(T::TAG), Some(doctype), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Encode a value to an XML byte vector.
pub fn to_xml_vec<T>(value: &T) -> Result<Vec<u8>, EncodeError>
where
    T: EncodeXml + XmlTagged + ?Sized,
{
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    Ok(buffer)
}

/// Encode a value to an XML writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<(), EncodeError>
where
    T: EncodeXml + XmlTagged + ?Sized,
    W: Write,
{
    write_document(&value.encode(T::TAG), None, writer)
}

/// Writes a complete document: XML declaration, optional DOCTYPE, and the
/// element tree with two-space indentation.
pub fn write_document<W: Write>(
    root: &XmlElement,
    doctype: Option<&str>,
    writer: W,
) -> Result<(), EncodeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if let Some(doctype) = doctype {
        writer.write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
    }
    write_element(&mut writer, root)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<(), EncodeError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for node in element.nodes() {
        match node {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
