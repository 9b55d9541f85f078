//! XML mapping engine for strongly-typed MusicXML models.
//!
//! This crate supplies the machinery that the `musicxml` model crate builds
//! on; the XML tokenizer and writer themselves are delegated to `quick-xml`.
//!
//! ## Architecture
//!
//! The codec works over a materialized element tree rather than a streaming
//! event interface:
//!
//! - **Decoding**: the input is parsed into an [`XmlElement`] tree through
//!   `quick_xml::Reader`, then each model type reads its declared fields from
//!   a [`DecodeNode`] (an element plus the [`XmlPath`] leading to it).
//! - **Encoding**: each model type produces an [`XmlElement`], which is
//!   written out through `quick_xml::Writer` with indentation.
//!
//! Three concerns are factored out of the per-type implementations:
//!
//! - **Field classification** ([`FieldTable`]): a static per-type table that
//!   answers whether a field serializes as an XML attribute or as a child
//!   element. Encoders consult it before placing each scalar field; decoders
//!   use it to pick the primary store but fall back to the other one, so
//!   mildly off-schema input still decodes.
//! - **Choice decoding** ([`choice`]): closed tag-discriminated unions, where
//!   the element name of the active variant is the only discriminator. The
//!   declaration order of the variants is the fixed tie-break policy.
//! - **Diagnostics** ([`XmlPath`], [`DecodeError`]): every decode failure
//!   carries the path of element and field names from the document root to
//!   the failure point.
//!
//! ## Examples
//!
//! ```ignore
//! use musicxml_codec::{from_xml_str, to_xml_string};
//! use musicxml::PartList;
//!
//! let part_list: PartList = from_xml_str(xml)?;
//! let xml = to_xml_string(&part_list)?;
//! ```

pub mod choice;
pub mod class;
pub mod de;
pub mod element;
pub mod error;
pub mod path;
pub mod ser;

pub use choice::{ChoiceVariant, decode_choice_child, decode_choice_dispatch, decode_choice_sequence};
pub use class::{FieldClass, FieldTable};
pub use de::{
    DecodeNode, DecodeXml, from_xml_reader, from_xml_slice, from_xml_str, parse_element_tree,
};
pub use element::{XmlElement, XmlNode};
pub use error::{DecodeError, EncodeError, Result};
pub use path::XmlPath;
pub use ser::{
    EncodeXml, to_xml_string, to_xml_string_with_doctype, to_xml_vec, to_xml_writer,
    write_document,
};

/// Types with a fixed wire tag, usable as a document root.
///
/// Model types whose element name depends on the embedding context (for
/// example a part name, written as either `part-name` or `part-abbreviation`)
/// do not implement this trait; their tag is supplied at the call site.
pub trait XmlTagged {
    /// The XML element name this type is written under by default.
    const TAG: &'static str;
}
