//! Owned XML element trees.

use crate::class::{FieldClass, FieldTable};
use std::fmt::Display;

/// A single XML element: tag name, ordered attributes, ordered children.
///
/// This is the intermediate form between model types and `quick-xml`:
/// decoders read from a parsed tree, encoders build one and hand it to the
/// writer. Attribute and child order both follow insertion order; child order
/// is semantically significant (it is the document order of the input, or the
/// field-declaration order of the encoding type).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

/// A node in an element's content: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sets an attribute, replacing any existing value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// The first child element with the given tag, if any.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.element_children().find(|el| el.name == name)
    }

    /// All child elements with the given tag, in document order.
    pub fn children_named(&self, name: &str) -> impl Iterator<Item = &XmlElement> {
        let name = name.to_string();
        self.element_children().filter(move |el| el.name == name)
    }

    /// All child elements in document order, text runs skipped.
    pub fn element_children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Whether the element has no content at all (it will serialize
    /// self-closing).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The element's direct text content, text runs concatenated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            if let XmlNode::Text(text) = node {
                out.push_str(text);
            }
        }
        out
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Appends text content. Adjacent text runs merge into one node, so a
    /// run interrupted only by a resolved entity reference stays a single
    /// node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(&text.into());
        } else {
            self.children.push(XmlNode::Text(text.into()));
        }
    }

    /// Trims surrounding whitespace from each text run and drops runs that
    /// were whitespace only.
    ///
    /// Applied once per element after parsing, so indentation never reaches
    /// the model layer while interior spacing survives. Runs must be merged
    /// before trimming; trimming the fragments around an entity reference
    /// would eat the spacing next to it.
    pub(crate) fn trim_text_runs(&mut self) {
        for node in &mut self.children {
            if let XmlNode::Text(text) = node {
                *text = text.trim().to_string();
            }
        }
        self.children
            .retain(|node| !matches!(node, XmlNode::Text(text) if text.is_empty()));
    }

    /// Builds a `<name>text</name>` element in one step.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut el = XmlElement::new(name);
        el.push_text(text);
        el
    }

    /// Places a scalar field according to its classification.
    ///
    /// This is the encoder-side use of the field classifier: attribute-class
    /// fields land on the opening tag, element-class fields become a text
    /// child. A name absent from the table is treated as element-classified.
    pub fn put_scalar(&mut self, table: &FieldTable, name: &str, value: impl Display) {
        match table.classify(name) {
            Some(FieldClass::Attribute) => self.set_attribute(name, value.to_string()),
            Some(FieldClass::Element) | None => {
                self.push_child(XmlElement::with_text(name, value.to_string()));
            }
        }
    }

    /// Places a scalar field only when a value is present.
    pub fn put_optional_scalar(&mut self, table: &FieldTable, name: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.put_scalar(table, name, value);
        }
    }
}
