//! Decoding of tag-discriminated choice types.
//!
//! A choice type is a closed set of named variants where the XML element name
//! of the active variant is the only discriminator: there is no wrapper node
//! and no separate discriminator attribute. Each choice type declares its
//! variants as an ordered table of `(tag, decode)` pairs; that declaration
//! order is the fixed tie-break policy when more than one declared tag is
//! present.

use crate::de::DecodeNode;
use crate::error::{DecodeError, Result};

/// One variant of a choice type: its wire tag and its payload decoder.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceVariant<T> {
    pub tag: &'static str,
    pub decode: fn(DecodeNode<'_>) -> Result<T>,
}

/// Decodes a single choice value from among a node's children.
///
/// Variants are checked in declaration order; the first declared tag that is
/// present among the children wins, regardless of document order. A payload
/// decode failure under a matched tag propagates unchanged; it is never
/// rewritten as an unrecognized choice, since the tag did match.
pub fn decode_choice_child<T>(
    node: &DecodeNode<'_>,
    type_name: &'static str,
    variants: &[ChoiceVariant<T>],
) -> Result<T> {
    for variant in variants {
        if let Some(child) = node.child(variant.tag) {
            return (variant.decode)(child);
        }
    }
    Err(unrecognized(node, type_name, variants))
}

/// Decodes a choice value from a node that is itself the variant element,
/// dispatching on the node's own tag.
pub fn decode_choice_dispatch<T>(
    node: DecodeNode<'_>,
    type_name: &'static str,
    variants: &[ChoiceVariant<T>],
) -> Result<T> {
    for variant in variants {
        if node.tag() == variant.tag {
            return (variant.decode)(node);
        }
    }
    Err(unrecognized(&node, type_name, variants))
}

/// Decodes an ordered heterogeneous sequence of choice values from a node's
/// children.
///
/// Every child element must carry one of the declared tags; an unknown tag is
/// a decode error, not a silent skip. Document order is preserved exactly,
/// since part ordering in a score depends on it.
pub fn decode_choice_sequence<T>(
    parent: &DecodeNode<'_>,
    type_name: &'static str,
    variants: &[ChoiceVariant<T>],
) -> Result<Vec<T>> {
    let children = parent.element_children();
    let mut items = Vec::with_capacity(children.len());
    for child in children {
        items.push(decode_choice_dispatch(child, type_name, variants)?);
    }
    Ok(items)
}

fn unrecognized<T>(
    node: &DecodeNode<'_>,
    type_name: &'static str,
    variants: &[ChoiceVariant<T>],
) -> DecodeError {
    DecodeError::UnrecognizedChoice {
        type_name,
        expected: variants.iter().map(|variant| variant.tag).collect(),
        path: node.path().clone(),
    }
}
