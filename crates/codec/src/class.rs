//! Static attribute/element classification of fields.
//!
//! Every structured model type declares, once, how each of its fields is
//! placed on the wire: as an attribute on the owning element or as a child
//! element. The table is consulted by the encoder before emitting each scalar
//! field and gives the decoder its primary lookup store. Classification never
//! varies at runtime for a given table; contexts that need a different
//! placement (see the font attribute group) pass a different table at the
//! call site rather than mutating shared state.

/// Where a field is placed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Serialized as `name="value"` on the owning element's opening tag.
    Attribute,
    /// Serialized as a nested tagged node.
    Element,
}

/// A per-type classification table over wire field names.
///
/// The attribute-classified and element-classified name sets are disjoint by
/// construction (one entry per name), and the table is fixed for the type's
/// lifetime.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    entries: &'static [(&'static str, FieldClass)],
}

impl FieldTable {
    /// A table with no classified fields.
    pub const EMPTY: FieldTable = FieldTable::new(&[]);

    pub const fn new(entries: &'static [(&'static str, FieldClass)]) -> Self {
        FieldTable { entries }
    }

    /// Looks up the wire placement of a field.
    ///
    /// Pure and deterministic. `None` means the field was never declared in
    /// this table, which is a definition-time mistake in the calling type;
    /// callers treat it as element-classified rather than panicking.
    pub fn classify(&self, field: &str) -> Option<FieldClass> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, class)| *class)
    }

    /// The declared wire names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: FieldTable = FieldTable::new(&[
        ("id", FieldClass::Attribute),
        ("part-name", FieldClass::Element),
    ]);

    #[test]
    fn test_classify_declared_fields() {
        assert_eq!(TABLE.classify("id"), Some(FieldClass::Attribute));
        assert_eq!(TABLE.classify("part-name"), Some(FieldClass::Element));
    }

    #[test]
    fn test_classify_unknown_field() {
        assert_eq!(TABLE.classify("no-such-field"), None);
    }

    #[test]
    fn test_field_names_in_declaration_order() {
        let names: Vec<_> = TABLE.field_names().collect();
        assert_eq!(names, vec!["id", "part-name"]);
    }
}
