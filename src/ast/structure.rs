//! Structured export document produced by [`AstNode::get_struct`].
//!
//! This is a separate surface from `Display` rendering: diagnostics use the
//! single-line strings, while serializers and visualizers consume the nested
//! maps built here. Map entries keep insertion order, which is part of the
//! contract.
//!
//! [`AstNode::get_struct`]: super::AstNode::get_struct

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from node labels to exported content.
pub type StructMap = IndexMap<String, StructValue>;

/// One value slot in the export document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructValue {
    /// Rendered-string leaf.
    Text(String),
    /// Nested node export.
    Map(StructMap),
    /// Ordered child collection.
    Items(Vec<StructValue>),
    /// Structural absence, e.g. a clause with no `as` binding.
    Empty,
}

impl StructValue {
    /// Build a text leaf from anything renderable.
    pub fn text(value: impl ToString) -> Self {
        StructValue::Text(value.to_string())
    }
}
