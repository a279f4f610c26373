//! Node kind tags for fast type discrimination.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of tags, one per concrete node type.
///
/// Every node fixes its tag at construction and reports it through
/// [`AstNode::kind`](super::AstNode::kind); consumers switch on the tag
/// instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstKind {
    Literal,
    Identifier,
    ExprStmt,
    Pass,
    Block,
    WithItem,
    WithStmt,
}

impl AstKind {
    /// Stable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            AstKind::Literal => "Literal",
            AstKind::Identifier => "Identifier",
            AstKind::ExprStmt => "ExprStmt",
            AstKind::Pass => "Pass",
            AstKind::Block => "Block",
            AstKind::WithItem => "WithItem",
            AstKind::WithStmt => "WithStmt",
        }
    }
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
