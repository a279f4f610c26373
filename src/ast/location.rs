//! Source location tagging for AST nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column position in the original source text.
///
/// Every node owns exactly one location by value. Nodes built
/// programmatically (rather than by a parser) carry the
/// [`NO_SOURCE_LOCATION`] sentinel, so the field is always populated and
/// always comparable with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub col: u32,
}

/// Sentinel location for nodes with no source position.
pub const NO_SOURCE_LOCATION: SourceLocation = SourceLocation {
    line: u32::MAX,
    col: u32::MAX,
};

impl SourceLocation {
    /// Create a location at the given line and column.
    pub fn new(line: u32, col: u32) -> Self {
        SourceLocation { line, col }
    }

    /// True unless this is the [`NO_SOURCE_LOCATION`] sentinel.
    pub fn is_known(&self) -> bool {
        *self != NO_SOURCE_LOCATION
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        NO_SOURCE_LOCATION
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.col)
        } else {
            f.write_str("<no location>")
        }
    }
}
