//! Abstract Syntax Tree (AST) node definitions.

pub mod context;
pub mod expr;
pub mod kind;
pub mod location;
pub mod node;
pub mod stmt;
pub mod structure;

// Re-export commonly used types
pub use context::{WithItem, WithItemBuilder, WithStmt};
pub use expr::{Expr, Identifier, Literal, LiteralValue};
pub use kind::AstKind;
pub use location::{SourceLocation, NO_SOURCE_LOCATION};
pub use node::{AstNode, Node};
pub use stmt::{Block, ExprStmt, Stmt};
pub use structure::{StructMap, StructValue};
