//! astkit: an AST construction toolkit for context-manager constructs.
//!
//! astkit models the syntactic structure of with-statements as an immutable
//! value tree that downstream tools (code generators, analyzers,
//! pretty-printers) can build, inspect, and serialize without parsing text
//! themselves. It provides:
//!
//! - A uniform node contract ([`AstNode`]): kind tagging, source-location
//!   carrying, single-line rendering, and a nested-mapping structured export
//! - Expression leaves ([`Literal`], [`Identifier`]) and the statement
//!   family ([`Stmt`], [`Block`])
//! - Context-manager nodes ([`WithItem`], [`WithStmt`]) with fail-fast
//!   construction errors
//! - A [`visitor`] module for traversal without central type switches
//!
//! Trees are assembled bottom-up and never mutated after being attached to
//! a parent, so finalized trees are safe to render and export from multiple
//! threads.
//!
//! # Example
//!
//! ```
//! use astkit::{AstKind, AstNode, Block, Identifier, Literal, WithItem, WithStmt};
//!
//! let item = WithItem::new(Literal::new(42), Some(Identifier::new("x")));
//! assert_eq!(item.to_string(), "42 as x");
//!
//! let stmt = WithStmt::new(vec![item], Block::new("body"))?;
//! assert_eq!(stmt.to_string(), "WithStmt[42 as x]");
//! assert_eq!(stmt.kind(), AstKind::WithStmt);
//! # Ok::<(), astkit::NodeError>(())
//! ```

pub mod ast;
pub mod error;
pub mod visitor;

pub use ast::{
    AstKind, AstNode, Block, Expr, ExprStmt, Identifier, Literal, LiteralValue, Node,
    SourceLocation, Stmt, StructMap, StructValue, WithItem, WithItemBuilder, WithStmt,
    NO_SOURCE_LOCATION,
};
pub use error::{NodeError, NodeResult};
