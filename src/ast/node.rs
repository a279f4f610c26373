//! The base node contract shared by every AST element.

use std::fmt;

use super::context::WithItem;
use super::expr::Expr;
use super::kind::AstKind;
use super::location::SourceLocation;
use super::stmt::{Block, Stmt};
use super::structure::StructMap;
use crate::error::NodeError;

/// Capability set every AST element provides.
///
/// `kind` and `loc` are fixed at construction. `get_struct` and the
/// `Display` rendering are pure functions of the node's attributes; both
/// are total over constructed nodes and never fail.
pub trait AstNode: fmt::Display {
    /// The tag fixed at construction.
    fn kind(&self) -> AstKind;

    /// Where the node originated, or the no-location sentinel.
    ///
    /// Informational only; never affects rendering or export content.
    fn loc(&self) -> SourceLocation;

    /// Nested-mapping export rooted at a single label for this node.
    ///
    /// Child nodes produce their own exports, which are embedded as-is.
    fn get_struct(&self) -> StructMap;
}

/// Type-erased node.
///
/// Builders that collect heterogeneous children before committing them to a
/// parent hold these; converting back to a concrete family checks the
/// capability and fails with [`NodeError::InvalidNodeType`] on a mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Expr(Expr),
    Stmt(Stmt),
    Block(Block),
    WithItem(WithItem),
}

impl AstNode for Node {
    fn kind(&self) -> AstKind {
        match self {
            Node::Expr(n) => n.kind(),
            Node::Stmt(n) => n.kind(),
            Node::Block(n) => n.kind(),
            Node::WithItem(n) => n.kind(),
        }
    }

    fn loc(&self) -> SourceLocation {
        match self {
            Node::Expr(n) => n.loc(),
            Node::Stmt(n) => n.loc(),
            Node::Block(n) => n.loc(),
            Node::WithItem(n) => n.loc(),
        }
    }

    fn get_struct(&self) -> StructMap {
        match self {
            Node::Expr(n) => n.get_struct(),
            Node::Stmt(n) => n.get_struct(),
            Node::Block(n) => n.get_struct(),
            Node::WithItem(n) => n.get_struct(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Expr(n) => n.fmt(f),
            Node::Stmt(n) => n.fmt(f),
            Node::Block(n) => n.fmt(f),
            Node::WithItem(n) => n.fmt(f),
        }
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::Expr(expr)
    }
}

impl From<Stmt> for Node {
    fn from(stmt: Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<WithItem> for Node {
    fn from(item: WithItem) -> Self {
        Node::WithItem(item)
    }
}

impl TryFrom<Node> for Expr {
    type Error = NodeError;

    fn try_from(node: Node) -> Result<Self, NodeError> {
        match node {
            Node::Expr(expr) => Ok(expr),
            other => Err(NodeError::InvalidNodeType {
                expected: "Expr",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Node> for Stmt {
    type Error = NodeError;

    fn try_from(node: Node) -> Result<Self, NodeError> {
        match node {
            Node::Stmt(stmt) => Ok(stmt),
            other => Err(NodeError::InvalidNodeType {
                expected: "Stmt",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Node> for Block {
    type Error = NodeError;

    fn try_from(node: Node) -> Result<Self, NodeError> {
        match node {
            Node::Block(block) => Ok(block),
            other => Err(NodeError::InvalidNodeType {
                expected: "Block",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Node> for WithItem {
    type Error = NodeError;

    fn try_from(node: Node) -> Result<Self, NodeError> {
        match node {
            Node::WithItem(item) => Ok(item),
            other => Err(NodeError::InvalidNodeType {
                expected: "WithItem",
                found: other.kind(),
            }),
        }
    }
}
