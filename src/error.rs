//! Node construction error types.
//!
//! All failures here are programmer errors surfaced at construction time;
//! rendering and structured export never fail on a constructed node.

use thiserror::Error;

use crate::ast::AstKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("with-item is missing its context expression")]
    MissingContextExpression,

    #[error("with-statement requires at least one clause")]
    EmptyClauseList,

    #[error("invalid node type: expected {expected}, found {found}")]
    InvalidNodeType {
        expected: &'static str,
        found: AstKind,
    },
}

pub type NodeResult<T> = Result<T, NodeError>;
