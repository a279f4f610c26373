//! Statement nodes and the block container.

use std::fmt;

use super::context::WithStmt;
use super::expr::Expr;
use super::kind::AstKind;
use super::location::{SourceLocation, NO_SOURCE_LOCATION};
use super::node::AstNode;
use super::structure::{StructMap, StructValue};

/// Effect-producing node types.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(ExprStmt),
    With(WithStmt),
    Pass(SourceLocation),
}

impl AstNode for Stmt {
    fn kind(&self) -> AstKind {
        match self {
            Stmt::Expr(s) => s.kind(),
            Stmt::With(s) => s.kind(),
            Stmt::Pass(_) => AstKind::Pass,
        }
    }

    fn loc(&self) -> SourceLocation {
        match self {
            Stmt::Expr(s) => s.loc,
            Stmt::With(s) => s.loc,
            Stmt::Pass(loc) => *loc,
        }
    }

    fn get_struct(&self) -> StructMap {
        match self {
            Stmt::Expr(s) => s.get_struct(),
            Stmt::With(s) => s.get_struct(),
            Stmt::Pass(_) => {
                let mut map = StructMap::new();
                map.insert("PASS".to_string(), StructValue::Empty);
                map
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr(s) => s.fmt(f),
            Stmt::With(s) => s.fmt(f),
            Stmt::Pass(_) => f.write_str("pass"),
        }
    }
}

impl From<ExprStmt> for Stmt {
    fn from(stmt: ExprStmt) -> Self {
        Stmt::Expr(stmt)
    }
}

impl From<WithStmt> for Stmt {
    fn from(stmt: WithStmt) -> Self {
        Stmt::With(stmt)
    }
}

/// An expression evaluated for its effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub value: Expr,
    pub loc: SourceLocation,
}

impl ExprStmt {
    /// Wrap an expression as a statement.
    pub fn new(value: impl Into<Expr>) -> Self {
        ExprStmt {
            value: value.into(),
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Tag the statement with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

impl AstNode for ExprStmt {
    fn kind(&self) -> AstKind {
        AstKind::ExprStmt
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let mut map = StructMap::new();
        map.insert(
            "EXPR-STMT".to_string(),
            StructValue::Map(self.value.get_struct()),
        );
        map
    }
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// An ordered, named sequence of statements forming one lexical body.
///
/// Statement order is execution order. A block is grown with [`Block::push`]
/// during assembly and treated as read-only once handed to a parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub body: Vec<Stmt>,
    pub loc: SourceLocation,
}

impl Block {
    /// Create an empty block with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            body: Vec::new(),
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Create a block with an initial statement list.
    pub fn with_body(name: impl Into<String>, body: Vec<Stmt>) -> Self {
        Block {
            name: name.into(),
            body,
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Append a statement, preserving order.
    pub fn push(&mut self, stmt: impl Into<Stmt>) {
        self.body.push(stmt.into());
    }

    /// Tag the block with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl AstNode for Block {
    fn kind(&self) -> AstKind {
        AstKind::Block
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let stmts = self
            .body
            .iter()
            .map(|stmt| StructValue::Map(stmt.get_struct()))
            .collect();
        let mut map = StructMap::new();
        map.insert(format!("BLOCK[{}]", self.name), StructValue::Items(stmts));
        map
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block[{}]", self.name)
    }
}
