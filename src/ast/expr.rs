//! Expression AST nodes.

use std::fmt;

use super::kind::AstKind;
use super::location::{SourceLocation, NO_SOURCE_LOCATION};
use super::node::AstNode;
use super::structure::{StructMap, StructValue};

/// Value-producing node types.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Identifier),
}

impl AstNode for Expr {
    fn kind(&self) -> AstKind {
        match self {
            Expr::Literal(e) => e.kind(),
            Expr::Identifier(e) => e.kind(),
        }
    }

    fn loc(&self) -> SourceLocation {
        match self {
            Expr::Literal(e) => e.loc,
            Expr::Identifier(e) => e.loc,
        }
    }

    fn get_struct(&self) -> StructMap {
        match self {
            Expr::Literal(e) => e.get_struct(),
            Expr::Identifier(e) => e.get_struct(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(e) => e.fmt(f),
            Expr::Identifier(e) => e.fmt(f),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}

impl From<Identifier> for Expr {
    fn from(identifier: Identifier) -> Self {
        Expr::Identifier(identifier)
    }
}

/// A constant value.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub loc: SourceLocation,
}

impl Literal {
    /// Create a literal with no source position.
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Literal {
            value: value.into(),
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Tag the literal with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

impl AstNode for Literal {
    fn kind(&self) -> AstKind {
        AstKind::Literal
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let mut map = StructMap::new();
        map.insert("LITERAL".to_string(), StructValue::text(&self.value));
        map
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Primitive constant kinds a [`Literal`] can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "{}", v),
            LiteralValue::Float(v) => write!(f, "{}", v),
            LiteralValue::Str(v) => f.write_str(v),
            LiteralValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Float(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::Str(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

/// A name reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub loc: SourceLocation,
}

impl Identifier {
    /// Create an identifier with no source position.
    pub fn new(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Tag the identifier with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

impl AstNode for Identifier {
    fn kind(&self) -> AstKind {
        AstKind::Identifier
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let mut map = StructMap::new();
        map.insert("IDENTIFIER".to_string(), StructValue::Text(self.name.clone()));
        map
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
