//! Context-manager nodes: with-statements and their clauses.

use std::fmt;

use super::expr::{Expr, Identifier};
use super::kind::AstKind;
use super::location::{SourceLocation, NO_SOURCE_LOCATION};
use super::node::AstNode;
use super::stmt::Block;
use super::structure::{StructMap, StructValue};
use crate::error::{NodeError, NodeResult};

/// One `<expr> as <name>` clause of a with-statement.
///
/// The context expression is mandatory; the bound name is optional (an
/// anonymous context has no `as` binding).
#[derive(Debug, Clone, PartialEq)]
pub struct WithItem {
    pub context_expr: Expr,
    pub instance_name: Option<Identifier>,
    pub loc: SourceLocation,
}

impl WithItem {
    /// Create a clause from its context expression and optional binding.
    pub fn new(context_expr: impl Into<Expr>, instance_name: Option<Identifier>) -> Self {
        WithItem {
            context_expr: context_expr.into(),
            instance_name,
            loc: NO_SOURCE_LOCATION,
        }
    }

    /// Staged construction for callers that fill clause slots out of order.
    pub fn builder() -> WithItemBuilder {
        WithItemBuilder::new()
    }

    /// Tag the clause with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

impl AstNode for WithItem {
    fn kind(&self) -> AstKind {
        AstKind::WithItem
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let value = match &self.instance_name {
            Some(name) => StructValue::Text(format!("AS {}", name)),
            None => StructValue::Empty,
        };
        let mut map = StructMap::new();
        map.insert(format!("CONTEXT[{}]", self.context_expr), value);
        map
    }
}

impl fmt::Display for WithItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.instance_name {
            Some(name) => write!(f, "{} as {}", self.context_expr, name),
            None => self.context_expr.fmt(f),
        }
    }
}

/// Builder for [`WithItem`] with optional slots.
///
/// Finalizing without a context expression fails with
/// [`NodeError::MissingContextExpression`]; the error surfaces here, at
/// construction, never at render time.
#[derive(Debug, Default)]
pub struct WithItemBuilder {
    context_expr: Option<Expr>,
    instance_name: Option<Identifier>,
    loc: SourceLocation,
}

impl WithItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mandatory context expression.
    pub fn context_expr(mut self, expr: impl Into<Expr>) -> Self {
        self.context_expr = Some(expr.into());
        self
    }

    /// Set the optional `as` binding.
    pub fn instance_name(mut self, name: Identifier) -> Self {
        self.instance_name = Some(name);
        self
    }

    /// Tag the clause with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }

    /// Finalize the clause.
    pub fn build(self) -> NodeResult<WithItem> {
        let context_expr = self
            .context_expr
            .ok_or(NodeError::MissingContextExpression)?;
        Ok(WithItem {
            context_expr,
            instance_name: self.instance_name,
            loc: self.loc,
        })
    }
}

/// A full with-statement: one or more clauses sharing a body.
///
/// Clause order matches left-to-right source order and is preserved by
/// rendering and structured export.
#[derive(Debug, Clone, PartialEq)]
pub struct WithStmt {
    pub items: Vec<WithItem>,
    pub body: Block,
    pub loc: SourceLocation,
}

impl WithStmt {
    /// Create a with-statement from its clauses and body.
    ///
    /// Fails with [`NodeError::EmptyClauseList`] when no clause is given.
    pub fn new(items: Vec<WithItem>, body: Block) -> NodeResult<Self> {
        if items.is_empty() {
            return Err(NodeError::EmptyClauseList);
        }
        Ok(WithStmt {
            items,
            body,
            loc: NO_SOURCE_LOCATION,
        })
    }

    /// Tag the statement with a source position.
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

impl AstNode for WithStmt {
    fn kind(&self) -> AstKind {
        AstKind::WithStmt
    }

    fn loc(&self) -> SourceLocation {
        self.loc
    }

    fn get_struct(&self) -> StructMap {
        let items = self
            .items
            .iter()
            .map(|item| StructValue::Map(item.get_struct()))
            .collect();
        let mut content = StructMap::new();
        content.insert("items".to_string(), StructValue::Items(items));
        content.insert("body".to_string(), StructValue::Map(self.body.get_struct()));
        let mut map = StructMap::new();
        map.insert("WITH-STMT".to_string(), StructValue::Map(content));
        map
    }
}

impl fmt::Display for WithStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        write!(f, "WithStmt[{}]", items.join(", "))
    }
}
