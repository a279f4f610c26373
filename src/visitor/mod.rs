//! Read-only visitor pattern for AST traversal.
//!
//! Default trait methods delegate to the free `walk_*` functions, which
//! recurse into children in document order. Override a hook to observe a
//! node, then call the matching walk function to keep traversing beneath it.

use crate::ast::{Block, Expr, Identifier, Stmt, WithItem};

/// Trait for visiting AST nodes while maintaining state.
pub trait Visitor {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_identifier(&mut self, _identifier: &Identifier) {}

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_with_item(&mut self, item: &WithItem) {
        walk_with_item(self, item);
    }
}

/// Walk a statement, visiting all child nodes.
pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Expr(s) => visitor.visit_expr(&s.value),
        Stmt::With(w) => {
            for item in &w.items {
                visitor.visit_with_item(item);
            }
            visitor.visit_block(&w.body);
        }
        Stmt::Pass(_) => {}
    }
}

/// Walk an expression. Both expression types are leaves, so there is
/// nothing to recurse into yet; the match stays exhaustive so new
/// expression types cannot be silently skipped.
pub fn walk_expr<V: Visitor + ?Sized>(_visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Literal(_) | Expr::Identifier(_) => {}
    }
}

/// Walk a block, visiting statements in execution order.
pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    for stmt in &block.body {
        visitor.visit_stmt(stmt);
    }
}

/// Walk a with-item, visiting the context expression and any binding.
pub fn walk_with_item<V: Visitor + ?Sized>(visitor: &mut V, item: &WithItem) {
    visitor.visit_expr(&item.context_expr);
    if let Some(name) = &item.instance_name {
        visitor.visit_identifier(name);
    }
}
