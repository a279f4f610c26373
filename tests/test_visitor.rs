//! Integration tests for visitor traversal.

use astkit::visitor::{walk_stmt, walk_with_item, Visitor};
use astkit::{Block, Expr, ExprStmt, Identifier, Literal, Stmt, WithItem, WithStmt};

/// Visitor counting every node category it sees.
#[derive(Default)]
struct CountingVisitor {
    stmts: usize,
    exprs: usize,
    identifiers: usize,
    items: usize,
    blocks: usize,
}

impl Visitor for CountingVisitor {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.stmts += 1;
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, _expr: &Expr) {
        self.exprs += 1;
    }

    fn visit_identifier(&mut self, _identifier: &Identifier) {
        self.identifiers += 1;
    }

    fn visit_block(&mut self, block: &Block) {
        self.blocks += 1;
        astkit::visitor::walk_block(self, block);
    }

    fn visit_with_item(&mut self, item: &WithItem) {
        self.items += 1;
        walk_with_item(self, item);
    }
}

fn sample_with_stmt() -> Stmt {
    let mut body = Block::new("body");
    body.push(ExprStmt::new(Identifier::new("work")));
    body.push(ExprStmt::new(Literal::new(1)));

    let items = vec![
        WithItem::new(Literal::new(42), Some(Identifier::new("x"))),
        WithItem::new(Identifier::new("lock"), None),
    ];
    Stmt::With(WithStmt::new(items, body).unwrap())
}

#[test]
fn test_visitor_counts_with_stmt_children() {
    let stmt = sample_with_stmt();
    let mut visitor = CountingVisitor::default();
    visitor.visit_stmt(&stmt);

    // The with-statement plus the two body statements.
    assert_eq!(visitor.stmts, 3);
    // Two context expressions plus two expression statements.
    assert_eq!(visitor.exprs, 4);
    // Only the first clause binds a name.
    assert_eq!(visitor.identifiers, 1);
    assert_eq!(visitor.items, 2);
    assert_eq!(visitor.blocks, 1);
}

#[test]
fn test_visitor_sees_items_in_clause_order() {
    struct OrderVisitor {
        seen: Vec<String>,
    }

    impl Visitor for OrderVisitor {
        fn visit_with_item(&mut self, item: &WithItem) {
            self.seen.push(item.to_string());
        }
    }

    let stmt = sample_with_stmt();
    let mut visitor = OrderVisitor { seen: Vec::new() };
    visitor.visit_stmt(&stmt);

    assert_eq!(visitor.seen, vec!["42 as x".to_string(), "lock".to_string()]);
}

#[test]
fn test_visitor_default_hooks_traverse() {
    struct ExprOnly {
        exprs: usize,
    }

    impl Visitor for ExprOnly {
        fn visit_expr(&mut self, _expr: &Expr) {
            self.exprs += 1;
        }
    }

    let stmt = sample_with_stmt();
    let mut visitor = ExprOnly { exprs: 0 };
    visitor.visit_stmt(&stmt);
    assert_eq!(visitor.exprs, 4);
}
