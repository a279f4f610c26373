//! Integration tests for context-manager AST nodes.

use astkit::{
    AstKind, AstNode, Block, Identifier, Literal, NodeError, StructValue, WithItem, WithStmt,
};

/// Helper producing a basic context expression.
fn context_expr() -> Literal {
    Literal::new(42)
}

/// Helper producing a basic bound name.
fn var_name() -> Identifier {
    Identifier::new("x")
}

/// Helper producing an empty block.
fn empty_block() -> Block {
    Block::new("empty_block")
}

#[test]
fn test_with_item_init_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    assert_eq!(item.context_expr, context_expr().into());
    assert_eq!(item.instance_name, Some(var_name()));
    assert_eq!(item.kind(), AstKind::WithItem);
}

#[test]
fn test_with_item_str_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    assert_eq!(item.to_string(), "42 as x");
}

#[test]
fn test_with_item_str_unbound() {
    let item = WithItem::new(context_expr(), None);
    assert_eq!(item.to_string(), "42");
}

#[test]
fn test_with_item_get_struct_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    let struct_map = item.get_struct();
    assert_eq!(struct_map.len(), 1);
    assert_eq!(
        struct_map.get("CONTEXT[42]"),
        Some(&StructValue::Text("AS x".to_string()))
    );
}

#[test]
fn test_with_item_get_struct_unbound() {
    let item = WithItem::new(context_expr(), None);
    let struct_map = item.get_struct();
    assert_eq!(struct_map.get("CONTEXT[42]"), Some(&StructValue::Empty));
}

#[test]
fn test_with_item_builder() {
    let item = WithItem::builder()
        .context_expr(context_expr())
        .instance_name(var_name())
        .build()
        .unwrap();
    assert_eq!(item.to_string(), "42 as x");
}

#[test]
fn test_with_item_builder_missing_context() {
    let result = WithItem::builder().instance_name(var_name()).build();
    assert_eq!(result, Err(NodeError::MissingContextExpression));
}

#[test]
fn test_with_stmt_init_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    let stmt = WithStmt::new(vec![item.clone()], empty_block()).unwrap();
    assert_eq!(stmt.items, vec![item]);
    assert_eq!(stmt.body, empty_block());
    assert_eq!(stmt.kind(), AstKind::WithStmt);
}

#[test]
fn test_with_stmt_str_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    let stmt = WithStmt::new(vec![item], empty_block()).unwrap();
    assert_eq!(stmt.to_string(), "WithStmt[42 as x]");
}

#[test]
fn test_with_stmt_str_preserves_clause_order() {
    let first = WithItem::new(context_expr(), Some(var_name()));
    let second = WithItem::new(Identifier::new("open_file"), Some(Identifier::new("f")));
    let stmt = WithStmt::new(vec![first, second], empty_block()).unwrap();
    assert_eq!(stmt.to_string(), "WithStmt[42 as x, open_file as f]");
}

#[test]
fn test_with_stmt_empty_clause_list() {
    let result = WithStmt::new(vec![], empty_block());
    assert_eq!(result, Err(NodeError::EmptyClauseList));
}

#[test]
fn test_with_stmt_get_struct_basic() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    let stmt = WithStmt::new(vec![item], empty_block()).unwrap();
    let struct_map = stmt.get_struct();

    let content = match struct_map.get("WITH-STMT") {
        Some(StructValue::Map(content)) => content,
        other => panic!("expected WITH-STMT map, got {:?}", other),
    };
    assert!(content.contains_key("items"));
    assert!(content.contains_key("body"));
}

#[test]
fn test_with_stmt_get_struct_delegates_to_children() {
    let first = WithItem::new(context_expr(), Some(var_name()));
    let second = WithItem::new(Identifier::new("lock"), None);
    let stmt = WithStmt::new(vec![first.clone(), second.clone()], empty_block()).unwrap();
    let struct_map = stmt.get_struct();

    let content = match struct_map.get("WITH-STMT") {
        Some(StructValue::Map(content)) => content,
        other => panic!("expected WITH-STMT map, got {:?}", other),
    };
    assert_eq!(
        content.get("items"),
        Some(&StructValue::Items(vec![
            StructValue::Map(first.get_struct()),
            StructValue::Map(second.get_struct()),
        ]))
    );
    assert_eq!(
        content.get("body"),
        Some(&StructValue::Map(empty_block().get_struct()))
    );
}

#[test]
fn test_with_stmt_serialized_export() {
    let item = WithItem::new(context_expr(), Some(var_name()));
    let stmt = WithStmt::new(vec![item], empty_block()).unwrap();

    let json = serde_json::to_value(stmt.get_struct()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "WITH-STMT": {
                "items": [{"CONTEXT[42]": "AS x"}],
                "body": {"BLOCK[empty_block]": []},
            }
        })
    );
}
