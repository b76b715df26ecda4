//! Tests for `NodeRef` and `AstNode::children`.

use crate::ast::AstNode;
use crate::ast::NodeRef;
use crate::ast::Selection;
use crate::parse_document;

fn kinds(node: NodeRef<'_>) -> Vec<&'static str> {
    node.children().iter().map(|child| child.kind_name()).collect()
}

/// Verifies that a field's children come in grammar order.
#[test]
fn field_children_in_grammar_order() {
    let document = parse_document("{ alias: name(a: 1) @d { x } }").unwrap();
    let operation = document.operations().next().unwrap();
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(
        kinds(field.as_node_ref()),
        ["Name", "Name", "Argument", "Directive", "SelectionSet"],
    );
}

/// Verifies the children of an operation with variables.
#[test]
fn operation_children() {
    let document = parse_document("query Q($a: Int) @d { f }").unwrap();
    let operation = document.operations().next().unwrap();
    assert_eq!(
        kinds(operation.as_node_ref()),
        ["Name", "VariableDefinition", "Directive", "SelectionSet"],
    );
}

/// Verifies the children of type system nodes, including descriptions.
#[test]
fn type_definition_children() {
    let document = parse_document("\"d\" type T implements I @k { f(a: Int): T }").unwrap();
    let root = document.as_node_ref();
    let definition = root.children()[0];
    assert_eq!(definition.kind_name(), "ObjectTypeDefinition");
    assert_eq!(
        kinds(definition),
        ["StringValue", "Name", "NamedTypeRef", "Directive", "FieldDefinition"],
    );
    let field = definition.children()[4];
    assert_eq!(kinds(field), ["Name", "ArgumentDefinition", "NamedTypeRef"]);
}

/// Verifies that leaves have no children.
#[test]
fn leaves_have_no_children() {
    let document = parse_document("{ a(x: 1, y: \"s\", z: null, w: E) }").unwrap();
    let operation = document.operations().next().unwrap();
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    for argument in &field.arguments {
        assert!(argument.value.children().is_empty());
    }
}

/// Verifies that `same_node` compares identity, not equality.
#[test]
fn same_node_is_identity() {
    let document = parse_document("{ a a }").unwrap();
    let selections = &document.operations().next().unwrap().selection_set.selections;
    let first = selections[0].as_node_ref();
    let second = selections[1].as_node_ref();
    assert!(first.same_node(first));
    assert!(!first.same_node(second));

    let Selection::Field(field) = &selections[0] else {
        panic!("expected a field");
    };
    assert!(first.same_node(NodeRef::from(field)));
    assert!(!first.same_node(NodeRef::from(&field.name)));
}

/// Verifies that `NodeRef::origin` matches the node's own origin.
#[test]
fn node_ref_origin() {
    let document = parse_document("{ abc }").unwrap();
    let operation = document.operations().next().unwrap();
    let field_ref = operation.selection_set.selections[0].as_node_ref();
    assert_eq!(field_ref.origin().unwrap().text(), "abc");
}
