//! Tests for operation and fragment definitions.

use crate::ast::Definition;
use crate::ast::OperationKind;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::tests::ast_utils::first_operation;
use crate::tests::ast_utils::parse_ok;

// =============================================================================
// Operations
// =============================================================================

/// Verifies that a bare selection set is an anonymous query.
#[test]
fn shorthand_query() {
    let document = parse_ok("{ a }");
    let operation = first_operation(&document);
    assert_eq!(operation.kind, OperationKind::Query);
    assert!(operation.name.is_none());
    assert!(operation.variable_definitions.is_empty());
    assert!(operation.directives.is_empty());
}

/// Verifies each operation keyword maps to its kind.
#[test]
fn operation_kinds() {
    for (source, kind) in [
        ("query Q { a }", OperationKind::Query),
        ("mutation M { a }", OperationKind::Mutation),
        ("subscription S { a }", OperationKind::Subscription),
    ] {
        let document = parse_ok(source);
        assert_eq!(first_operation(&document).kind, kind, "{source}");
    }
}

/// Verifies that a keyword operation may omit its name.
#[test]
fn anonymous_keyword_operation() {
    let document = parse_ok("mutation { like }");
    let operation = first_operation(&document);
    assert_eq!(operation.kind, OperationKind::Mutation);
    assert!(operation.name.is_none());
}

/// Verifies variable definitions with types, defaults and directives.
#[test]
fn variable_definitions() {
    let document = parse_ok(
        "query Q($id: ID!, $first: Int = 10 @deprecated, $tags: [String!]) { a }",
    );
    let operation = first_operation(&document);
    assert_eq!(operation.name.as_ref().unwrap().as_str(), "Q");

    let vars = &operation.variable_definitions;
    assert_eq!(vars.len(), 3);
    assert_eq!(vars[0].name.as_str(), "id");
    assert!(matches!(vars[0].type_ref, TypeRef::NonNull(_)));
    assert!(vars[0].default_value.is_none());

    assert_eq!(vars[1].name.as_str(), "first");
    assert!(matches!(
        vars[1].default_value,
        Some(Value::Int(ref int)) if int.value == 10,
    ));
    assert_eq!(vars[1].directives.len(), 1);

    assert_eq!(vars[2].type_ref.to_string(), "[String!]");
}

/// Verifies directives on an operation.
#[test]
fn operation_directives() {
    let document = parse_ok("query Q @live @cached(ttl: 5) { a }");
    let operation = first_operation(&document);
    assert_eq!(operation.directives.len(), 2);
    assert_eq!(operation.directives[1].name.as_str(), "cached");
}

/// Verifies several operations in one document.
#[test]
fn multiple_operations() {
    let document = parse_ok("query A { a } query B { b } mutation C { c }");
    assert_eq!(document.operations().count(), 3);
    assert_eq!(
        document.operation_by_name(Some("B")).unwrap().name.as_ref().unwrap().as_str(),
        "B",
    );
    assert!(document.operation_by_name(Some("D")).is_none());
    assert!(document.operation_by_name(None).is_none());
}

/// Verifies `operation_by_name(None)` finds the anonymous operation.
#[test]
fn anonymous_operation_by_name() {
    let document = parse_ok("{ a }");
    assert!(document.operation_by_name(None).is_some());
}

// =============================================================================
// Fragments
// =============================================================================

/// Verifies a fragment definition with directives.
#[test]
fn fragment_definition() {
    let document = parse_ok("fragment UserFields on User @foo { id name }");
    let Definition::Fragment(fragment) = &document.definitions[0] else {
        panic!("expected a fragment");
    };
    assert_eq!(fragment.name.as_str(), "UserFields");
    assert_eq!(fragment.type_condition.name.as_str(), "User");
    assert_eq!(fragment.directives.len(), 1);
    assert_eq!(fragment.selection_set.selections.len(), 2);
}

/// Verifies `fragments_by_name` keys fragments in document order and keeps
/// the first definition of a duplicated name.
#[test]
fn fragments_by_name() {
    let document = parse_ok(
        "fragment B on T { b } { ...A } fragment A on T { a } fragment B on T { second }",
    );
    let fragments = document.fragments_by_name();
    let names: Vec<&str> = fragments.keys().copied().collect();
    assert_eq!(names, ["B", "A"]);
    let b = fragments["B"];
    assert_eq!(b.selection_set.selections.len(), 1);
    assert!(matches!(
        &b.selection_set.selections[0],
        crate::ast::Selection::Field(field) if field.name.as_str() == "b",
    ));
}

/// Verifies that a document mixing executable and type system definitions
/// can be filtered.
#[test]
fn mixed_document_filters() {
    let document = parse_ok("type Query { a: Int } { a } fragment F on Query { a } scalar Date");
    assert_eq!(document.executable_definitions().count(), 2);
    assert_eq!(document.type_system_definitions().count(), 2);
    assert_eq!(document.fragments().count(), 1);
}
