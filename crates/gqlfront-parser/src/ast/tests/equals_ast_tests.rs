//! Tests for structural equality via `EqualsAst`.

use crate::ast::EqualsAst;
use crate::ast::FieldSelection;
use crate::ast::IntValue;
use crate::ast::Name;
use crate::ast::NamedTypeRef;
use crate::ast::NullableTypeRef;
use crate::ast::NonNullTypeRef;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::parse_document;
use crate::parse_type_ref;
use crate::parse_value;

fn name(value: &str) -> Name {
    Name {
        origin: None,
        value: value.to_string(),
    }
}

/// Verifies that a hand-built tree equals a parsed one when origins are
/// ignored, and differs when they are not.
#[test]
fn synthesized_equals_parsed_ignoring_origins() {
    let parsed = parse_type_ref("User!").unwrap();
    let built = TypeRef::NonNull(NonNullTypeRef::new(
        NullableTypeRef::Named(NamedTypeRef {
            origin: None,
            name: name("User"),
        }),
        None,
    ));
    assert!(parsed.equals_ast(&built, false));
    assert!(!parsed.equals_ast(&built, true));
    assert!(built.equals_ast(&built.clone(), true));
}

/// Verifies that differing leaf values are unequal.
#[test]
fn differing_values_are_unequal() {
    let one = parse_value("{ a: 1 }").unwrap();
    let two = parse_value("{ a: 2 }").unwrap();
    let renamed = parse_value("{ b: 1 }").unwrap();
    assert!(!one.equals_ast(&two, false));
    assert!(!one.equals_ast(&renamed, false));
}

/// Verifies that values of different kinds are unequal even when their
/// text matches.
#[test]
fn differing_kinds_are_unequal() {
    let enum_value = parse_value("RED").unwrap();
    let string_value = parse_value("\"RED\"").unwrap();
    assert!(!enum_value.equals_ast(&string_value, false));

    let block = parse_value("\"\"\"x\"\"\"").unwrap();
    let quoted = parse_value("\"x\"").unwrap();
    assert!(!block.equals_ast(&quoted, false));
}

/// Verifies that list lengths and order matter.
#[test]
fn list_order_and_length() {
    let a = parse_value("[1, 2]").unwrap();
    assert!(!a.equals_ast(&parse_value("[2, 1]").unwrap(), false));
    assert!(!a.equals_ast(&parse_value("[1, 2, 3]").unwrap(), false));
    assert!(a.equals_ast(&parse_value("[1,2]").unwrap(), false));
}

/// Verifies that an alias is significant to equality.
#[test]
fn alias_is_significant() {
    let plain = FieldSelection {
        origin: None,
        alias: None,
        name: name("a"),
        arguments: Vec::new(),
        directives: Vec::new(),
        selection_set: None,
    };
    let aliased = FieldSelection {
        alias: Some(name("b")),
        ..plain.clone()
    };
    assert!(!plain.equals_ast(&aliased, false));
    assert!(plain.equals_ast(&plain.clone(), true));
}

/// Verifies equality on whole documents.
#[test]
fn whole_documents() {
    let source = "query Q($v: Int = 1) { a(x: $v) @d ... on T { b } } type T { b: [Int!] }";
    let a = parse_document(source).unwrap();
    let b = parse_document(source).unwrap();
    assert!(a.equals_ast(&b, true));
    let c = parse_document(source.replace("[Int!]", "[Int]!")).unwrap();
    assert!(!a.equals_ast(&c, false));
}

/// Verifies `Option` handling: `None` only equals `None`.
#[test]
fn optional_children() {
    let int = Value::Int(IntValue {
        origin: None,
        value: 1,
    });
    assert!(Some(int.clone()).equals_ast(&Some(int.clone()), true));
    assert!(!Some(int).equals_ast(&None, false));
    assert!(None::<Value>.equals_ast(&None, true));
}
