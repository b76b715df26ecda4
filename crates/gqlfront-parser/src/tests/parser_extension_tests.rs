//! Tests for schema and type extensions.

use crate::SyntaxErrorKind;
use crate::ast::Definition;
use crate::ast::TypeExtension;
use crate::tests::ast_utils::first_type_extension;
use crate::tests::ast_utils::parse_err;
use crate::tests::ast_utils::parse_ok;

/// Verifies a schema extension adding a root type.
#[test]
fn schema_extension() {
    let document = parse_ok("extend schema @tag { subscription: Sub }");
    let Definition::SchemaExtension(extension) = &document.definitions[0] else {
        panic!("expected a schema extension");
    };
    assert_eq!(extension.directives.len(), 1);
    assert_eq!(extension.operation_types[0].type_ref.name.as_str(), "Sub");
    assert!(document.definitions[0].is_type_system_extension());
}

/// Verifies that each type extension keyword yields its kind.
#[test]
fn type_extension_kinds() {
    let cases = [
        ("extend scalar Date @tag", "Date"),
        ("extend type User implements Node", "User"),
        ("extend type User { age: Int }", "User"),
        ("extend interface Node @tag", "Node"),
        ("extend union Result = Extra", "Result"),
        ("extend enum Color { MAUVE }", "Color"),
        ("extend input Filter { limit: Int }", "Filter"),
    ];
    for (source, expected_name) in cases {
        let document = parse_ok(source);
        let extension = first_type_extension(&document);
        assert_eq!(extension.name().as_str(), expected_name, "{source}");
        let matches_keyword = match extension {
            TypeExtension::Scalar(_) => source.contains("scalar"),
            TypeExtension::Object(_) => source.contains("type"),
            TypeExtension::Interface(_) => source.contains("interface"),
            TypeExtension::Union(_) => source.contains("union"),
            TypeExtension::Enum(_) => source.contains("enum"),
            TypeExtension::InputObject(_) => source.contains("input"),
        };
        assert!(matches_keyword, "{source}");
    }
}

/// Verifies that an object extension keeps what it adds.
#[test]
fn object_extension_contents() {
    let document = parse_ok("extend type User implements Node @key(fields: \"id\") { id: ID! }");
    let TypeExtension::Object(extension) = first_type_extension(&document) else {
        panic!("expected an object extension");
    };
    assert_eq!(extension.interfaces.len(), 1);
    assert_eq!(extension.directives.len(), 1);
    assert_eq!(extension.fields.len(), 1);
}

/// Verifies that an extension must add something.
#[test]
fn empty_extensions_rejected() {
    for source in [
        "extend schema",
        "extend scalar Date",
        "extend type User",
        "extend interface Node",
        "extend union U",
        "extend enum E",
        "extend input I",
    ] {
        let error = parse_err(source);
        assert!(
            matches!(error.kind(), SyntaxErrorKind::UnexpectedEof { expected: None }),
            "{source}: {error:?}",
        );
    }
}

/// Verifies that `extend` must be followed by an extensible keyword, and
/// that the error points at that token.
#[test]
fn unknown_extension_keyword() {
    let error = parse_err("extend fragment F on T { a }");
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedToken { .. }));
    assert_eq!(error.origin().text(), "fragment");
    assert_eq!(error.message(), "Expected a type system extension, found `fragment`");
}

/// Verifies that extensions cannot carry descriptions.
#[test]
fn described_extension_rejected() {
    let error = parse_err("\"doc\" extend type User { a: Int }");
    assert_eq!(error.kind(), &SyntaxErrorKind::UnexpectedDescription);
    assert_eq!(error.origin().byte_range(), 0..5);
}
