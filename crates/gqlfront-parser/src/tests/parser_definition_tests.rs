//! Tests for directive definitions, descriptions and definition dispatch.

use crate::ast::Definition;
use crate::ast::DirectiveLocation;
use crate::tests::ast_utils::parse_ok;

/// Verifies a directive definition with arguments and locations.
#[test]
fn directive_definition() {
    let document = parse_ok(
        "\"Marks deprecated elements\" \
         directive @deprecated(reason: String = \"No longer supported\") \
         on FIELD_DEFINITION | ENUM_VALUE",
    );
    let Definition::Directive(directive) = &document.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.as_str(), "deprecated");
    assert_eq!(
        directive.description.as_ref().unwrap().as_str(),
        "Marks deprecated elements",
    );
    assert_eq!(directive.arguments.len(), 1);
    assert!(!directive.is_repeatable);
    let locations: Vec<DirectiveLocation> = directive.directive_locations().collect();
    assert_eq!(
        locations,
        [DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue],
    );
}

/// Verifies `repeatable` and a leading `|` before the first location.
#[test]
fn repeatable_directive() {
    let document = parse_ok("directive @tag(name: String!) repeatable on | OBJECT | INTERFACE");
    let Definition::Directive(directive) = &document.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert!(directive.is_repeatable);
    assert_eq!(directive.locations.len(), 2);
}

/// Verifies that every location name is accepted.
#[test]
fn all_locations_accepted() {
    let names: Vec<&str> = DirectiveLocation::ALL
        .iter()
        .map(|location| location.as_str())
        .collect();
    let source = format!("directive @all on {}", names.join(" | "));
    let document = parse_ok(&source);
    let Definition::Directive(directive) = &document.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.directive_locations().count(), DirectiveLocation::ALL.len());
}

/// Verifies block string descriptions on types and fields.
#[test]
fn block_string_descriptions() {
    let document = parse_ok(
        "\"\"\"\n  A user\n  of the system\n\"\"\"\ntype User {\n  \"\"\"The id\"\"\"\n  id: ID\n}",
    );
    let Definition::Type(user) = &document.definitions[0] else {
        panic!("expected a type definition");
    };
    let description = user.description().unwrap();
    assert!(description.is_block);
    assert_eq!(description.as_str(), "A user\nof the system");
    assert_eq!(
        user.fields()[0].description.as_ref().unwrap().as_str(),
        "The id",
    );
}

/// Verifies that keywords are only keywords where a definition starts.
#[test]
fn keyword_named_types() {
    let document = parse_ok("type type { query: query } scalar on");
    assert_eq!(document.definitions.len(), 2);
    let Definition::Type(type_definition) = &document.definitions[1] else {
        panic!("expected a type definition");
    };
    assert_eq!(type_definition.name().as_str(), "on");
}

/// Verifies classification helpers on each definition kind.
#[test]
fn definition_classification() {
    let document = parse_ok(
        "{ a } fragment F on T { a } schema { query: Q } scalar S \
         directive @d on FIELD extend scalar S @d",
    );
    let flags: Vec<(bool, bool, bool)> = document
        .definitions
        .iter()
        .map(|definition| {
            (
                definition.is_executable(),
                definition.is_type_system_definition(),
                definition.is_type_system_extension(),
            )
        })
        .collect();
    assert_eq!(
        flags,
        [
            (true, false, false),
            (true, false, false),
            (false, true, false),
            (false, true, false),
            (false, true, false),
            (false, false, true),
        ],
    );
}
