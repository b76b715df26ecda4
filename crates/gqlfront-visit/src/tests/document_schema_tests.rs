//! Tests for [`DocumentSchema`] and resolved schema types.

use crate::BuiltInScalar;
use crate::DocumentSchema;
use crate::NamedType;
use crate::Schema;
use crate::SchemaType;
use crate::tests::tree_utils::parse;
use gqlfront_parser::ast::OperationKind;
use gqlfront_parser::parse_type_ref;

const STARWARS: &str = "
    type Query { hero(episode: Episode): Character droid(id: ID!): Droid }
    type Mutation { like(id: ID!): Int }
    enum Episode { NEWHOPE EMPIRE JEDI }
    interface Character { id: ID! name: String friends: [Character] }
    type Droid implements Character { id: ID! name: String friends: [Character] }
    extend type Droid { primaryFunction: String }
    extend interface Character { appearsIn: [Episode!]! }
";

/// Verifies named lookups of defined, built-in and unknown types.
#[test]
fn named_type_lookup() {
    let document = parse(STARWARS);
    let schema = DocumentSchema::new(&document);

    let droid = schema.named_type("Droid").unwrap();
    assert!(matches!(droid, NamedType::Defined(_)));
    assert_eq!(droid.name(), "Droid");
    assert!(!droid.is_leaf());

    assert_eq!(schema.named_type("Episode").map(|t| t.is_leaf()), Some(true));
    assert_eq!(
        schema.named_type("ID"),
        Some(NamedType::BuiltIn(BuiltInScalar::ID)),
    );
    assert!(schema.named_type("Starship").is_none());
    assert_eq!(
        schema.type_names().collect::<Vec<_>>(),
        ["Query", "Mutation", "Episode", "Character", "Droid"],
    );
}

/// Verifies that named types compare by name only.
#[test]
fn named_types_compare_by_name() {
    let document = parse("scalar String scalar Date");
    let schema = DocumentSchema::new(&document);
    let defined = schema.named_type("String").unwrap();
    assert!(matches!(defined, NamedType::Defined(_)));
    assert_eq!(defined, NamedType::BuiltIn(BuiltInScalar::String));
    assert_ne!(schema.named_type("Date").unwrap(), defined);
}

/// Verifies default root types when there is no schema definition.
#[test]
fn default_root_types() {
    let document = parse(STARWARS);
    let schema = DocumentSchema::new(&document);
    assert_eq!(
        schema.root_type_for_operation(OperationKind::Query).map(|t| t.name()),
        Some("Query"),
    );
    assert_eq!(
        schema.root_type_for_operation(OperationKind::Mutation).map(|t| t.name()),
        Some("Mutation"),
    );
    assert!(schema.root_type_for_operation(OperationKind::Subscription).is_none());
}

/// Verifies explicit root types, including ones added by an extension,
/// replace the defaults entirely.
#[test]
fn explicit_root_types() {
    let document = parse(
        "schema { query: Root } extend schema { subscription: Events } \
         type Root { a: Int } type Events { b: Int } type Mutation { c: Int }",
    );
    let schema = DocumentSchema::new(&document);
    assert_eq!(
        schema.root_type_for_operation(OperationKind::Query).map(|t| t.name()),
        Some("Root"),
    );
    assert_eq!(
        schema.root_type_for_operation(OperationKind::Subscription).map(|t| t.name()),
        Some("Events"),
    );
    assert!(schema.root_type_for_operation(OperationKind::Mutation).is_none());
}

/// Verifies that extension fields are found alongside defined ones.
#[test]
fn extension_fields_are_attached() {
    let document = parse(STARWARS);
    let schema = DocumentSchema::new(&document);
    let field_names: Vec<&str> = schema
        .fields_of("Droid")
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(field_names, ["id", "name", "friends", "primaryFunction"]);
    assert_eq!(schema.extensions_of("Character").len(), 1);
    assert!(schema.extensions_of("Starship").is_empty());

    let character = SchemaType::Named(schema.named_type("Character").unwrap());
    let appears_in = schema.field_definition(&character, "appearsIn").unwrap();
    assert_eq!(appears_in.type_ref.to_string(), "[Episode!]!");
    assert!(schema.field_definition(&character, "primaryFunction").is_none());
}

/// Verifies that field lookups look through list and non-null wrappers.
#[test]
fn field_lookup_through_wrappers() {
    let document = parse(STARWARS);
    let schema = DocumentSchema::new(&document);
    let friends = schema.resolve_type(&parse_type_ref("[Character!]!").unwrap()).unwrap();
    assert!(schema.field_definition(&friends, "name").is_some());
    let id = SchemaType::Named(NamedType::BuiltIn(BuiltInScalar::ID));
    assert!(schema.field_definition(&id, "name").is_none());
}

/// Verifies type references resolve layer by layer.
#[test]
fn resolve_type_refs() {
    let document = parse(STARWARS);
    let schema = DocumentSchema::new(&document);

    let resolved = schema.resolve_type(&parse_type_ref("[Droid!]!").unwrap()).unwrap();
    assert_eq!(resolved.to_string(), "[Droid!]!");
    assert!(resolved.is_non_null());
    assert!(resolved.is_list());
    assert_eq!(resolved.named_type().name(), "Droid");
    let SchemaType::NonNull(list) = &resolved else {
        panic!("expected a non-null type");
    };
    let SchemaType::List(element) = &**list else {
        panic!("expected a list type");
    };
    assert!(element.is_non_null());

    assert!(schema.resolve_type(&parse_type_ref("[Starship]").unwrap()).is_none());
    assert_eq!(
        schema.resolve_type(&parse_type_ref("Int").unwrap()),
        Some(SchemaType::Named(NamedType::BuiltIn(BuiltInScalar::Int))),
    );
}

/// Verifies that the first definition of a duplicated name wins and that
/// extensions of unknown types are ignored.
#[test]
fn duplicates_and_orphan_extensions() {
    let document = parse("type A { first: Int } type A { second: Int } extend type B { c: Int }");
    let schema = DocumentSchema::new(&document);
    let names: Vec<&str> = schema.fields_of("A").iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first"]);
    assert!(schema.named_type("B").is_none());
    assert!(schema.fields_of("B").is_empty());
}

/// Verifies that cyclic type graphs resolve lazily by name.
#[test]
fn cyclic_types() {
    let document = parse("type A { b: B } type B { a: A! }");
    let schema = DocumentSchema::new(&document);
    let mut current = SchemaType::Named(schema.named_type("A").unwrap());
    for field in ["b", "a", "b", "a"] {
        let definition = schema.field_definition(&current, field).unwrap();
        current = schema.resolve_type(&definition.type_ref).unwrap();
    }
    assert_eq!(current.to_string(), "A!");
}

/// Verifies built-in scalar names.
#[test]
fn built_in_scalars() {
    for scalar in BuiltInScalar::ALL {
        assert_eq!(BuiltInScalar::from_name(scalar.name()), Some(scalar));
    }
    assert!(BuiltInScalar::from_name("Date").is_none());
    assert!(BuiltInScalar::from_name("int").is_none());
}
