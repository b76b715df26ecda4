//! Tests for copy-on-write [`Transformer`] rewrites.

use crate::Transformer;
use crate::tests::tree_utils::parse;
use crate::transform_children;
use gqlfront_parser::ast::Definition;
use gqlfront_parser::ast::IntValue;
use gqlfront_parser::ast::Name;
use gqlfront_parser::ast::NullValue;
use gqlfront_parser::ast::Selection;
use gqlfront_parser::ast::Value;
use std::borrow::Cow;

/// Leaves everything as it is.
struct NoChanges;

impl<'a> Transformer<'a> for NoChanges {}

/// Renames one name to another.
struct Rename {
    from: &'static str,
    to: &'static str,
}

impl<'a> Transformer<'a> for Rename {
    fn transform_name(&mut self, node: &'a Name) -> Cow<'a, Name> {
        if node.as_str() == self.from {
            Cow::Owned(Name {
                origin: node.origin.clone(),
                value: self.to.to_string(),
            })
        } else {
            Cow::Borrowed(node)
        }
    }
}

/// Verifies that a transformer without overrides borrows the whole tree.
#[test]
fn no_changes_borrow_the_input() {
    let document = parse(
        "query Q($v: [Int!]! = [1]) { a(x: {y: $v}) @d { ...F ... on T { b } } } \
         fragment F on T { c } type T implements I { f(a: Int = 1): [T!]! }",
    );
    let transformed = NoChanges.transform_document(&document);
    assert!(matches!(transformed, Cow::Borrowed(_)));
}

/// Verifies that a change deep in the tree rebuilds its ancestors.
#[test]
fn renaming_rebuilds_ancestors() {
    let document = parse("{ old { old } other }");
    let mut rename = Rename {
        from: "old",
        to: "new",
    };
    let transformed = rename.transform_document(&document);
    let Cow::Owned(transformed) = transformed else {
        panic!("expected a rebuilt document");
    };
    assert!(transformed.equals_ast(&parse("{ new { new } other }"), false));
}

/// Verifies that rebuilt nodes keep their origins.
#[test]
fn rebuilt_nodes_keep_origins() {
    let document = parse("{ old { old } other }");
    let mut rename = Rename {
        from: "old",
        to: "new",
    };
    let transformed = rename.transform_document(&document).into_owned();
    assert_eq!(transformed.origin, document.origin);

    let Definition::Operation(original_operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let Definition::Operation(operation) = &transformed.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(operation.origin, original_operation.origin);
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.name.as_str(), "new");
    assert_eq!(field.origin.as_ref().unwrap().text(), "old { old }");
    assert_eq!(field.name.origin.as_ref().unwrap().text(), "old");
}

/// Verifies that untouched subtrees come back borrowed.
#[test]
fn unchanged_subtrees_are_borrowed() {
    let document = parse("query A { keep } query B { old }");
    let mut rename = Rename {
        from: "old",
        to: "new",
    };
    assert!(matches!(
        rename.transform_definition(&document.definitions[0]),
        Cow::Borrowed(_),
    ));
    assert!(matches!(
        rename.transform_definition(&document.definitions[1]),
        Cow::Owned(_),
    ));
}

/// Replaces variables with `null` by overriding a category method.
struct InlineNulls;

impl<'a> Transformer<'a> for InlineNulls {
    fn transform_value(&mut self, node: &'a Value) -> Cow<'a, Value> {
        match node {
            Value::Variable(variable) => Cow::Owned(Value::Null(NullValue {
                origin: variable.origin.clone(),
            })),
            _ => transform_children::value(self, node),
        }
    }
}

/// Verifies that category overrides apply at every depth.
#[test]
fn category_override_rewrites_nested_values() {
    let document = parse("{ a(x: $v, y: [1, $w], z: {k: $u}) }");
    let transformed = InlineNulls.transform_document(&document).into_owned();
    assert!(transformed.equals_ast(&parse("{ a(x: null, y: [1, null], z: {k: null}) }"), false));
}

/// Doubles every integer.
struct DoubleInts;

impl<'a> Transformer<'a> for DoubleInts {
    fn transform_int_value(&mut self, node: &'a IntValue) -> Cow<'a, IntValue> {
        Cow::Owned(IntValue {
            origin: node.origin.clone(),
            value: node.value * 2,
        })
    }
}

/// Verifies that leaf overrides reach values in every position.
#[test]
fn leaf_override_reaches_defaults_and_directives() {
    let document = parse(
        "query Q($v: Int = 1) @d(n: 2) { a(x: [3]) } type T { f(a: Int = 4): Int }",
    );
    let transformed = DoubleInts.transform_document(&document).into_owned();
    let expected = parse(
        "query Q($v: Int = 2) @d(n: 4) { a(x: [6]) } type T { f(a: Int = 8): Int }",
    );
    assert!(transformed.equals_ast(&expected, false));
}
