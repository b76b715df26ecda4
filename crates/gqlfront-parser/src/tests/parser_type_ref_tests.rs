//! Tests for type references and the non-null invariant.

use crate::SyntaxErrorKind;
use crate::TypeRefError;
use crate::ast::AstNode;
use crate::ast::NonNullTypeRef;
use crate::ast::NullableTypeRef;
use crate::ast::TypeRef;
use crate::parse_type_ref;

/// Verifies that type references print back as written.
#[test]
fn display_matches_source() {
    for source in ["String", "String!", "[String]", "[String!]!", "[[Int]!]", "[[ID!]!]!"] {
        assert_eq!(parse_type_ref(source).unwrap().to_string(), source);
    }
}

/// Verifies the structure of `[String!]!`.
#[test]
fn nested_structure() {
    let TypeRef::NonNull(outer) = parse_type_ref("[String!]!").unwrap() else {
        panic!("expected non-null");
    };
    let NullableTypeRef::List(list) = &outer.nullable_type else {
        panic!("expected a list inside non-null");
    };
    let TypeRef::NonNull(inner) = list.element_type.as_ref() else {
        panic!("expected non-null element");
    };
    let NullableTypeRef::Named(named) = &inner.nullable_type else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.as_str(), "String");
}

/// Verifies `named_type()` digs through wrappers.
#[test]
fn named_type() {
    let type_ref = parse_type_ref("[[Episode!]]!").unwrap();
    assert_eq!(type_ref.named_type().name.as_str(), "Episode");
    assert!(type_ref.is_non_null());
    assert!(!parse_type_ref("[Int!]").unwrap().is_non_null());
}

/// Verifies that `T!!` is rejected at the second `!`.
#[test]
fn double_bang_rejected() {
    let error = parse_type_ref("String!!").unwrap_err();
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::UnexpectedToken { found, .. } if found == "!",
    ));
    assert_eq!(error.origin().byte_range(), 7..8);
}

/// Verifies that `T!!` in a variable definition is a syntax error.
#[test]
fn double_bang_in_variable_rejected() {
    let error = crate::parse_document("query ($a: Int!!) { f }").unwrap_err();
    assert_eq!(error.origin().text(), "!");
}

/// Verifies that `NonNullTypeRef::try_new` refuses to wrap a non-null type.
#[test]
fn try_new_rejects_nested_non_null() {
    let non_null = parse_type_ref("Int!").unwrap();
    let error = NonNullTypeRef::try_new(non_null, None).unwrap_err();
    assert_eq!(
        error,
        TypeRefError::NestedNonNull {
            inner: "Int!".to_string(),
        },
    );

    let named = parse_type_ref("Int").unwrap();
    let wrapped = NonNullTypeRef::try_new(named, None).unwrap();
    assert_eq!(TypeRef::NonNull(wrapped).to_string(), "Int!");
}

/// Verifies the origins of each layer of a wrapped type.
#[test]
fn layer_origins() {
    let type_ref = parse_type_ref("[Int]!").unwrap();
    assert_eq!(type_ref.origin().unwrap().byte_range(), 0..6);
    let TypeRef::NonNull(non_null) = &type_ref else {
        panic!("expected non-null");
    };
    let NullableTypeRef::List(list) = &non_null.nullable_type else {
        panic!("expected a list");
    };
    assert_eq!(list.origin.as_ref().unwrap().byte_range(), 0..5);
    assert_eq!(list.element_type.origin().unwrap().byte_range(), 1..4);
}

/// Verifies unclosed list types.
#[test]
fn unclosed_list() {
    let error = parse_type_ref("[Int").unwrap_err();
    assert!(matches!(error.kind(), SyntaxErrorKind::UnexpectedEof { .. }));
    assert_eq!(error.message(), "Expected `]`, found end of input");
}

/// Verifies that list types nest up to the limit and no deeper.
#[test]
fn list_nesting_limit() {
    let list_type = |depth: usize| format!("{}String{}", "[".repeat(depth), "]".repeat(depth));

    let error = parse_type_ref(list_type(crate::MAX_RECURSION_DEPTH + 1)).unwrap_err();
    assert_eq!(error.kind(), &SyntaxErrorKind::NestingTooDeep);

    let type_ref = parse_type_ref(list_type(crate::MAX_RECURSION_DEPTH)).unwrap();
    assert_eq!(type_ref.to_string(), list_type(crate::MAX_RECURSION_DEPTH));
}
