use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::ListTypeRef;
use crate::ast::NamedTypeRef;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::NonNullTypeRef;
use crate::ast::NullableTypeRef;
use crate::Origin;
use inherent::inherent;
use std::fmt;

/// A type reference as written in source, e.g. `[String!]!`.
///
/// Type references are unresolved: they name types but do not point at
/// their definitions. `NonNull` can only wrap a
/// [`NullableTypeRef`](crate::ast::NullableTypeRef), so `T!!` cannot be
/// represented.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    Named(NamedTypeRef),
    List(ListTypeRef),
    NonNull(NonNullTypeRef),
}

#[inherent]
impl AstNode for TypeRef {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            TypeRef::Named(node) => node.origin(),
            TypeRef::List(node) => node.origin(),
            TypeRef::NonNull(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            TypeRef::Named(node) => node.as_node_ref(),
            TypeRef::List(node) => node.as_node_ref(),
            TypeRef::NonNull(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            TypeRef::Named(node) => node.children(),
            TypeRef::List(node) => node.children(),
            TypeRef::NonNull(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for TypeRef {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (TypeRef::Named(a), TypeRef::Named(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeRef::List(a), TypeRef::List(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeRef::NonNull(a), TypeRef::NonNull(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl TypeRef {
    /// The named type at the core of this reference (`String` for
    /// `[String!]!`).
    pub fn named_type(&self) -> &NamedTypeRef {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::List(list) => list.element_type.named_type(),
            TypeRef::NonNull(non_null) => match &non_null.nullable_type {
                NullableTypeRef::Named(named) => named,
                NullableTypeRef::List(list) => list.element_type.named_type(),
            },
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(named) => f.write_str(named.name.as_str()),
            TypeRef::List(list) => write!(f, "[{}]", list.element_type),
            TypeRef::NonNull(non_null) => match &non_null.nullable_type {
                NullableTypeRef::Named(named) => write!(f, "{}!", named.name.as_str()),
                NullableTypeRef::List(list) => write!(f, "[{}]!", list.element_type),
            },
        }
    }
}

impl From<NamedTypeRef> for TypeRef {
    fn from(node: NamedTypeRef) -> Self {
        TypeRef::Named(node)
    }
}

impl From<ListTypeRef> for TypeRef {
    fn from(node: ListTypeRef) -> Self {
        TypeRef::List(node)
    }
}

impl From<NonNullTypeRef> for TypeRef {
    fn from(node: NonNullTypeRef) -> Self {
        TypeRef::NonNull(node)
    }
}
