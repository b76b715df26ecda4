use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::ListTypeRef;
use crate::ast::NamedTypeRef;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::TypeRef;
use crate::Origin;
use inherent::inherent;

/// The type wrapped by a [`NonNullTypeRef`](crate::ast::NonNullTypeRef):
/// anything but another non-null type.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableTypeRef {
    Named(NamedTypeRef),
    List(ListTypeRef),
}

#[inherent]
impl AstNode for NullableTypeRef {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            NullableTypeRef::Named(node) => node.origin(),
            NullableTypeRef::List(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            NullableTypeRef::Named(node) => node.as_node_ref(),
            NullableTypeRef::List(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            NullableTypeRef::Named(node) => node.children(),
            NullableTypeRef::List(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for NullableTypeRef {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (NullableTypeRef::Named(a), NullableTypeRef::Named(b)) => {
                a.equals_ast(b, including_origin)
            },
            (NullableTypeRef::List(a), NullableTypeRef::List(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl From<NullableTypeRef> for TypeRef {
    fn from(nullable: NullableTypeRef) -> Self {
        match nullable {
            NullableTypeRef::Named(named) => TypeRef::Named(named),
            NullableTypeRef::List(list) => TypeRef::List(list),
        }
    }
}

impl From<NamedTypeRef> for NullableTypeRef {
    fn from(node: NamedTypeRef) -> Self {
        NullableTypeRef::Named(node)
    }
}

impl From<ListTypeRef> for NullableTypeRef {
    fn from(node: ListTypeRef) -> Self {
        NullableTypeRef::List(node)
    }
}
