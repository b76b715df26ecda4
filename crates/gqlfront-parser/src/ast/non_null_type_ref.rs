use crate::Origin;
use crate::TypeRefError;
use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::NullableTypeRef;
use crate::ast::TypeRef;
use inherent::inherent;

/// A non-null type reference, e.g. `String!` or `[Int]!`.
///
/// The wrapped type is a [`NullableTypeRef`], which makes `T!!`
/// unrepresentable. Code holding an arbitrary [`TypeRef`] goes through
/// [`NonNullTypeRef::try_new`], which rejects a non-null inner type.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullTypeRef {
    pub origin: Option<Origin>,
    pub nullable_type: NullableTypeRef,
}

impl NonNullTypeRef {
    pub fn new(nullable_type: NullableTypeRef, origin: Option<Origin>) -> Self {
        Self { origin, nullable_type }
    }

    /// Wraps `type_ref` in a non-null type.
    ///
    /// Fails with [`TypeRefError::NestedNonNull`] if `type_ref` is already
    /// non-null.
    pub fn try_new(type_ref: TypeRef, origin: Option<Origin>) -> Result<Self, TypeRefError> {
        let nullable_type = match type_ref {
            TypeRef::Named(named) => NullableTypeRef::Named(named),
            TypeRef::List(list) => NullableTypeRef::List(list),
            non_null @ TypeRef::NonNull(_) => {
                return Err(TypeRefError::NestedNonNull {
                    inner: non_null.to_string(),
                });
            },
        };
        Ok(Self::new(nullable_type, origin))
    }
}

#[inherent]
impl AstNode for NonNullTypeRef {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::NonNullTypeRef(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.nullable_type.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for NonNullTypeRef {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.nullable_type.equals_ast(&other.nullable_type, including_origin)
    }
}
