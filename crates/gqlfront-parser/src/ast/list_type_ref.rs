use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::TypeRef;
use crate::Origin;
use inherent::inherent;

/// A list type reference, e.g. `[String]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeRef {
    pub origin: Option<Origin>,
    pub element_type: Box<TypeRef>,
}

#[inherent]
impl AstNode for ListTypeRef {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::ListTypeRef(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.element_type.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for ListTypeRef {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.element_type.equals_ast(&other.element_type, including_origin)
    }
}
