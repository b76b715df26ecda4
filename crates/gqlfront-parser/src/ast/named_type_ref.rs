use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

/// A type referenced by name, e.g. `String`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeRef {
    pub origin: Option<Origin>,
    pub name: Name,
}

#[inherent]
impl AstNode for NamedTypeRef {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::NamedTypeRef(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for NamedTypeRef {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
    }
}
