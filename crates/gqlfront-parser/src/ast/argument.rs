use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::Value;
use crate::Origin;
use inherent::inherent;

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub origin: Option<Origin>,
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Argument(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children.push(self.value.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for Argument {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.value.equals_ast(&other.value, including_origin)
    }
}
