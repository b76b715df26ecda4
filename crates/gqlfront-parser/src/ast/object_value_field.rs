use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::Value;
use crate::Origin;
use inherent::inherent;

/// One `name: value` entry of an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValueField {
    pub origin: Option<Origin>,
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for ObjectValueField {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::ObjectValueField(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children.push(self.value.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for ObjectValueField {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.value.equals_ast(&other.value, including_origin)
    }
}
