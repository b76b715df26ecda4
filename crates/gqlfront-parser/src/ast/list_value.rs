use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::Value;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub origin: Option<Origin>,
    pub values: Vec<Value>,
}

#[inherent]
impl AstNode for ListValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::ListValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.extend(self.values.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for ListValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.values.equals_ast(&other.values, including_origin)
    }
}

impl ListValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::List
    }
}
