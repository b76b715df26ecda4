use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub origin: Option<Origin>,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::BooleanValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for BooleanValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
    }
}

impl BooleanValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::Boolean
    }
}
