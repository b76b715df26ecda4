use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

/// An integer literal. GraphQL `Int` is a signed 32-bit integer.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub origin: Option<Origin>,
    pub value: i32,
}

#[inherent]
impl AstNode for IntValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::IntValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for IntValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
    }
}

impl IntValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::Int
    }
}
