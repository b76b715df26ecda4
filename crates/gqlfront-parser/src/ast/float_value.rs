use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

/// A float literal. Always finite.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub origin: Option<Origin>,
    pub value: f64,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::FloatValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for FloatValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
    }
}

impl FloatValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::Float
    }
}
