use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

/// An enum literal, e.g. `RED`. Never `true`, `false` or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub origin: Option<Origin>,
    pub value: String,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::EnumValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for EnumValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
    }
}

impl EnumValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::Enum
    }
}
