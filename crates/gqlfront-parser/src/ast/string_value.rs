use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

/// A string literal with escapes processed (or, for block strings,
/// indentation removed).
///
/// Also used for descriptions.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub origin: Option<Origin>,
    pub value: String,
    pub is_block: bool,
}

#[inherent]
impl AstNode for StringValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::StringValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for StringValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
            && self.is_block == other.is_block
    }
}

impl StringValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::String
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
