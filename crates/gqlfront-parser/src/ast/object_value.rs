use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ObjectValueField;
use crate::ast::ValueType;
use crate::Origin;
use inherent::inherent;

/// An input object literal: `{ name: value, ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub origin: Option<Origin>,
    pub fields: Vec<ObjectValueField>,
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::ObjectValue(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.extend(self.fields.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for ObjectValue {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.fields.equals_ast(&other.fields, including_origin)
    }
}

impl ObjectValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::Object
    }
}
