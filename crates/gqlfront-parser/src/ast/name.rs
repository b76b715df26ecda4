use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

/// A GraphQL name: a type, field, argument, directive or enum value
/// identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub origin: Option<Origin>,
    pub value: String,
}

#[inherent]
impl AstNode for Name {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Name(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        NodeChildren::new()
    }
}

#[inherent]
impl EqualsAst for Name {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.value == other.value
    }
}

impl Name {
    /// Creates a name with no origin, for synthesized trees.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            origin: None,
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
