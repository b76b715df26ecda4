use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NamedTypeRef;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::OperationKind;
use crate::Origin;
use inherent::inherent;

/// One `operation: Type` entry of a schema definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub origin: Option<Origin>,
    pub operation: OperationKind,
    pub type_ref: NamedTypeRef,
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::OperationTypeDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.type_ref.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for OperationTypeDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.operation == other.operation
            && self.type_ref.equals_ast(&other.type_ref, including_origin)
    }
}
