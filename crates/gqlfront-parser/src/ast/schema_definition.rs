use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::OperationTypeDefinition;
use crate::ast::StringValue;
use crate::Origin;
use inherent::inherent;

/// A `schema { query: Query ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::SchemaDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.extend(self.operation_types.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for SchemaDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.operation_types.equals_ast(&other.operation_types, including_origin)
    }
}
