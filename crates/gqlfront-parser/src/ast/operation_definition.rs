use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::Origin;
use inherent::inherent;

/// A query, mutation or subscription.
///
/// The anonymous query shorthand (`{ ... }`) is represented as an
/// unnamed [`OperationKind::Query`] with no variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub origin: Option<Origin>,
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::OperationDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(name) = &self.name {
            children.push(name.as_node_ref());
        }
        children.extend(self.variable_definitions.iter().map(|node| node.as_node_ref()));
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.push(self.selection_set.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for OperationDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.kind == other.kind
            && self.name.equals_ast(&other.name, including_origin)
            && self.variable_definitions.equals_ast(&other.variable_definitions, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.selection_set.equals_ast(&other.selection_set, including_origin)
    }
}
