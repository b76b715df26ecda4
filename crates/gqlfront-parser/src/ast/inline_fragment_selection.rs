use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::NamedTypeRef;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::SelectionSet;
use crate::Origin;
use inherent::inherent;

/// An inline fragment: `... on Type @directives { ... }`. The type
/// condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub origin: Option<Origin>,
    pub type_condition: Option<NamedTypeRef>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for InlineFragmentSelection {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::InlineFragmentSelection(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(type_condition) = &self.type_condition {
            children.push(type_condition.as_node_ref());
        }
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.push(self.selection_set.as_node_ref());
        children
    }
}

#[inherent]
impl EqualsAst for InlineFragmentSelection {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.type_condition.equals_ast(&other.type_condition, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.selection_set.equals_ast(&other.selection_set, including_origin)
    }
}
