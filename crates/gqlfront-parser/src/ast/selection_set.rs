use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::Selection;
use crate::Origin;
use inherent::inherent;

/// A `{ ... }` block of selections.
///
/// Always contains at least one selection when produced by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub origin: Option<Origin>,
    pub selections: Vec<Selection>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::SelectionSet(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.extend(self.selections.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for SelectionSet {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.selections.equals_ast(&other.selections, including_origin)
    }
}
