use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

/// A named fragment spread: `...FragmentName @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSelection {
    pub origin: Option<Origin>,
    pub name: Name,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for FragmentSelection {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::FragmentSelection(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for FragmentSelection {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
    }
}
