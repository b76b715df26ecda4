use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

/// A directive applied to a node, e.g. `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub origin: Option<Origin>,
    pub name: Name,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for Directive {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Directive(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children.extend(self.arguments.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for Directive {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.arguments.equals_ast(&other.arguments, including_origin)
    }
}
