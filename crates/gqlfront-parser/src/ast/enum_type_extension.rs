use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::Origin;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension {
    pub origin: Option<Origin>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
}

#[inherent]
impl AstNode for EnumTypeExtension {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::EnumTypeExtension(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        children.push(self.name.as_node_ref());
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.extend(self.values.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for EnumTypeExtension {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.values.equals_ast(&other.values, including_origin)
    }
}
