use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NamedTypeRef;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::StringValue;
use crate::Origin;
use inherent::inherent;

/// An interface type. Interfaces may themselves implement interfaces.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedTypeRef>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::InterfaceTypeDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.extend(self.interfaces.iter().map(|node| node.as_node_ref()));
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.extend(self.fields.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for InterfaceTypeDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.interfaces.equals_ast(&other.interfaces, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.fields.equals_ast(&other.fields, including_origin)
    }
}
