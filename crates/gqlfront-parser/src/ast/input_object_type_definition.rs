use crate::ast::ArgumentDefinition;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::StringValue;
use crate::Origin;
use inherent::inherent;

/// An input object type. Its fields are input values, so they share
/// [`ArgumentDefinition`](crate::ast::ArgumentDefinition) with field and
/// directive arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<ArgumentDefinition>,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::InputObjectTypeDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children.extend(self.fields.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for InputObjectTypeDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.fields.equals_ast(&other.fields, including_origin)
    }
}
