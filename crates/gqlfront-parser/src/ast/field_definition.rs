use crate::ast::ArgumentDefinition;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::StringValue;
use crate::ast::TypeRef;
use crate::Origin;
use inherent::inherent;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<ArgumentDefinition>,
    pub type_ref: TypeRef,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::FieldDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.extend(self.arguments.iter().map(|node| node.as_node_ref()));
        children.push(self.type_ref.as_node_ref());
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for FieldDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.arguments.equals_ast(&other.arguments, including_origin)
            && self.type_ref.equals_ast(&other.type_ref, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
    }
}
