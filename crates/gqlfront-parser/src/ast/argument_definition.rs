use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::StringValue;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::Origin;
use inherent::inherent;

/// An input value definition: a field argument, a directive argument or
/// an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub name: Name,
    pub type_ref: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for ArgumentDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::ArgumentDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.push(self.type_ref.as_node_ref());
        if let Some(default_value) = &self.default_value {
            children.push(default_value.as_node_ref());
        }
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for ArgumentDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.type_ref.equals_ast(&other.type_ref, including_origin)
            && self.default_value.equals_ast(&other.default_value, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
    }
}
