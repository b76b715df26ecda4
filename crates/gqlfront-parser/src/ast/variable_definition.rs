use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::Origin;
use inherent::inherent;

/// A variable declared by an operation: `$name: Type = default @directives`.
///
/// `name` does not include the `$`; its origin covers the name only,
/// while this node's origin starts at the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub origin: Option<Origin>,
    pub name: Name,
    pub type_ref: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::VariableDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
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
impl EqualsAst for VariableDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.type_ref.equals_ast(&other.type_ref, including_origin)
            && self.default_value.equals_ast(&other.default_value, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
    }
}
