use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::SelectionSet;
use crate::Origin;
use inherent::inherent;

/// A field selection, optionally aliased:
///
/// ```text
/// alias: name(arguments) @directives { selection_set }
/// ```
///
/// Children are visited in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub origin: Option<Origin>,
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
}

#[inherent]
impl AstNode for FieldSelection {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::FieldSelection(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(alias) = &self.alias {
            children.push(alias.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.extend(self.arguments.iter().map(|node| node.as_node_ref()));
        children.extend(self.directives.iter().map(|node| node.as_node_ref()));
        if let Some(selection_set) = &self.selection_set {
            children.push(selection_set.as_node_ref());
        }
        children
    }
}

#[inherent]
impl EqualsAst for FieldSelection {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.alias.equals_ast(&other.alias, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.arguments.equals_ast(&other.arguments, including_origin)
            && self.directives.equals_ast(&other.directives, including_origin)
            && self.selection_set.equals_ast(&other.selection_set, including_origin)
    }
}

impl FieldSelection {
    /// The key this field's result is stored under: the alias when there
    /// is one, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}
