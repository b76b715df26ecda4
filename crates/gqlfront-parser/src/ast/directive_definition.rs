use crate::ast::ArgumentDefinition;
use crate::ast::AstNode;
use crate::ast::DirectiveLocation;
use crate::ast::EqualsAst;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::StringValue;
use crate::Origin;
use inherent::inherent;

/// A directive definition:
///
/// ```text
/// "description" directive @name(arguments) repeatable on LOCATION | LOCATION
/// ```
///
/// The parser only accepts known location names; see
/// [`DirectiveLocation`](crate::ast::DirectiveLocation).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub origin: Option<Origin>,
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<ArgumentDefinition>,
    pub is_repeatable: bool,
    pub locations: Vec<Name>,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::DirectiveDefinition(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        let mut children = NodeChildren::new();
        if let Some(description) = &self.description {
            children.push(description.as_node_ref());
        }
        children.push(self.name.as_node_ref());
        children.extend(self.arguments.iter().map(|node| node.as_node_ref()));
        children.extend(self.locations.iter().map(|node| node.as_node_ref()));
        children
    }
}

#[inherent]
impl EqualsAst for DirectiveDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.description.equals_ast(&other.description, including_origin)
            && self.name.equals_ast(&other.name, including_origin)
            && self.arguments.equals_ast(&other.arguments, including_origin)
            && self.is_repeatable == other.is_repeatable
            && self.locations.equals_ast(&other.locations, including_origin)
    }
}

impl DirectiveDefinition {
    /// The declared locations as [`DirectiveLocation`]s, skipping any name
    /// that is not a known location (only possible in synthesized trees).
    pub fn directive_locations(&self) -> impl Iterator<Item = DirectiveLocation> + '_ {
        self.locations
            .iter()
            .filter_map(|location| DirectiveLocation::from_name(location.as_str()))
    }
}
