use crate::Origin;
use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::EqualsAst;
use crate::ast::FragmentDefinition;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::OperationDefinition;
use indexmap::IndexMap;
use inherent::inherent;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document.
///
/// A document may mix executable definitions (operations and fragments)
/// with type system definitions and extensions. Deciding which kinds are
/// acceptable is left to consumers; the filtering helpers below cover the
/// common cases.
///
/// The origin of a parsed document starts at the beginning of the source
/// and ends after its last definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub origin: Option<Origin>,
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Fragment definitions keyed by name, in document order.
    ///
    /// If a name is defined more than once the first definition wins;
    /// reporting duplicates is a validation concern.
    pub fn fragments_by_name(&self) -> IndexMap<&str, &FragmentDefinition> {
        let mut fragments = IndexMap::new();
        for fragment in self.fragments() {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        fragments
    }

    /// Finds an operation by name. `None` finds the sole anonymous
    /// operation, if any.
    pub fn operation_by_name(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        self.operations().find(|operation| {
            operation.name.as_ref().map(|op_name| op_name.as_str()) == name
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        })
    }

    /// Iterate over only the executable definitions.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|definition| definition.is_executable())
    }

    /// Iterate over only the type system definitions and extensions.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions
            .iter()
            .filter(|definition| !definition.is_executable())
    }
}

#[inherent]
impl AstNode for Document {
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Document(self)
    }

    pub fn children(&self) -> NodeChildren<'_> {
        self.definitions
            .iter()
            .map(|definition| definition.as_node_ref())
            .collect()
    }
}

#[inherent]
impl EqualsAst for Document {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        (!including_origin || self.origin == other.origin)
            && self.definitions.equals_ast(&other.definitions, including_origin)
    }
}
