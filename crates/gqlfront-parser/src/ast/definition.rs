use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EqualsAst;
use crate::ast::FragmentDefinition;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::Origin;
use inherent::inherent;

/// A top-level definition in a [`Document`](crate::ast::Document).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    SchemaExtension(SchemaExtension),
    Type(TypeDefinition),
    TypeExtension(TypeExtension),
    Directive(DirectiveDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            Definition::Operation(node) => node.origin(),
            Definition::Fragment(node) => node.origin(),
            Definition::Schema(node) => node.origin(),
            Definition::SchemaExtension(node) => node.origin(),
            Definition::Type(node) => node.origin(),
            Definition::TypeExtension(node) => node.origin(),
            Definition::Directive(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Definition::Operation(node) => node.as_node_ref(),
            Definition::Fragment(node) => node.as_node_ref(),
            Definition::Schema(node) => node.as_node_ref(),
            Definition::SchemaExtension(node) => node.as_node_ref(),
            Definition::Type(node) => node.as_node_ref(),
            Definition::TypeExtension(node) => node.as_node_ref(),
            Definition::Directive(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            Definition::Operation(node) => node.children(),
            Definition::Fragment(node) => node.children(),
            Definition::Schema(node) => node.children(),
            Definition::SchemaExtension(node) => node.children(),
            Definition::Type(node) => node.children(),
            Definition::TypeExtension(node) => node.children(),
            Definition::Directive(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for Definition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (Definition::Operation(a), Definition::Operation(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::Fragment(a), Definition::Fragment(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::Schema(a), Definition::Schema(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::SchemaExtension(a), Definition::SchemaExtension(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::Type(a), Definition::Type(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::TypeExtension(a), Definition::TypeExtension(b)) => {
                a.equals_ast(b, including_origin)
            },
            (Definition::Directive(a), Definition::Directive(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl Definition {
    /// `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }

    /// `true` for schema, type and directive definitions.
    pub fn is_type_system_definition(&self) -> bool {
        matches!(
            self,
            Definition::Schema(_) | Definition::Type(_) | Definition::Directive(_)
        )
    }

    /// `true` for schema and type extensions.
    pub fn is_type_system_extension(&self) -> bool {
        matches!(self, Definition::SchemaExtension(_) | Definition::TypeExtension(_))
    }
}

impl From<OperationDefinition> for Definition {
    fn from(node: OperationDefinition) -> Self {
        Definition::Operation(node)
    }
}

impl From<FragmentDefinition> for Definition {
    fn from(node: FragmentDefinition) -> Self {
        Definition::Fragment(node)
    }
}

impl From<SchemaDefinition> for Definition {
    fn from(node: SchemaDefinition) -> Self {
        Definition::Schema(node)
    }
}

impl From<SchemaExtension> for Definition {
    fn from(node: SchemaExtension) -> Self {
        Definition::SchemaExtension(node)
    }
}

impl From<TypeDefinition> for Definition {
    fn from(node: TypeDefinition) -> Self {
        Definition::Type(node)
    }
}

impl From<TypeExtension> for Definition {
    fn from(node: TypeExtension) -> Self {
        Definition::TypeExtension(node)
    }
}

impl From<DirectiveDefinition> for Definition {
    fn from(node: DirectiveDefinition) -> Self {
        Definition::Directive(node)
    }
}
