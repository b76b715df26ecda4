use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumTypeDefinition;
use crate::ast::EqualsAst;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::StringValue;
use crate::ast::UnionTypeDefinition;
use crate::Origin;
use inherent::inherent;

/// A named type definition.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            TypeDefinition::Scalar(node) => node.origin(),
            TypeDefinition::Object(node) => node.origin(),
            TypeDefinition::Interface(node) => node.origin(),
            TypeDefinition::Union(node) => node.origin(),
            TypeDefinition::Enum(node) => node.origin(),
            TypeDefinition::InputObject(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            TypeDefinition::Scalar(node) => node.as_node_ref(),
            TypeDefinition::Object(node) => node.as_node_ref(),
            TypeDefinition::Interface(node) => node.as_node_ref(),
            TypeDefinition::Union(node) => node.as_node_ref(),
            TypeDefinition::Enum(node) => node.as_node_ref(),
            TypeDefinition::InputObject(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            TypeDefinition::Scalar(node) => node.children(),
            TypeDefinition::Object(node) => node.children(),
            TypeDefinition::Interface(node) => node.children(),
            TypeDefinition::Union(node) => node.children(),
            TypeDefinition::Enum(node) => node.children(),
            TypeDefinition::InputObject(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for TypeDefinition {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (TypeDefinition::Scalar(a), TypeDefinition::Scalar(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeDefinition::Object(a), TypeDefinition::Object(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeDefinition::Interface(a), TypeDefinition::Interface(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeDefinition::Union(a), TypeDefinition::Union(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeDefinition::Enum(a), TypeDefinition::Enum(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeDefinition::InputObject(a), TypeDefinition::InputObject(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(node) => &node.name,
            TypeDefinition::Object(node) => &node.name,
            TypeDefinition::Interface(node) => &node.name,
            TypeDefinition::Union(node) => &node.name,
            TypeDefinition::Enum(node) => &node.name,
            TypeDefinition::InputObject(node) => &node.name,
        }
    }

    pub fn description(&self) -> Option<&StringValue> {
        match self {
            TypeDefinition::Scalar(node) => node.description.as_ref(),
            TypeDefinition::Object(node) => node.description.as_ref(),
            TypeDefinition::Interface(node) => node.description.as_ref(),
            TypeDefinition::Union(node) => node.description.as_ref(),
            TypeDefinition::Enum(node) => node.description.as_ref(),
            TypeDefinition::InputObject(node) => node.description.as_ref(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            TypeDefinition::Scalar(node) => &node.directives,
            TypeDefinition::Object(node) => &node.directives,
            TypeDefinition::Interface(node) => &node.directives,
            TypeDefinition::Union(node) => &node.directives,
            TypeDefinition::Enum(node) => &node.directives,
            TypeDefinition::InputObject(node) => &node.directives,
        }
    }

    /// The output fields of object and interface types; empty for every
    /// other kind.
    pub fn fields(&self) -> &[FieldDefinition] {
        match self {
            TypeDefinition::Object(node) => &node.fields,
            TypeDefinition::Interface(node) => &node.fields,
            TypeDefinition::Scalar(_)
            | TypeDefinition::Union(_)
            | TypeDefinition::Enum(_)
            | TypeDefinition::InputObject(_) => &[],
        }
    }

    /// Scalars and enums are leaf types: they have no selectable fields.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TypeDefinition::Scalar(_) | TypeDefinition::Enum(_))
    }
}

impl From<ScalarTypeDefinition> for TypeDefinition {
    fn from(node: ScalarTypeDefinition) -> Self {
        TypeDefinition::Scalar(node)
    }
}

impl From<ObjectTypeDefinition> for TypeDefinition {
    fn from(node: ObjectTypeDefinition) -> Self {
        TypeDefinition::Object(node)
    }
}

impl From<InterfaceTypeDefinition> for TypeDefinition {
    fn from(node: InterfaceTypeDefinition) -> Self {
        TypeDefinition::Interface(node)
    }
}

impl From<UnionTypeDefinition> for TypeDefinition {
    fn from(node: UnionTypeDefinition) -> Self {
        TypeDefinition::Union(node)
    }
}

impl From<EnumTypeDefinition> for TypeDefinition {
    fn from(node: EnumTypeDefinition) -> Self {
        TypeDefinition::Enum(node)
    }
}

impl From<InputObjectTypeDefinition> for TypeDefinition {
    fn from(node: InputObjectTypeDefinition) -> Self {
        TypeDefinition::InputObject(node)
    }
}
