use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumTypeExtension;
use crate::ast::EqualsAst;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InterfaceTypeExtension;
use crate::ast::Name;
use crate::ast::NodeChildren;
use crate::ast::NodeRef;
use crate::ast::ObjectTypeExtension;
use crate::ast::ScalarTypeExtension;
use crate::ast::UnionTypeExtension;
use crate::Origin;
use inherent::inherent;

/// An `extend <kind> Name ...` type extension.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension {
    Scalar(ScalarTypeExtension),
    Object(ObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Union(UnionTypeExtension),
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
}

#[inherent]
impl AstNode for TypeExtension {
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            TypeExtension::Scalar(node) => node.origin(),
            TypeExtension::Object(node) => node.origin(),
            TypeExtension::Interface(node) => node.origin(),
            TypeExtension::Union(node) => node.origin(),
            TypeExtension::Enum(node) => node.origin(),
            TypeExtension::InputObject(node) => node.origin(),
        }
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            TypeExtension::Scalar(node) => node.as_node_ref(),
            TypeExtension::Object(node) => node.as_node_ref(),
            TypeExtension::Interface(node) => node.as_node_ref(),
            TypeExtension::Union(node) => node.as_node_ref(),
            TypeExtension::Enum(node) => node.as_node_ref(),
            TypeExtension::InputObject(node) => node.as_node_ref(),
        }
    }

    pub fn children(&self) -> NodeChildren<'_> {
        match self {
            TypeExtension::Scalar(node) => node.children(),
            TypeExtension::Object(node) => node.children(),
            TypeExtension::Interface(node) => node.children(),
            TypeExtension::Union(node) => node.children(),
            TypeExtension::Enum(node) => node.children(),
            TypeExtension::InputObject(node) => node.children(),
        }
    }
}

#[inherent]
impl EqualsAst for TypeExtension {
    pub fn equals_ast(&self, other: &Self, including_origin: bool) -> bool {
        match (self, other) {
            (TypeExtension::Scalar(a), TypeExtension::Scalar(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeExtension::Object(a), TypeExtension::Object(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeExtension::Interface(a), TypeExtension::Interface(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeExtension::Union(a), TypeExtension::Union(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeExtension::Enum(a), TypeExtension::Enum(b)) => {
                a.equals_ast(b, including_origin)
            },
            (TypeExtension::InputObject(a), TypeExtension::InputObject(b)) => {
                a.equals_ast(b, including_origin)
            },
            _ => false,
        }
    }
}

impl TypeExtension {
    /// The name of the extended type.
    pub fn name(&self) -> &Name {
        match self {
            TypeExtension::Scalar(node) => &node.name,
            TypeExtension::Object(node) => &node.name,
            TypeExtension::Interface(node) => &node.name,
            TypeExtension::Union(node) => &node.name,
            TypeExtension::Enum(node) => &node.name,
            TypeExtension::InputObject(node) => &node.name,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            TypeExtension::Scalar(node) => &node.directives,
            TypeExtension::Object(node) => &node.directives,
            TypeExtension::Interface(node) => &node.directives,
            TypeExtension::Union(node) => &node.directives,
            TypeExtension::Enum(node) => &node.directives,
            TypeExtension::InputObject(node) => &node.directives,
        }
    }

    /// Output fields added by an object or interface extension.
    pub fn fields(&self) -> &[FieldDefinition] {
        match self {
            TypeExtension::Object(node) => &node.fields,
            TypeExtension::Interface(node) => &node.fields,
            TypeExtension::Scalar(_)
            | TypeExtension::Union(_)
            | TypeExtension::Enum(_)
            | TypeExtension::InputObject(_) => &[],
        }
    }
}

impl From<ScalarTypeExtension> for TypeExtension {
    fn from(node: ScalarTypeExtension) -> Self {
        TypeExtension::Scalar(node)
    }
}

impl From<ObjectTypeExtension> for TypeExtension {
    fn from(node: ObjectTypeExtension) -> Self {
        TypeExtension::Object(node)
    }
}

impl From<InterfaceTypeExtension> for TypeExtension {
    fn from(node: InterfaceTypeExtension) -> Self {
        TypeExtension::Interface(node)
    }
}

impl From<UnionTypeExtension> for TypeExtension {
    fn from(node: UnionTypeExtension) -> Self {
        TypeExtension::Union(node)
    }
}

impl From<EnumTypeExtension> for TypeExtension {
    fn from(node: EnumTypeExtension) -> Self {
        TypeExtension::Enum(node)
    }
}

impl From<InputObjectTypeExtension> for TypeExtension {
    fn from(node: InputObjectTypeExtension) -> Self {
        TypeExtension::InputObject(node)
    }
}
