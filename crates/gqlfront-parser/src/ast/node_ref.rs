use crate::Origin;
use crate::ast::Argument;
use crate::ast::ArgumentDefinition;
use crate::ast::BooleanValue;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FieldSelection;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSelection;
use crate::ast::InlineFragmentSelection;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListTypeRef;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedTypeRef;
use crate::ast::NonNullTypeRef;
use crate::ast::NullValue;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::ObjectValueField;
use crate::ast::OperationDefinition;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::ast::NodeChildren;

/// A borrowed, copyable handle to any concrete AST node.
///
/// `NodeRef` is how generic code (visitors, walkers, error reporters) deals
/// with "some node" without knowing its kind up front. Category enums such
/// as [`Value`](crate::ast::Value) are never a `NodeRef` themselves; their
/// `as_node_ref()` returns the handle of the concrete node inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeRef<'a> {
    Document(&'a Document),
    OperationDefinition(&'a OperationDefinition),
    FragmentDefinition(&'a FragmentDefinition),
    VariableDefinition(&'a VariableDefinition),
    SelectionSet(&'a SelectionSet),
    FieldSelection(&'a FieldSelection),
    FragmentSelection(&'a FragmentSelection),
    InlineFragmentSelection(&'a InlineFragmentSelection),
    Argument(&'a Argument),
    Directive(&'a Directive),
    BooleanValue(&'a BooleanValue),
    EnumValue(&'a EnumValue),
    FloatValue(&'a FloatValue),
    IntValue(&'a IntValue),
    ListValue(&'a ListValue),
    NullValue(&'a NullValue),
    ObjectValue(&'a ObjectValue),
    ObjectValueField(&'a ObjectValueField),
    StringValue(&'a StringValue),
    VariableValue(&'a VariableValue),
    NamedTypeRef(&'a NamedTypeRef),
    ListTypeRef(&'a ListTypeRef),
    NonNullTypeRef(&'a NonNullTypeRef),
    SchemaDefinition(&'a SchemaDefinition),
    SchemaExtension(&'a SchemaExtension),
    OperationTypeDefinition(&'a OperationTypeDefinition),
    ScalarTypeDefinition(&'a ScalarTypeDefinition),
    ObjectTypeDefinition(&'a ObjectTypeDefinition),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition),
    UnionTypeDefinition(&'a UnionTypeDefinition),
    EnumTypeDefinition(&'a EnumTypeDefinition),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition),
    ScalarTypeExtension(&'a ScalarTypeExtension),
    ObjectTypeExtension(&'a ObjectTypeExtension),
    InterfaceTypeExtension(&'a InterfaceTypeExtension),
    UnionTypeExtension(&'a UnionTypeExtension),
    EnumTypeExtension(&'a EnumTypeExtension),
    InputObjectTypeExtension(&'a InputObjectTypeExtension),
    EnumValueDefinition(&'a EnumValueDefinition),
    DirectiveDefinition(&'a DirectiveDefinition),
    FieldDefinition(&'a FieldDefinition),
    ArgumentDefinition(&'a ArgumentDefinition),
    Name(&'a Name),
}

impl<'a> NodeRef<'a> {
    /// Direct children in grammar order.
    pub fn children(self) -> NodeChildren<'a> {
        match self {
            NodeRef::Document(node) => node.children(),
            NodeRef::OperationDefinition(node) => node.children(),
            NodeRef::FragmentDefinition(node) => node.children(),
            NodeRef::VariableDefinition(node) => node.children(),
            NodeRef::SelectionSet(node) => node.children(),
            NodeRef::FieldSelection(node) => node.children(),
            NodeRef::FragmentSelection(node) => node.children(),
            NodeRef::InlineFragmentSelection(node) => node.children(),
            NodeRef::Argument(node) => node.children(),
            NodeRef::Directive(node) => node.children(),
            NodeRef::BooleanValue(node) => node.children(),
            NodeRef::EnumValue(node) => node.children(),
            NodeRef::FloatValue(node) => node.children(),
            NodeRef::IntValue(node) => node.children(),
            NodeRef::ListValue(node) => node.children(),
            NodeRef::NullValue(node) => node.children(),
            NodeRef::ObjectValue(node) => node.children(),
            NodeRef::ObjectValueField(node) => node.children(),
            NodeRef::StringValue(node) => node.children(),
            NodeRef::VariableValue(node) => node.children(),
            NodeRef::NamedTypeRef(node) => node.children(),
            NodeRef::ListTypeRef(node) => node.children(),
            NodeRef::NonNullTypeRef(node) => node.children(),
            NodeRef::SchemaDefinition(node) => node.children(),
            NodeRef::SchemaExtension(node) => node.children(),
            NodeRef::OperationTypeDefinition(node) => node.children(),
            NodeRef::ScalarTypeDefinition(node) => node.children(),
            NodeRef::ObjectTypeDefinition(node) => node.children(),
            NodeRef::InterfaceTypeDefinition(node) => node.children(),
            NodeRef::UnionTypeDefinition(node) => node.children(),
            NodeRef::EnumTypeDefinition(node) => node.children(),
            NodeRef::InputObjectTypeDefinition(node) => node.children(),
            NodeRef::ScalarTypeExtension(node) => node.children(),
            NodeRef::ObjectTypeExtension(node) => node.children(),
            NodeRef::InterfaceTypeExtension(node) => node.children(),
            NodeRef::UnionTypeExtension(node) => node.children(),
            NodeRef::EnumTypeExtension(node) => node.children(),
            NodeRef::InputObjectTypeExtension(node) => node.children(),
            NodeRef::EnumValueDefinition(node) => node.children(),
            NodeRef::DirectiveDefinition(node) => node.children(),
            NodeRef::FieldDefinition(node) => node.children(),
            NodeRef::ArgumentDefinition(node) => node.children(),
            NodeRef::Name(node) => node.children(),
        }
    }

    pub fn origin(self) -> Option<&'a Origin> {
        match self {
            NodeRef::Document(node) => node.origin(),
            NodeRef::OperationDefinition(node) => node.origin(),
            NodeRef::FragmentDefinition(node) => node.origin(),
            NodeRef::VariableDefinition(node) => node.origin(),
            NodeRef::SelectionSet(node) => node.origin(),
            NodeRef::FieldSelection(node) => node.origin(),
            NodeRef::FragmentSelection(node) => node.origin(),
            NodeRef::InlineFragmentSelection(node) => node.origin(),
            NodeRef::Argument(node) => node.origin(),
            NodeRef::Directive(node) => node.origin(),
            NodeRef::BooleanValue(node) => node.origin(),
            NodeRef::EnumValue(node) => node.origin(),
            NodeRef::FloatValue(node) => node.origin(),
            NodeRef::IntValue(node) => node.origin(),
            NodeRef::ListValue(node) => node.origin(),
            NodeRef::NullValue(node) => node.origin(),
            NodeRef::ObjectValue(node) => node.origin(),
            NodeRef::ObjectValueField(node) => node.origin(),
            NodeRef::StringValue(node) => node.origin(),
            NodeRef::VariableValue(node) => node.origin(),
            NodeRef::NamedTypeRef(node) => node.origin(),
            NodeRef::ListTypeRef(node) => node.origin(),
            NodeRef::NonNullTypeRef(node) => node.origin(),
            NodeRef::SchemaDefinition(node) => node.origin(),
            NodeRef::SchemaExtension(node) => node.origin(),
            NodeRef::OperationTypeDefinition(node) => node.origin(),
            NodeRef::ScalarTypeDefinition(node) => node.origin(),
            NodeRef::ObjectTypeDefinition(node) => node.origin(),
            NodeRef::InterfaceTypeDefinition(node) => node.origin(),
            NodeRef::UnionTypeDefinition(node) => node.origin(),
            NodeRef::EnumTypeDefinition(node) => node.origin(),
            NodeRef::InputObjectTypeDefinition(node) => node.origin(),
            NodeRef::ScalarTypeExtension(node) => node.origin(),
            NodeRef::ObjectTypeExtension(node) => node.origin(),
            NodeRef::InterfaceTypeExtension(node) => node.origin(),
            NodeRef::UnionTypeExtension(node) => node.origin(),
            NodeRef::EnumTypeExtension(node) => node.origin(),
            NodeRef::InputObjectTypeExtension(node) => node.origin(),
            NodeRef::EnumValueDefinition(node) => node.origin(),
            NodeRef::DirectiveDefinition(node) => node.origin(),
            NodeRef::FieldDefinition(node) => node.origin(),
            NodeRef::ArgumentDefinition(node) => node.origin(),
            NodeRef::Name(node) => node.origin(),
        }
    }

    /// The name of the concrete node type, e.g. `"FieldSelection"`.
    pub fn kind_name(self) -> &'static str {
        match self {
            NodeRef::Document(_) => "Document",
            NodeRef::OperationDefinition(_) => "OperationDefinition",
            NodeRef::FragmentDefinition(_) => "FragmentDefinition",
            NodeRef::VariableDefinition(_) => "VariableDefinition",
            NodeRef::SelectionSet(_) => "SelectionSet",
            NodeRef::FieldSelection(_) => "FieldSelection",
            NodeRef::FragmentSelection(_) => "FragmentSelection",
            NodeRef::InlineFragmentSelection(_) => "InlineFragmentSelection",
            NodeRef::Argument(_) => "Argument",
            NodeRef::Directive(_) => "Directive",
            NodeRef::BooleanValue(_) => "BooleanValue",
            NodeRef::EnumValue(_) => "EnumValue",
            NodeRef::FloatValue(_) => "FloatValue",
            NodeRef::IntValue(_) => "IntValue",
            NodeRef::ListValue(_) => "ListValue",
            NodeRef::NullValue(_) => "NullValue",
            NodeRef::ObjectValue(_) => "ObjectValue",
            NodeRef::ObjectValueField(_) => "ObjectValueField",
            NodeRef::StringValue(_) => "StringValue",
            NodeRef::VariableValue(_) => "VariableValue",
            NodeRef::NamedTypeRef(_) => "NamedTypeRef",
            NodeRef::ListTypeRef(_) => "ListTypeRef",
            NodeRef::NonNullTypeRef(_) => "NonNullTypeRef",
            NodeRef::SchemaDefinition(_) => "SchemaDefinition",
            NodeRef::SchemaExtension(_) => "SchemaExtension",
            NodeRef::OperationTypeDefinition(_) => "OperationTypeDefinition",
            NodeRef::ScalarTypeDefinition(_) => "ScalarTypeDefinition",
            NodeRef::ObjectTypeDefinition(_) => "ObjectTypeDefinition",
            NodeRef::InterfaceTypeDefinition(_) => "InterfaceTypeDefinition",
            NodeRef::UnionTypeDefinition(_) => "UnionTypeDefinition",
            NodeRef::EnumTypeDefinition(_) => "EnumTypeDefinition",
            NodeRef::InputObjectTypeDefinition(_) => "InputObjectTypeDefinition",
            NodeRef::ScalarTypeExtension(_) => "ScalarTypeExtension",
            NodeRef::ObjectTypeExtension(_) => "ObjectTypeExtension",
            NodeRef::InterfaceTypeExtension(_) => "InterfaceTypeExtension",
            NodeRef::UnionTypeExtension(_) => "UnionTypeExtension",
            NodeRef::EnumTypeExtension(_) => "EnumTypeExtension",
            NodeRef::InputObjectTypeExtension(_) => "InputObjectTypeExtension",
            NodeRef::EnumValueDefinition(_) => "EnumValueDefinition",
            NodeRef::DirectiveDefinition(_) => "DirectiveDefinition",
            NodeRef::FieldDefinition(_) => "FieldDefinition",
            NodeRef::ArgumentDefinition(_) => "ArgumentDefinition",
            NodeRef::Name(_) => "Name",
        }
    }

    /// `true` if both handles point at the very same node (not merely an
    /// equal one).
    pub fn same_node(self, other: NodeRef<'_>) -> bool {
        self.kind_name() == other.kind_name() && self.address() == other.address()
    }

    fn address(self) -> *const () {
        match self {
            NodeRef::Document(node) => std::ptr::from_ref(node).cast(),
            NodeRef::OperationDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::FragmentDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::VariableDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::SelectionSet(node) => std::ptr::from_ref(node).cast(),
            NodeRef::FieldSelection(node) => std::ptr::from_ref(node).cast(),
            NodeRef::FragmentSelection(node) => std::ptr::from_ref(node).cast(),
            NodeRef::InlineFragmentSelection(node) => std::ptr::from_ref(node).cast(),
            NodeRef::Argument(node) => std::ptr::from_ref(node).cast(),
            NodeRef::Directive(node) => std::ptr::from_ref(node).cast(),
            NodeRef::BooleanValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::EnumValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::FloatValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::IntValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ListValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::NullValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ObjectValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ObjectValueField(node) => std::ptr::from_ref(node).cast(),
            NodeRef::StringValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::VariableValue(node) => std::ptr::from_ref(node).cast(),
            NodeRef::NamedTypeRef(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ListTypeRef(node) => std::ptr::from_ref(node).cast(),
            NodeRef::NonNullTypeRef(node) => std::ptr::from_ref(node).cast(),
            NodeRef::SchemaDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::SchemaExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::OperationTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ScalarTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ObjectTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::InterfaceTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::UnionTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::EnumTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::InputObjectTypeDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ScalarTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ObjectTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::InterfaceTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::UnionTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::EnumTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::InputObjectTypeExtension(node) => std::ptr::from_ref(node).cast(),
            NodeRef::EnumValueDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::DirectiveDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::FieldDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::ArgumentDefinition(node) => std::ptr::from_ref(node).cast(),
            NodeRef::Name(node) => std::ptr::from_ref(node).cast(),
        }
    }
}

impl<'a> From<&'a Document> for NodeRef<'a> {
    fn from(node: &'a Document) -> Self {
        NodeRef::Document(node)
    }
}

impl<'a> From<&'a OperationDefinition> for NodeRef<'a> {
    fn from(node: &'a OperationDefinition) -> Self {
        NodeRef::OperationDefinition(node)
    }
}

impl<'a> From<&'a FragmentDefinition> for NodeRef<'a> {
    fn from(node: &'a FragmentDefinition) -> Self {
        NodeRef::FragmentDefinition(node)
    }
}

impl<'a> From<&'a VariableDefinition> for NodeRef<'a> {
    fn from(node: &'a VariableDefinition) -> Self {
        NodeRef::VariableDefinition(node)
    }
}

impl<'a> From<&'a SelectionSet> for NodeRef<'a> {
    fn from(node: &'a SelectionSet) -> Self {
        NodeRef::SelectionSet(node)
    }
}

impl<'a> From<&'a FieldSelection> for NodeRef<'a> {
    fn from(node: &'a FieldSelection) -> Self {
        NodeRef::FieldSelection(node)
    }
}

impl<'a> From<&'a FragmentSelection> for NodeRef<'a> {
    fn from(node: &'a FragmentSelection) -> Self {
        NodeRef::FragmentSelection(node)
    }
}

impl<'a> From<&'a InlineFragmentSelection> for NodeRef<'a> {
    fn from(node: &'a InlineFragmentSelection) -> Self {
        NodeRef::InlineFragmentSelection(node)
    }
}

impl<'a> From<&'a Argument> for NodeRef<'a> {
    fn from(node: &'a Argument) -> Self {
        NodeRef::Argument(node)
    }
}

impl<'a> From<&'a Directive> for NodeRef<'a> {
    fn from(node: &'a Directive) -> Self {
        NodeRef::Directive(node)
    }
}

impl<'a> From<&'a BooleanValue> for NodeRef<'a> {
    fn from(node: &'a BooleanValue) -> Self {
        NodeRef::BooleanValue(node)
    }
}

impl<'a> From<&'a EnumValue> for NodeRef<'a> {
    fn from(node: &'a EnumValue) -> Self {
        NodeRef::EnumValue(node)
    }
}

impl<'a> From<&'a FloatValue> for NodeRef<'a> {
    fn from(node: &'a FloatValue) -> Self {
        NodeRef::FloatValue(node)
    }
}

impl<'a> From<&'a IntValue> for NodeRef<'a> {
    fn from(node: &'a IntValue) -> Self {
        NodeRef::IntValue(node)
    }
}

impl<'a> From<&'a ListValue> for NodeRef<'a> {
    fn from(node: &'a ListValue) -> Self {
        NodeRef::ListValue(node)
    }
}

impl<'a> From<&'a NullValue> for NodeRef<'a> {
    fn from(node: &'a NullValue) -> Self {
        NodeRef::NullValue(node)
    }
}

impl<'a> From<&'a ObjectValue> for NodeRef<'a> {
    fn from(node: &'a ObjectValue) -> Self {
        NodeRef::ObjectValue(node)
    }
}

impl<'a> From<&'a ObjectValueField> for NodeRef<'a> {
    fn from(node: &'a ObjectValueField) -> Self {
        NodeRef::ObjectValueField(node)
    }
}

impl<'a> From<&'a StringValue> for NodeRef<'a> {
    fn from(node: &'a StringValue) -> Self {
        NodeRef::StringValue(node)
    }
}

impl<'a> From<&'a VariableValue> for NodeRef<'a> {
    fn from(node: &'a VariableValue) -> Self {
        NodeRef::VariableValue(node)
    }
}

impl<'a> From<&'a NamedTypeRef> for NodeRef<'a> {
    fn from(node: &'a NamedTypeRef) -> Self {
        NodeRef::NamedTypeRef(node)
    }
}

impl<'a> From<&'a ListTypeRef> for NodeRef<'a> {
    fn from(node: &'a ListTypeRef) -> Self {
        NodeRef::ListTypeRef(node)
    }
}

impl<'a> From<&'a NonNullTypeRef> for NodeRef<'a> {
    fn from(node: &'a NonNullTypeRef) -> Self {
        NodeRef::NonNullTypeRef(node)
    }
}

impl<'a> From<&'a SchemaDefinition> for NodeRef<'a> {
    fn from(node: &'a SchemaDefinition) -> Self {
        NodeRef::SchemaDefinition(node)
    }
}

impl<'a> From<&'a SchemaExtension> for NodeRef<'a> {
    fn from(node: &'a SchemaExtension) -> Self {
        NodeRef::SchemaExtension(node)
    }
}

impl<'a> From<&'a OperationTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a OperationTypeDefinition) -> Self {
        NodeRef::OperationTypeDefinition(node)
    }
}

impl<'a> From<&'a ScalarTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a ScalarTypeDefinition) -> Self {
        NodeRef::ScalarTypeDefinition(node)
    }
}

impl<'a> From<&'a ObjectTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a ObjectTypeDefinition) -> Self {
        NodeRef::ObjectTypeDefinition(node)
    }
}

impl<'a> From<&'a InterfaceTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a InterfaceTypeDefinition) -> Self {
        NodeRef::InterfaceTypeDefinition(node)
    }
}

impl<'a> From<&'a UnionTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a UnionTypeDefinition) -> Self {
        NodeRef::UnionTypeDefinition(node)
    }
}

impl<'a> From<&'a EnumTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a EnumTypeDefinition) -> Self {
        NodeRef::EnumTypeDefinition(node)
    }
}

impl<'a> From<&'a InputObjectTypeDefinition> for NodeRef<'a> {
    fn from(node: &'a InputObjectTypeDefinition) -> Self {
        NodeRef::InputObjectTypeDefinition(node)
    }
}

impl<'a> From<&'a ScalarTypeExtension> for NodeRef<'a> {
    fn from(node: &'a ScalarTypeExtension) -> Self {
        NodeRef::ScalarTypeExtension(node)
    }
}

impl<'a> From<&'a ObjectTypeExtension> for NodeRef<'a> {
    fn from(node: &'a ObjectTypeExtension) -> Self {
        NodeRef::ObjectTypeExtension(node)
    }
}

impl<'a> From<&'a InterfaceTypeExtension> for NodeRef<'a> {
    fn from(node: &'a InterfaceTypeExtension) -> Self {
        NodeRef::InterfaceTypeExtension(node)
    }
}

impl<'a> From<&'a UnionTypeExtension> for NodeRef<'a> {
    fn from(node: &'a UnionTypeExtension) -> Self {
        NodeRef::UnionTypeExtension(node)
    }
}

impl<'a> From<&'a EnumTypeExtension> for NodeRef<'a> {
    fn from(node: &'a EnumTypeExtension) -> Self {
        NodeRef::EnumTypeExtension(node)
    }
}

impl<'a> From<&'a InputObjectTypeExtension> for NodeRef<'a> {
    fn from(node: &'a InputObjectTypeExtension) -> Self {
        NodeRef::InputObjectTypeExtension(node)
    }
}

impl<'a> From<&'a EnumValueDefinition> for NodeRef<'a> {
    fn from(node: &'a EnumValueDefinition) -> Self {
        NodeRef::EnumValueDefinition(node)
    }
}

impl<'a> From<&'a DirectiveDefinition> for NodeRef<'a> {
    fn from(node: &'a DirectiveDefinition) -> Self {
        NodeRef::DirectiveDefinition(node)
    }
}

impl<'a> From<&'a FieldDefinition> for NodeRef<'a> {
    fn from(node: &'a FieldDefinition) -> Self {
        NodeRef::FieldDefinition(node)
    }
}

impl<'a> From<&'a ArgumentDefinition> for NodeRef<'a> {
    fn from(node: &'a ArgumentDefinition) -> Self {
        NodeRef::ArgumentDefinition(node)
    }
}

impl<'a> From<&'a Name> for NodeRef<'a> {
    fn from(node: &'a Name) -> Self {
        NodeRef::Name(node)
    }
}
