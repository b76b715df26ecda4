use crate::Visitor;
use gqlfront_parser::ast::AstNode;
use gqlfront_parser::ast::NodeRef;

/// Double dispatch from a node to the [`Visitor`] method of its concrete
/// kind.
///
/// Implemented for [`NodeRef`] and for a reference to any AST node or
/// category enum. A category enum dispatches to the node it holds, so
/// `value.accept(..)` on a [`Value::Int`](gqlfront_parser::ast::Value::Int)
/// calls [`visit_int_value`](Visitor::visit_int_value), never
/// [`visit_value`](Visitor::visit_value) directly.
pub trait Accept<'a> {
    fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Output
    where
        V: Visitor<'a> + ?Sized;
}

impl<'a> Accept<'a> for NodeRef<'a> {
    fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Output
    where
        V: Visitor<'a> + ?Sized,
    {
        match self {
            NodeRef::Document(node) => visitor.visit_document(node, data),
            NodeRef::OperationDefinition(node) => visitor.visit_operation_definition(node, data),
            NodeRef::FragmentDefinition(node) => visitor.visit_fragment_definition(node, data),
            NodeRef::VariableDefinition(node) => visitor.visit_variable_definition(node, data),
            NodeRef::SelectionSet(node) => visitor.visit_selection_set(node, data),
            NodeRef::FieldSelection(node) => visitor.visit_field_selection(node, data),
            NodeRef::FragmentSelection(node) => visitor.visit_fragment_selection(node, data),
            NodeRef::InlineFragmentSelection(node) => visitor.visit_inline_fragment_selection(node, data),
            NodeRef::Argument(node) => visitor.visit_argument(node, data),
            NodeRef::Directive(node) => visitor.visit_directive(node, data),
            NodeRef::BooleanValue(node) => visitor.visit_boolean_value(node, data),
            NodeRef::EnumValue(node) => visitor.visit_enum_value(node, data),
            NodeRef::FloatValue(node) => visitor.visit_float_value(node, data),
            NodeRef::IntValue(node) => visitor.visit_int_value(node, data),
            NodeRef::ListValue(node) => visitor.visit_list_value(node, data),
            NodeRef::NullValue(node) => visitor.visit_null_value(node, data),
            NodeRef::ObjectValue(node) => visitor.visit_object_value(node, data),
            NodeRef::ObjectValueField(node) => visitor.visit_object_value_field(node, data),
            NodeRef::StringValue(node) => visitor.visit_string_value(node, data),
            NodeRef::VariableValue(node) => visitor.visit_variable_value(node, data),
            NodeRef::NamedTypeRef(node) => visitor.visit_named_type_ref(node, data),
            NodeRef::ListTypeRef(node) => visitor.visit_list_type_ref(node, data),
            NodeRef::NonNullTypeRef(node) => visitor.visit_non_null_type_ref(node, data),
            NodeRef::SchemaDefinition(node) => visitor.visit_schema_definition(node, data),
            NodeRef::SchemaExtension(node) => visitor.visit_schema_extension(node, data),
            NodeRef::OperationTypeDefinition(node) => visitor.visit_operation_type_definition(node, data),
            NodeRef::ScalarTypeDefinition(node) => visitor.visit_scalar_type_definition(node, data),
            NodeRef::ObjectTypeDefinition(node) => visitor.visit_object_type_definition(node, data),
            NodeRef::InterfaceTypeDefinition(node) => visitor.visit_interface_type_definition(node, data),
            NodeRef::UnionTypeDefinition(node) => visitor.visit_union_type_definition(node, data),
            NodeRef::EnumTypeDefinition(node) => visitor.visit_enum_type_definition(node, data),
            NodeRef::InputObjectTypeDefinition(node) => visitor.visit_input_object_type_definition(node, data),
            NodeRef::ScalarTypeExtension(node) => visitor.visit_scalar_type_extension(node, data),
            NodeRef::ObjectTypeExtension(node) => visitor.visit_object_type_extension(node, data),
            NodeRef::InterfaceTypeExtension(node) => visitor.visit_interface_type_extension(node, data),
            NodeRef::UnionTypeExtension(node) => visitor.visit_union_type_extension(node, data),
            NodeRef::EnumTypeExtension(node) => visitor.visit_enum_type_extension(node, data),
            NodeRef::InputObjectTypeExtension(node) => visitor.visit_input_object_type_extension(node, data),
            NodeRef::EnumValueDefinition(node) => visitor.visit_enum_value_definition(node, data),
            NodeRef::DirectiveDefinition(node) => visitor.visit_directive_definition(node, data),
            NodeRef::FieldDefinition(node) => visitor.visit_field_definition(node, data),
            NodeRef::ArgumentDefinition(node) => visitor.visit_argument_definition(node, data),
            NodeRef::Name(node) => visitor.visit_name(node, data),
        }
    }
}

impl<'a, T> Accept<'a> for &'a T
where
    T: AstNode + ?Sized,
{
    fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Output
    where
        V: Visitor<'a> + ?Sized,
    {
        self.as_node_ref().accept(visitor, data)
    }
}
