use gqlfront_parser::ast::Argument;
use gqlfront_parser::ast::ArgumentDefinition;
use gqlfront_parser::ast::BooleanValue;
use gqlfront_parser::ast::Directive;
use gqlfront_parser::ast::DirectiveDefinition;
use gqlfront_parser::ast::Document;
use gqlfront_parser::ast::EnumTypeDefinition;
use gqlfront_parser::ast::EnumTypeExtension;
use gqlfront_parser::ast::EnumValue;
use gqlfront_parser::ast::EnumValueDefinition;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::FieldSelection;
use gqlfront_parser::ast::FloatValue;
use gqlfront_parser::ast::FragmentDefinition;
use gqlfront_parser::ast::FragmentSelection;
use gqlfront_parser::ast::InlineFragmentSelection;
use gqlfront_parser::ast::InputObjectTypeDefinition;
use gqlfront_parser::ast::InputObjectTypeExtension;
use gqlfront_parser::ast::IntValue;
use gqlfront_parser::ast::InterfaceTypeDefinition;
use gqlfront_parser::ast::InterfaceTypeExtension;
use gqlfront_parser::ast::ListTypeRef;
use gqlfront_parser::ast::ListValue;
use gqlfront_parser::ast::Name;
use gqlfront_parser::ast::NamedTypeRef;
use gqlfront_parser::ast::NodeRef;
use gqlfront_parser::ast::NonNullTypeRef;
use gqlfront_parser::ast::NullValue;
use gqlfront_parser::ast::ObjectTypeDefinition;
use gqlfront_parser::ast::ObjectTypeExtension;
use gqlfront_parser::ast::ObjectValue;
use gqlfront_parser::ast::ObjectValueField;
use gqlfront_parser::ast::OperationDefinition;
use gqlfront_parser::ast::OperationTypeDefinition;
use gqlfront_parser::ast::ScalarTypeDefinition;
use gqlfront_parser::ast::ScalarTypeExtension;
use gqlfront_parser::ast::SchemaDefinition;
use gqlfront_parser::ast::SchemaExtension;
use gqlfront_parser::ast::SelectionSet;
use gqlfront_parser::ast::StringValue;
use gqlfront_parser::ast::UnionTypeDefinition;
use gqlfront_parser::ast::UnionTypeExtension;
use gqlfront_parser::ast::VariableDefinition;
use gqlfront_parser::ast::VariableValue;

/// A visitor over GraphQL AST nodes with cascading defaults.
///
/// Every concrete node kind has its own `visit_*` method. The defaults
/// forward to the method of the node's category, and each category
/// forwards to a broader one, ending at [`visit_node`](Visitor::visit_node),
/// the only method an implementation must provide:
///
/// ```text
/// operation, fragment definitions  -> visit_executable_definition  -> visit_definition
/// schema, directive definitions    -> visit_type_system_definition -> visit_definition
/// the six type definitions         -> visit_type_definition        -> visit_type_system_definition
/// schema extension                 -> visit_type_system_extension  -> visit_definition
/// the six type extensions          -> visit_type_extension         -> visit_type_system_extension
/// field, fragment spread, inline   -> visit_selection              -> visit_node
/// the nine value kinds             -> visit_value                  -> visit_node
/// named, list, non-null type refs  -> visit_type_ref               -> visit_node
/// everything else                  -> visit_node
/// visit_definition                 -> visit_node
/// ```
///
/// Overriding a method therefore intercepts every kind beneath it that
/// has not itself been overridden. Category methods receive the node as
/// a [`NodeRef`].
///
/// A visitor never recurses on its own. Dispatch nodes with
/// [`Accept::accept`](crate::Accept::accept), walk with a
/// [`TraversingVisitor`](crate::TraversingVisitor), or coordinate several
/// visitors over one walk with a [`ParallelVisitor`](crate::ParallelVisitor).
pub trait Visitor<'a> {
    /// Per-call data threaded from parent to children.
    type Data;

    /// What each `visit_*` call returns.
    type Output;

    /// The root of every default chain.
    fn visit_node(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output;

    // =========================================================================
    // Categories
    // =========================================================================

    fn visit_definition(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_node(node, data)
    }

    /// Operations and fragments.
    fn visit_executable_definition(
        &mut self,
        node: NodeRef<'a>,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_definition(node, data)
    }

    /// Schema, type and directive definitions.
    fn visit_type_system_definition(
        &mut self,
        node: NodeRef<'a>,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_definition(node, data)
    }

    fn visit_type_definition(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_type_system_definition(node, data)
    }

    /// Schema and type extensions.
    fn visit_type_system_extension(
        &mut self,
        node: NodeRef<'a>,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_definition(node, data)
    }

    fn visit_type_extension(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_type_system_extension(node, data)
    }

    fn visit_selection(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_node(node, data)
    }

    fn visit_value(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_node(node, data)
    }

    fn visit_type_ref(&mut self, node: NodeRef<'a>, data: Self::Data) -> Self::Output {
        self.visit_node(node, data)
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn visit_document(&mut self, node: &'a Document, data: Self::Data) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_operation_definition(
        &mut self,
        node: &'a OperationDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_executable_definition(node.as_node_ref(), data)
    }

    fn visit_fragment_definition(
        &mut self,
        node: &'a FragmentDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_executable_definition(node.as_node_ref(), data)
    }

    fn visit_variable_definition(
        &mut self,
        node: &'a VariableDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_selection_set(&mut self, node: &'a SelectionSet, data: Self::Data) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_field_selection(
        &mut self,
        node: &'a FieldSelection,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_selection(node.as_node_ref(), data)
    }

    fn visit_fragment_selection(
        &mut self,
        node: &'a FragmentSelection,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_selection(node.as_node_ref(), data)
    }

    fn visit_inline_fragment_selection(
        &mut self,
        node: &'a InlineFragmentSelection,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_selection(node.as_node_ref(), data)
    }

    fn visit_argument(&mut self, node: &'a Argument, data: Self::Data) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_directive(&mut self, node: &'a Directive, data: Self::Data) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_name(&mut self, node: &'a Name, data: Self::Data) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn visit_boolean_value(&mut self, node: &'a BooleanValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_enum_value(&mut self, node: &'a EnumValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_float_value(&mut self, node: &'a FloatValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_int_value(&mut self, node: &'a IntValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_list_value(&mut self, node: &'a ListValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_null_value(&mut self, node: &'a NullValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_object_value(&mut self, node: &'a ObjectValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_object_value_field(
        &mut self,
        node: &'a ObjectValueField,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_string_value(&mut self, node: &'a StringValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    fn visit_variable_value(&mut self, node: &'a VariableValue, data: Self::Data) -> Self::Output {
        self.visit_value(node.as_node_ref(), data)
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn visit_named_type_ref(&mut self, node: &'a NamedTypeRef, data: Self::Data) -> Self::Output {
        self.visit_type_ref(node.as_node_ref(), data)
    }

    fn visit_list_type_ref(&mut self, node: &'a ListTypeRef, data: Self::Data) -> Self::Output {
        self.visit_type_ref(node.as_node_ref(), data)
    }

    fn visit_non_null_type_ref(
        &mut self,
        node: &'a NonNullTypeRef,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_ref(node.as_node_ref(), data)
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn visit_schema_definition(
        &mut self,
        node: &'a SchemaDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_system_definition(node.as_node_ref(), data)
    }

    fn visit_schema_extension(
        &mut self,
        node: &'a SchemaExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_system_extension(node.as_node_ref(), data)
    }

    fn visit_operation_type_definition(
        &mut self,
        node: &'a OperationTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_scalar_type_definition(
        &mut self,
        node: &'a ScalarTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_object_type_definition(
        &mut self,
        node: &'a ObjectTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_interface_type_definition(
        &mut self,
        node: &'a InterfaceTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_union_type_definition(
        &mut self,
        node: &'a UnionTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_enum_type_definition(
        &mut self,
        node: &'a EnumTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_input_object_type_definition(
        &mut self,
        node: &'a InputObjectTypeDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_definition(node.as_node_ref(), data)
    }

    fn visit_scalar_type_extension(
        &mut self,
        node: &'a ScalarTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_object_type_extension(
        &mut self,
        node: &'a ObjectTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_interface_type_extension(
        &mut self,
        node: &'a InterfaceTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_union_type_extension(
        &mut self,
        node: &'a UnionTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_enum_type_extension(
        &mut self,
        node: &'a EnumTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_input_object_type_extension(
        &mut self,
        node: &'a InputObjectTypeExtension,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_extension(node.as_node_ref(), data)
    }

    fn visit_enum_value_definition(
        &mut self,
        node: &'a EnumValueDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_directive_definition(
        &mut self,
        node: &'a DirectiveDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_type_system_definition(node.as_node_ref(), data)
    }

    fn visit_field_definition(
        &mut self,
        node: &'a FieldDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }

    fn visit_argument_definition(
        &mut self,
        node: &'a ArgumentDefinition,
        data: Self::Data,
    ) -> Self::Output {
        self.visit_node(node.as_node_ref(), data)
    }
}
