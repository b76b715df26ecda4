use crate::transform_children;
use gqlfront_parser::ast::Argument;
use gqlfront_parser::ast::ArgumentDefinition;
use gqlfront_parser::ast::BooleanValue;
use gqlfront_parser::ast::Definition;
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
use gqlfront_parser::ast::NonNullTypeRef;
use gqlfront_parser::ast::NullValue;
use gqlfront_parser::ast::NullableTypeRef;
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
use gqlfront_parser::ast::Selection;
use gqlfront_parser::ast::SelectionSet;
use gqlfront_parser::ast::StringValue;
use gqlfront_parser::ast::TypeDefinition;
use gqlfront_parser::ast::TypeExtension;
use gqlfront_parser::ast::TypeRef;
use gqlfront_parser::ast::UnionTypeDefinition;
use gqlfront_parser::ast::UnionTypeExtension;
use gqlfront_parser::ast::Value;
use gqlfront_parser::ast::VariableDefinition;
use gqlfront_parser::ast::VariableValue;
use std::borrow::Cow;

/// A copy-on-write rewriter of AST trees.
///
/// There is one `transform_*` method per node kind and per category enum.
/// Each returns [`Cow::Borrowed`] with its input to leave the node as it
/// is, or [`Cow::Owned`] with a replacement. The defaults (in
/// [`transform_children`]) transform a node's children and rebuild the
/// node only if one of them changed, so unchanged subtrees are shared
/// with the input rather than copied. A rebuilt node keeps its origin.
///
/// ```rust
/// use gqlfront_parser::ast::Name;
/// use gqlfront_visit::Transformer;
/// use std::borrow::Cow;
///
/// struct Rename;
///
/// impl<'a> Transformer<'a> for Rename {
///     fn transform_name(&mut self, node: &'a Name) -> Cow<'a, Name> {
///         if node.as_str() == "old" {
///             Cow::Owned(Name {
///                 origin: node.origin.clone(),
///                 value: "new".to_string(),
///             })
///         } else {
///             Cow::Borrowed(node)
///         }
///     }
/// }
///
/// let document = gqlfront_parser::parse_document("{ old other }").unwrap();
/// let renamed = Rename.transform_document(&document);
/// assert!(matches!(renamed, Cow::Owned(_)));
/// ```
pub trait Transformer<'a> {
    // =========================================================================
    // Categories
    // =========================================================================

    fn transform_definition(&mut self, node: &'a Definition) -> Cow<'a, Definition> {
        transform_children::definition(self, node)
    }

    fn transform_type_definition(&mut self, node: &'a TypeDefinition) -> Cow<'a, TypeDefinition> {
        transform_children::type_definition(self, node)
    }

    fn transform_type_extension(&mut self, node: &'a TypeExtension) -> Cow<'a, TypeExtension> {
        transform_children::type_extension(self, node)
    }

    fn transform_selection(&mut self, node: &'a Selection) -> Cow<'a, Selection> {
        transform_children::selection(self, node)
    }

    fn transform_value(&mut self, node: &'a Value) -> Cow<'a, Value> {
        transform_children::value(self, node)
    }

    fn transform_type_ref(&mut self, node: &'a TypeRef) -> Cow<'a, TypeRef> {
        transform_children::type_ref(self, node)
    }

    fn transform_nullable_type_ref(
        &mut self,
        node: &'a NullableTypeRef,
    ) -> Cow<'a, NullableTypeRef> {
        transform_children::nullable_type_ref(self, node)
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn transform_document(&mut self, node: &'a Document) -> Cow<'a, Document> {
        transform_children::document(self, node)
    }

    fn transform_operation_definition(
        &mut self,
        node: &'a OperationDefinition,
    ) -> Cow<'a, OperationDefinition> {
        transform_children::operation_definition(self, node)
    }

    fn transform_fragment_definition(
        &mut self,
        node: &'a FragmentDefinition,
    ) -> Cow<'a, FragmentDefinition> {
        transform_children::fragment_definition(self, node)
    }

    fn transform_variable_definition(
        &mut self,
        node: &'a VariableDefinition,
    ) -> Cow<'a, VariableDefinition> {
        transform_children::variable_definition(self, node)
    }

    fn transform_selection_set(&mut self, node: &'a SelectionSet) -> Cow<'a, SelectionSet> {
        transform_children::selection_set(self, node)
    }

    fn transform_field_selection(&mut self, node: &'a FieldSelection) -> Cow<'a, FieldSelection> {
        transform_children::field_selection(self, node)
    }

    fn transform_fragment_selection(
        &mut self,
        node: &'a FragmentSelection,
    ) -> Cow<'a, FragmentSelection> {
        transform_children::fragment_selection(self, node)
    }

    fn transform_inline_fragment_selection(
        &mut self,
        node: &'a InlineFragmentSelection,
    ) -> Cow<'a, InlineFragmentSelection> {
        transform_children::inline_fragment_selection(self, node)
    }

    fn transform_argument(&mut self, node: &'a Argument) -> Cow<'a, Argument> {
        transform_children::argument(self, node)
    }

    fn transform_directive(&mut self, node: &'a Directive) -> Cow<'a, Directive> {
        transform_children::directive(self, node)
    }

    fn transform_name(&mut self, node: &'a Name) -> Cow<'a, Name> {
        Cow::Borrowed(node)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn transform_boolean_value(&mut self, node: &'a BooleanValue) -> Cow<'a, BooleanValue> {
        Cow::Borrowed(node)
    }

    fn transform_enum_value(&mut self, node: &'a EnumValue) -> Cow<'a, EnumValue> {
        Cow::Borrowed(node)
    }

    fn transform_float_value(&mut self, node: &'a FloatValue) -> Cow<'a, FloatValue> {
        Cow::Borrowed(node)
    }

    fn transform_int_value(&mut self, node: &'a IntValue) -> Cow<'a, IntValue> {
        Cow::Borrowed(node)
    }

    fn transform_list_value(&mut self, node: &'a ListValue) -> Cow<'a, ListValue> {
        transform_children::list_value(self, node)
    }

    fn transform_null_value(&mut self, node: &'a NullValue) -> Cow<'a, NullValue> {
        Cow::Borrowed(node)
    }

    fn transform_object_value(&mut self, node: &'a ObjectValue) -> Cow<'a, ObjectValue> {
        transform_children::object_value(self, node)
    }

    fn transform_object_value_field(
        &mut self,
        node: &'a ObjectValueField,
    ) -> Cow<'a, ObjectValueField> {
        transform_children::object_value_field(self, node)
    }

    fn transform_string_value(&mut self, node: &'a StringValue) -> Cow<'a, StringValue> {
        Cow::Borrowed(node)
    }

    fn transform_variable_value(&mut self, node: &'a VariableValue) -> Cow<'a, VariableValue> {
        transform_children::variable_value(self, node)
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn transform_named_type_ref(&mut self, node: &'a NamedTypeRef) -> Cow<'a, NamedTypeRef> {
        transform_children::named_type_ref(self, node)
    }

    fn transform_list_type_ref(&mut self, node: &'a ListTypeRef) -> Cow<'a, ListTypeRef> {
        transform_children::list_type_ref(self, node)
    }

    fn transform_non_null_type_ref(&mut self, node: &'a NonNullTypeRef) -> Cow<'a, NonNullTypeRef> {
        transform_children::non_null_type_ref(self, node)
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn transform_schema_definition(
        &mut self,
        node: &'a SchemaDefinition,
    ) -> Cow<'a, SchemaDefinition> {
        transform_children::schema_definition(self, node)
    }

    fn transform_schema_extension(
        &mut self,
        node: &'a SchemaExtension,
    ) -> Cow<'a, SchemaExtension> {
        transform_children::schema_extension(self, node)
    }

    fn transform_operation_type_definition(
        &mut self,
        node: &'a OperationTypeDefinition,
    ) -> Cow<'a, OperationTypeDefinition> {
        transform_children::operation_type_definition(self, node)
    }

    fn transform_scalar_type_definition(
        &mut self,
        node: &'a ScalarTypeDefinition,
    ) -> Cow<'a, ScalarTypeDefinition> {
        transform_children::scalar_type_definition(self, node)
    }

    fn transform_object_type_definition(
        &mut self,
        node: &'a ObjectTypeDefinition,
    ) -> Cow<'a, ObjectTypeDefinition> {
        transform_children::object_type_definition(self, node)
    }

    fn transform_interface_type_definition(
        &mut self,
        node: &'a InterfaceTypeDefinition,
    ) -> Cow<'a, InterfaceTypeDefinition> {
        transform_children::interface_type_definition(self, node)
    }

    fn transform_union_type_definition(
        &mut self,
        node: &'a UnionTypeDefinition,
    ) -> Cow<'a, UnionTypeDefinition> {
        transform_children::union_type_definition(self, node)
    }

    fn transform_enum_type_definition(
        &mut self,
        node: &'a EnumTypeDefinition,
    ) -> Cow<'a, EnumTypeDefinition> {
        transform_children::enum_type_definition(self, node)
    }

    fn transform_input_object_type_definition(
        &mut self,
        node: &'a InputObjectTypeDefinition,
    ) -> Cow<'a, InputObjectTypeDefinition> {
        transform_children::input_object_type_definition(self, node)
    }

    fn transform_scalar_type_extension(
        &mut self,
        node: &'a ScalarTypeExtension,
    ) -> Cow<'a, ScalarTypeExtension> {
        transform_children::scalar_type_extension(self, node)
    }

    fn transform_object_type_extension(
        &mut self,
        node: &'a ObjectTypeExtension,
    ) -> Cow<'a, ObjectTypeExtension> {
        transform_children::object_type_extension(self, node)
    }

    fn transform_interface_type_extension(
        &mut self,
        node: &'a InterfaceTypeExtension,
    ) -> Cow<'a, InterfaceTypeExtension> {
        transform_children::interface_type_extension(self, node)
    }

    fn transform_union_type_extension(
        &mut self,
        node: &'a UnionTypeExtension,
    ) -> Cow<'a, UnionTypeExtension> {
        transform_children::union_type_extension(self, node)
    }

    fn transform_enum_type_extension(
        &mut self,
        node: &'a EnumTypeExtension,
    ) -> Cow<'a, EnumTypeExtension> {
        transform_children::enum_type_extension(self, node)
    }

    fn transform_input_object_type_extension(
        &mut self,
        node: &'a InputObjectTypeExtension,
    ) -> Cow<'a, InputObjectTypeExtension> {
        transform_children::input_object_type_extension(self, node)
    }

    fn transform_enum_value_definition(
        &mut self,
        node: &'a EnumValueDefinition,
    ) -> Cow<'a, EnumValueDefinition> {
        transform_children::enum_value_definition(self, node)
    }

    fn transform_directive_definition(
        &mut self,
        node: &'a DirectiveDefinition,
    ) -> Cow<'a, DirectiveDefinition> {
        transform_children::directive_definition(self, node)
    }

    fn transform_field_definition(
        &mut self,
        node: &'a FieldDefinition,
    ) -> Cow<'a, FieldDefinition> {
        transform_children::field_definition(self, node)
    }

    fn transform_argument_definition(
        &mut self,
        node: &'a ArgumentDefinition,
    ) -> Cow<'a, ArgumentDefinition> {
        transform_children::argument_definition(self, node)
    }
}
