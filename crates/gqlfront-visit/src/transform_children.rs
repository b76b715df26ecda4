//! Default implementations of the [`Transformer`] methods.
//!
//! Each function transforms the children of one node kind through the
//! given transformer and rebuilds the node only if at least one child
//! came back as [`Cow::Owned`]. Overrides can call these to keep the
//! default child handling, e.g. to post-process a rebuilt node.

use crate::Transformer;
use gqlfront_parser::ast::Argument;
use gqlfront_parser::ast::ArgumentDefinition;
use gqlfront_parser::ast::Definition;
use gqlfront_parser::ast::Directive;
use gqlfront_parser::ast::DirectiveDefinition;
use gqlfront_parser::ast::Document;
use gqlfront_parser::ast::EnumTypeDefinition;
use gqlfront_parser::ast::EnumTypeExtension;
use gqlfront_parser::ast::EnumValueDefinition;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::FieldSelection;
use gqlfront_parser::ast::FragmentDefinition;
use gqlfront_parser::ast::FragmentSelection;
use gqlfront_parser::ast::InlineFragmentSelection;
use gqlfront_parser::ast::InputObjectTypeDefinition;
use gqlfront_parser::ast::InputObjectTypeExtension;
use gqlfront_parser::ast::InterfaceTypeDefinition;
use gqlfront_parser::ast::InterfaceTypeExtension;
use gqlfront_parser::ast::ListTypeRef;
use gqlfront_parser::ast::ListValue;
use gqlfront_parser::ast::NamedTypeRef;
use gqlfront_parser::ast::NonNullTypeRef;
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
use gqlfront_parser::ast::TypeDefinition;
use gqlfront_parser::ast::TypeExtension;
use gqlfront_parser::ast::TypeRef;
use gqlfront_parser::ast::UnionTypeDefinition;
use gqlfront_parser::ast::UnionTypeExtension;
use gqlfront_parser::ast::Value;
use gqlfront_parser::ast::VariableDefinition;
use gqlfront_parser::ast::VariableValue;
use std::borrow::Cow;

/// Rebuilt elements, or `None` if every element came back borrowed.
fn list<'a, N: Clone>(
    nodes: &'a [N],
    mut transform: impl FnMut(&'a N) -> Cow<'a, N>,
) -> Option<Vec<N>> {
    let mut rebuilt: Option<Vec<N>> = None;
    for (index, node) in nodes.iter().enumerate() {
        let transformed = transform(node);
        if let Some(rebuilt) = rebuilt.as_mut() {
            rebuilt.push(transformed.into_owned());
        } else if let Cow::Owned(transformed) = transformed {
            let mut nodes_so_far = Vec::with_capacity(nodes.len());
            nodes_so_far.extend_from_slice(&nodes[..index]);
            nodes_so_far.push(transformed);
            rebuilt = Some(nodes_so_far);
        }
    }
    rebuilt
}

fn optional<'a, N: Clone>(
    node: &'a Option<N>,
    transform: impl FnOnce(&'a N) -> Cow<'a, N>,
) -> Option<Option<N>> {
    node.as_ref().and_then(|node| owned(transform(node))).map(Some)
}

fn owned<N: Clone>(node: Cow<'_, N>) -> Option<N> {
    match node {
        Cow::Borrowed(_) => None,
        Cow::Owned(node) => Some(node),
    }
}

/// Wraps a transformed variant back into its category enum.
fn rewrap<'a, E: Clone, N: Clone>(
    node: &'a E,
    inner: Cow<'a, N>,
    wrap: impl FnOnce(N) -> E,
) -> Cow<'a, E> {
    match inner {
        Cow::Borrowed(_) => Cow::Borrowed(node),
        Cow::Owned(inner) => Cow::Owned(wrap(inner)),
    }
}

pub fn definition<'a, T>(transformer: &mut T, node: &'a Definition) -> Cow<'a, Definition>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        Definition::Operation(inner) => {
            rewrap(node, transformer.transform_operation_definition(inner), Definition::Operation)
        },
        Definition::Fragment(inner) => {
            rewrap(node, transformer.transform_fragment_definition(inner), Definition::Fragment)
        },
        Definition::Schema(inner) => {
            rewrap(node, transformer.transform_schema_definition(inner), Definition::Schema)
        },
        Definition::SchemaExtension(inner) => {
            rewrap(node, transformer.transform_schema_extension(inner), Definition::SchemaExtension)
        },
        Definition::Type(inner) => {
            rewrap(node, transformer.transform_type_definition(inner), Definition::Type)
        },
        Definition::TypeExtension(inner) => {
            rewrap(node, transformer.transform_type_extension(inner), Definition::TypeExtension)
        },
        Definition::Directive(inner) => {
            rewrap(node, transformer.transform_directive_definition(inner), Definition::Directive)
        },
    }
}

pub fn type_definition<'a, T>(transformer: &mut T, node: &'a TypeDefinition) -> Cow<'a, TypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        TypeDefinition::Scalar(inner) => {
            rewrap(node, transformer.transform_scalar_type_definition(inner), TypeDefinition::Scalar)
        },
        TypeDefinition::Object(inner) => {
            rewrap(node, transformer.transform_object_type_definition(inner), TypeDefinition::Object)
        },
        TypeDefinition::Interface(inner) => {
            rewrap(node, transformer.transform_interface_type_definition(inner), TypeDefinition::Interface)
        },
        TypeDefinition::Union(inner) => {
            rewrap(node, transformer.transform_union_type_definition(inner), TypeDefinition::Union)
        },
        TypeDefinition::Enum(inner) => {
            rewrap(node, transformer.transform_enum_type_definition(inner), TypeDefinition::Enum)
        },
        TypeDefinition::InputObject(inner) => {
            rewrap(node, transformer.transform_input_object_type_definition(inner), TypeDefinition::InputObject)
        },
    }
}

pub fn type_extension<'a, T>(transformer: &mut T, node: &'a TypeExtension) -> Cow<'a, TypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        TypeExtension::Scalar(inner) => {
            rewrap(node, transformer.transform_scalar_type_extension(inner), TypeExtension::Scalar)
        },
        TypeExtension::Object(inner) => {
            rewrap(node, transformer.transform_object_type_extension(inner), TypeExtension::Object)
        },
        TypeExtension::Interface(inner) => {
            rewrap(node, transformer.transform_interface_type_extension(inner), TypeExtension::Interface)
        },
        TypeExtension::Union(inner) => {
            rewrap(node, transformer.transform_union_type_extension(inner), TypeExtension::Union)
        },
        TypeExtension::Enum(inner) => {
            rewrap(node, transformer.transform_enum_type_extension(inner), TypeExtension::Enum)
        },
        TypeExtension::InputObject(inner) => {
            rewrap(node, transformer.transform_input_object_type_extension(inner), TypeExtension::InputObject)
        },
    }
}

pub fn selection<'a, T>(transformer: &mut T, node: &'a Selection) -> Cow<'a, Selection>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        Selection::Field(inner) => {
            rewrap(node, transformer.transform_field_selection(inner), Selection::Field)
        },
        Selection::FragmentSpread(inner) => {
            rewrap(node, transformer.transform_fragment_selection(inner), Selection::FragmentSpread)
        },
        Selection::InlineFragment(inner) => {
            rewrap(node, transformer.transform_inline_fragment_selection(inner), Selection::InlineFragment)
        },
    }
}

pub fn value<'a, T>(transformer: &mut T, node: &'a Value) -> Cow<'a, Value>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        Value::Boolean(inner) => {
            rewrap(node, transformer.transform_boolean_value(inner), Value::Boolean)
        },
        Value::Enum(inner) => {
            rewrap(node, transformer.transform_enum_value(inner), Value::Enum)
        },
        Value::Float(inner) => {
            rewrap(node, transformer.transform_float_value(inner), Value::Float)
        },
        Value::Int(inner) => {
            rewrap(node, transformer.transform_int_value(inner), Value::Int)
        },
        Value::List(inner) => {
            rewrap(node, transformer.transform_list_value(inner), Value::List)
        },
        Value::Null(inner) => {
            rewrap(node, transformer.transform_null_value(inner), Value::Null)
        },
        Value::Object(inner) => {
            rewrap(node, transformer.transform_object_value(inner), Value::Object)
        },
        Value::String(inner) => {
            rewrap(node, transformer.transform_string_value(inner), Value::String)
        },
        Value::Variable(inner) => {
            rewrap(node, transformer.transform_variable_value(inner), Value::Variable)
        },
    }
}

pub fn type_ref<'a, T>(transformer: &mut T, node: &'a TypeRef) -> Cow<'a, TypeRef>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        TypeRef::Named(inner) => {
            rewrap(node, transformer.transform_named_type_ref(inner), TypeRef::Named)
        },
        TypeRef::List(inner) => {
            rewrap(node, transformer.transform_list_type_ref(inner), TypeRef::List)
        },
        TypeRef::NonNull(inner) => {
            rewrap(node, transformer.transform_non_null_type_ref(inner), TypeRef::NonNull)
        },
    }
}

pub fn nullable_type_ref<'a, T>(transformer: &mut T, node: &'a NullableTypeRef) -> Cow<'a, NullableTypeRef>
where
    T: Transformer<'a> + ?Sized,
{
    match node {
        NullableTypeRef::Named(inner) => {
            rewrap(node, transformer.transform_named_type_ref(inner), NullableTypeRef::Named)
        },
        NullableTypeRef::List(inner) => {
            rewrap(node, transformer.transform_list_type_ref(inner), NullableTypeRef::List)
        },
    }
}

pub fn document<'a, T>(transformer: &mut T, node: &'a Document) -> Cow<'a, Document>
where
    T: Transformer<'a> + ?Sized,
{
    let definitions = list(&node.definitions, |n| transformer.transform_definition(n));
    if definitions.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(Document {
        origin: node.origin.clone(),
        definitions: definitions.unwrap_or_else(|| node.definitions.clone()),
    })
}

pub fn operation_definition<'a, T>(
    transformer: &mut T,
    node: &'a OperationDefinition,
) -> Cow<'a, OperationDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let name = optional(&node.name, |n| transformer.transform_name(n));
    let variable_definitions = list(&node.variable_definitions, |n| transformer.transform_variable_definition(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let selection_set = owned(transformer.transform_selection_set(&node.selection_set));
    if name.is_none()
        && variable_definitions.is_none()
        && directives.is_none()
        && selection_set.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(OperationDefinition {
        origin: node.origin.clone(),
        kind: node.kind.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        variable_definitions: variable_definitions.unwrap_or_else(|| node.variable_definitions.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        selection_set: selection_set.unwrap_or_else(|| node.selection_set.clone()),
    })
}

pub fn fragment_definition<'a, T>(
    transformer: &mut T,
    node: &'a FragmentDefinition,
) -> Cow<'a, FragmentDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let type_condition = owned(transformer.transform_named_type_ref(&node.type_condition));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let selection_set = owned(transformer.transform_selection_set(&node.selection_set));
    if name.is_none()
        && type_condition.is_none()
        && directives.is_none()
        && selection_set.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(FragmentDefinition {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        type_condition: type_condition.unwrap_or_else(|| node.type_condition.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        selection_set: selection_set.unwrap_or_else(|| node.selection_set.clone()),
    })
}

pub fn variable_definition<'a, T>(
    transformer: &mut T,
    node: &'a VariableDefinition,
) -> Cow<'a, VariableDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let type_ref = owned(transformer.transform_type_ref(&node.type_ref));
    let default_value = optional(&node.default_value, |n| transformer.transform_value(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if name.is_none() && type_ref.is_none() && default_value.is_none() && directives.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(VariableDefinition {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        type_ref: type_ref.unwrap_or_else(|| node.type_ref.clone()),
        default_value: default_value.unwrap_or_else(|| node.default_value.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn selection_set<'a, T>(transformer: &mut T, node: &'a SelectionSet) -> Cow<'a, SelectionSet>
where
    T: Transformer<'a> + ?Sized,
{
    let selections = list(&node.selections, |n| transformer.transform_selection(n));
    if selections.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(SelectionSet {
        origin: node.origin.clone(),
        selections: selections.unwrap_or_else(|| node.selections.clone()),
    })
}

pub fn field_selection<'a, T>(
    transformer: &mut T,
    node: &'a FieldSelection,
) -> Cow<'a, FieldSelection>
where
    T: Transformer<'a> + ?Sized,
{
    let alias = optional(&node.alias, |n| transformer.transform_name(n));
    let name = owned(transformer.transform_name(&node.name));
    let arguments = list(&node.arguments, |n| transformer.transform_argument(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let selection_set = optional(&node.selection_set, |n| transformer.transform_selection_set(n));
    if alias.is_none()
        && name.is_none()
        && arguments.is_none()
        && directives.is_none()
        && selection_set.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(FieldSelection {
        origin: node.origin.clone(),
        alias: alias.unwrap_or_else(|| node.alias.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        selection_set: selection_set.unwrap_or_else(|| node.selection_set.clone()),
    })
}

pub fn fragment_selection<'a, T>(
    transformer: &mut T,
    node: &'a FragmentSelection,
) -> Cow<'a, FragmentSelection>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if name.is_none() && directives.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(FragmentSelection {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn inline_fragment_selection<'a, T>(
    transformer: &mut T,
    node: &'a InlineFragmentSelection,
) -> Cow<'a, InlineFragmentSelection>
where
    T: Transformer<'a> + ?Sized,
{
    let type_condition = optional(&node.type_condition, |n| transformer.transform_named_type_ref(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let selection_set = owned(transformer.transform_selection_set(&node.selection_set));
    if type_condition.is_none() && directives.is_none() && selection_set.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(InlineFragmentSelection {
        origin: node.origin.clone(),
        type_condition: type_condition.unwrap_or_else(|| node.type_condition.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        selection_set: selection_set.unwrap_or_else(|| node.selection_set.clone()),
    })
}

pub fn argument<'a, T>(transformer: &mut T, node: &'a Argument) -> Cow<'a, Argument>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let value = owned(transformer.transform_value(&node.value));
    if name.is_none() && value.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(Argument {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        value: value.unwrap_or_else(|| node.value.clone()),
    })
}

pub fn directive<'a, T>(transformer: &mut T, node: &'a Directive) -> Cow<'a, Directive>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let arguments = list(&node.arguments, |n| transformer.transform_argument(n));
    if name.is_none() && arguments.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(Directive {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
    })
}

pub fn list_value<'a, T>(transformer: &mut T, node: &'a ListValue) -> Cow<'a, ListValue>
where
    T: Transformer<'a> + ?Sized,
{
    let values = list(&node.values, |n| transformer.transform_value(n));
    if values.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ListValue {
        origin: node.origin.clone(),
        values: values.unwrap_or_else(|| node.values.clone()),
    })
}

pub fn object_value<'a, T>(transformer: &mut T, node: &'a ObjectValue) -> Cow<'a, ObjectValue>
where
    T: Transformer<'a> + ?Sized,
{
    let fields = list(&node.fields, |n| transformer.transform_object_value_field(n));
    if fields.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ObjectValue {
        origin: node.origin.clone(),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn object_value_field<'a, T>(
    transformer: &mut T,
    node: &'a ObjectValueField,
) -> Cow<'a, ObjectValueField>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let value = owned(transformer.transform_value(&node.value));
    if name.is_none() && value.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ObjectValueField {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        value: value.unwrap_or_else(|| node.value.clone()),
    })
}

pub fn variable_value<'a, T>(transformer: &mut T, node: &'a VariableValue) -> Cow<'a, VariableValue>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    if name.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(VariableValue {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
    })
}

pub fn named_type_ref<'a, T>(transformer: &mut T, node: &'a NamedTypeRef) -> Cow<'a, NamedTypeRef>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    if name.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(NamedTypeRef {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
    })
}

pub fn list_type_ref<'a, T>(transformer: &mut T, node: &'a ListTypeRef) -> Cow<'a, ListTypeRef>
where
    T: Transformer<'a> + ?Sized,
{
    let element_type = owned(transformer.transform_type_ref(&node.element_type)).map(Box::new);
    if element_type.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ListTypeRef {
        origin: node.origin.clone(),
        element_type: element_type.unwrap_or_else(|| node.element_type.clone()),
    })
}

pub fn non_null_type_ref<'a, T>(
    transformer: &mut T,
    node: &'a NonNullTypeRef,
) -> Cow<'a, NonNullTypeRef>
where
    T: Transformer<'a> + ?Sized,
{
    let nullable_type = owned(transformer.transform_nullable_type_ref(&node.nullable_type));
    if nullable_type.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(NonNullTypeRef {
        origin: node.origin.clone(),
        nullable_type: nullable_type.unwrap_or_else(|| node.nullable_type.clone()),
    })
}

pub fn schema_definition<'a, T>(
    transformer: &mut T,
    node: &'a SchemaDefinition,
) -> Cow<'a, SchemaDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let operation_types = list(&node.operation_types, |n| transformer.transform_operation_type_definition(n));
    if description.is_none() && directives.is_none() && operation_types.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(SchemaDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        operation_types: operation_types.unwrap_or_else(|| node.operation_types.clone()),
    })
}

pub fn schema_extension<'a, T>(
    transformer: &mut T,
    node: &'a SchemaExtension,
) -> Cow<'a, SchemaExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let operation_types = list(&node.operation_types, |n| transformer.transform_operation_type_definition(n));
    if directives.is_none() && operation_types.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(SchemaExtension {
        origin: node.origin.clone(),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        operation_types: operation_types.unwrap_or_else(|| node.operation_types.clone()),
    })
}

pub fn operation_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a OperationTypeDefinition,
) -> Cow<'a, OperationTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let type_ref = owned(transformer.transform_named_type_ref(&node.type_ref));
    if type_ref.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(OperationTypeDefinition {
        origin: node.origin.clone(),
        operation: node.operation.clone(),
        type_ref: type_ref.unwrap_or_else(|| node.type_ref.clone()),
    })
}

pub fn scalar_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a ScalarTypeDefinition,
) -> Cow<'a, ScalarTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if description.is_none() && name.is_none() && directives.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ScalarTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn object_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a ObjectTypeDefinition,
) -> Cow<'a, ObjectTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let interfaces = list(&node.interfaces, |n| transformer.transform_named_type_ref(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_field_definition(n));
    if description.is_none()
        && name.is_none()
        && interfaces.is_none()
        && directives.is_none()
        && fields.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ObjectTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        interfaces: interfaces.unwrap_or_else(|| node.interfaces.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn interface_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a InterfaceTypeDefinition,
) -> Cow<'a, InterfaceTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let interfaces = list(&node.interfaces, |n| transformer.transform_named_type_ref(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_field_definition(n));
    if description.is_none()
        && name.is_none()
        && interfaces.is_none()
        && directives.is_none()
        && fields.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(InterfaceTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        interfaces: interfaces.unwrap_or_else(|| node.interfaces.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn union_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a UnionTypeDefinition,
) -> Cow<'a, UnionTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let member_types = list(&node.member_types, |n| transformer.transform_named_type_ref(n));
    if description.is_none() && name.is_none() && directives.is_none() && member_types.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(UnionTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        member_types: member_types.unwrap_or_else(|| node.member_types.clone()),
    })
}

pub fn enum_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a EnumTypeDefinition,
) -> Cow<'a, EnumTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let values = list(&node.values, |n| transformer.transform_enum_value_definition(n));
    if description.is_none() && name.is_none() && directives.is_none() && values.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(EnumTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        values: values.unwrap_or_else(|| node.values.clone()),
    })
}

pub fn input_object_type_definition<'a, T>(
    transformer: &mut T,
    node: &'a InputObjectTypeDefinition,
) -> Cow<'a, InputObjectTypeDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_argument_definition(n));
    if description.is_none() && name.is_none() && directives.is_none() && fields.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(InputObjectTypeDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn scalar_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a ScalarTypeExtension,
) -> Cow<'a, ScalarTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if name.is_none() && directives.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ScalarTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn object_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a ObjectTypeExtension,
) -> Cow<'a, ObjectTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let interfaces = list(&node.interfaces, |n| transformer.transform_named_type_ref(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_field_definition(n));
    if name.is_none() && interfaces.is_none() && directives.is_none() && fields.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ObjectTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        interfaces: interfaces.unwrap_or_else(|| node.interfaces.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn interface_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a InterfaceTypeExtension,
) -> Cow<'a, InterfaceTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let interfaces = list(&node.interfaces, |n| transformer.transform_named_type_ref(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_field_definition(n));
    if name.is_none() && interfaces.is_none() && directives.is_none() && fields.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(InterfaceTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        interfaces: interfaces.unwrap_or_else(|| node.interfaces.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn union_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a UnionTypeExtension,
) -> Cow<'a, UnionTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let member_types = list(&node.member_types, |n| transformer.transform_named_type_ref(n));
    if name.is_none() && directives.is_none() && member_types.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(UnionTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        member_types: member_types.unwrap_or_else(|| node.member_types.clone()),
    })
}

pub fn enum_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a EnumTypeExtension,
) -> Cow<'a, EnumTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let values = list(&node.values, |n| transformer.transform_enum_value_definition(n));
    if name.is_none() && directives.is_none() && values.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(EnumTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        values: values.unwrap_or_else(|| node.values.clone()),
    })
}

pub fn input_object_type_extension<'a, T>(
    transformer: &mut T,
    node: &'a InputObjectTypeExtension,
) -> Cow<'a, InputObjectTypeExtension>
where
    T: Transformer<'a> + ?Sized,
{
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    let fields = list(&node.fields, |n| transformer.transform_argument_definition(n));
    if name.is_none() && directives.is_none() && fields.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(InputObjectTypeExtension {
        origin: node.origin.clone(),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
        fields: fields.unwrap_or_else(|| node.fields.clone()),
    })
}

pub fn enum_value_definition<'a, T>(
    transformer: &mut T,
    node: &'a EnumValueDefinition,
) -> Cow<'a, EnumValueDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if description.is_none() && name.is_none() && directives.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(EnumValueDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn directive_definition<'a, T>(
    transformer: &mut T,
    node: &'a DirectiveDefinition,
) -> Cow<'a, DirectiveDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let arguments = list(&node.arguments, |n| transformer.transform_argument_definition(n));
    let locations = list(&node.locations, |n| transformer.transform_name(n));
    if description.is_none() && name.is_none() && arguments.is_none() && locations.is_none() {
        return Cow::Borrowed(node);
    }
    Cow::Owned(DirectiveDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
        is_repeatable: node.is_repeatable.clone(),
        locations: locations.unwrap_or_else(|| node.locations.clone()),
    })
}

pub fn field_definition<'a, T>(
    transformer: &mut T,
    node: &'a FieldDefinition,
) -> Cow<'a, FieldDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let arguments = list(&node.arguments, |n| transformer.transform_argument_definition(n));
    let type_ref = owned(transformer.transform_type_ref(&node.type_ref));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if description.is_none()
        && name.is_none()
        && arguments.is_none()
        && type_ref.is_none()
        && directives.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(FieldDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        arguments: arguments.unwrap_or_else(|| node.arguments.clone()),
        type_ref: type_ref.unwrap_or_else(|| node.type_ref.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}

pub fn argument_definition<'a, T>(
    transformer: &mut T,
    node: &'a ArgumentDefinition,
) -> Cow<'a, ArgumentDefinition>
where
    T: Transformer<'a> + ?Sized,
{
    let description = optional(&node.description, |n| transformer.transform_string_value(n));
    let name = owned(transformer.transform_name(&node.name));
    let type_ref = owned(transformer.transform_type_ref(&node.type_ref));
    let default_value = optional(&node.default_value, |n| transformer.transform_value(n));
    let directives = list(&node.directives, |n| transformer.transform_directive(n));
    if description.is_none()
        && name.is_none()
        && type_ref.is_none()
        && default_value.is_none()
        && directives.is_none()
    {
        return Cow::Borrowed(node);
    }
    Cow::Owned(ArgumentDefinition {
        origin: node.origin.clone(),
        description: description.unwrap_or_else(|| node.description.clone()),
        name: name.unwrap_or_else(|| node.name.clone()),
        type_ref: type_ref.unwrap_or_else(|| node.type_ref.clone()),
        default_value: default_value.unwrap_or_else(|| node.default_value.clone()),
        directives: directives.unwrap_or_else(|| node.directives.clone()),
    })
}
