//! The GraphQL abstract syntax tree.
//!
//! Every node is an immutable plain struct with public fields and an
//! optional [`Origin`](crate::Origin). Nodes own their strings, so a tree
//! outlives the source text it was parsed from and is `Send + Sync`.
//!
//! Nodes fall into closed categories, each an enum over concrete kinds:
//! [`Definition`], [`TypeDefinition`], [`TypeExtension`], [`Selection`],
//! [`Value`] and [`TypeRef`]. Generic code works through [`NodeRef`].
//!
//! ```rust
//! use gqlfront_parser::ast::Definition;
//! use gqlfront_parser::ast::Selection;
//!
//! let document = gqlfront_parser::parse_document("{ hero { name } }").unwrap();
//! let Definition::Operation(operation) = &document.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! let Selection::Field(hero) = &operation.selection_set.selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(hero.name.as_str(), "hero");
//! ```

mod argument;
mod argument_definition;
mod ast_node;
mod boolean_value;
mod definition;
mod directive;
mod directive_definition;
mod directive_location;
mod document;
mod enum_type_definition;
mod enum_type_extension;
mod enum_value;
mod enum_value_definition;
mod field_definition;
mod field_selection;
mod float_value;
mod fragment_definition;
mod fragment_selection;
mod inline_fragment_selection;
mod input_object_type_definition;
mod input_object_type_extension;
mod int_value;
mod interface_type_definition;
mod interface_type_extension;
mod list_type_ref;
mod list_value;
mod name;
mod named_type_ref;
mod node_ref;
mod non_null_type_ref;
mod null_value;
mod nullable_type_ref;
mod object_type_definition;
mod object_type_extension;
mod object_value;
mod object_value_field;
mod operation_definition;
mod operation_kind;
mod operation_type_definition;
mod scalar_type_definition;
mod scalar_type_extension;
mod schema_definition;
mod schema_extension;
mod selection;
mod selection_set;
mod string_value;
mod type_definition;
mod type_extension;
mod type_ref;
mod union_type_definition;
mod union_type_extension;
mod value;
mod variable_definition;
mod variable_value;

pub use argument::Argument;
pub use argument_definition::ArgumentDefinition;
pub use ast_node::AstNode;
pub use ast_node::EqualsAst;
pub use ast_node::NodeChildren;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_extension::EnumTypeExtension;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use field_selection::FieldSelection;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_selection::FragmentSelection;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_object_type_extension::InputObjectTypeExtension;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use interface_type_extension::InterfaceTypeExtension;
pub use list_type_ref::ListTypeRef;
pub use list_value::ListValue;
pub use name::Name;
pub use named_type_ref::NamedTypeRef;
pub use node_ref::NodeRef;
pub use non_null_type_ref::NonNullTypeRef;
pub use null_value::NullValue;
pub use nullable_type_ref::NullableTypeRef;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_type_extension::ObjectTypeExtension;
pub use object_value::ObjectValue;
pub use object_value_field::ObjectValueField;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use operation_type_definition::OperationTypeDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use scalar_type_extension::ScalarTypeExtension;
pub use schema_definition::SchemaDefinition;
pub use schema_extension::SchemaExtension;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_definition::TypeDefinition;
pub use type_extension::TypeExtension;
pub use type_ref::TypeRef;
pub use union_type_definition::UnionTypeDefinition;
pub use union_type_extension::UnionTypeExtension;
pub use value::Value;
pub use value::ValueType;
pub use variable_definition::VariableDefinition;
pub use variable_value::VariableValue;

#[cfg(test)]
mod tests;
