use crate::NamedType;
use crate::SchemaType;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::NullableTypeRef;
use gqlfront_parser::ast::OperationKind;
use gqlfront_parser::ast::TypeRef;

/// Type information a [`ContextualVisitor`](crate::ContextualVisitor)
/// looks up while walking an executable document.
///
/// Lookups are by name, so implementations never need to resolve (or
/// guard against) cycles in the type graph. [`DocumentSchema`](crate::DocumentSchema)
/// implements this over a parsed type system document.
pub trait Schema<'s> {
    /// The type called `name`, built-in scalars included.
    fn named_type(&self, name: &str) -> Option<NamedType<'s>>;

    /// The field `name` of the named type at the core of `parent_type`.
    /// `None` if that type has no such field or no fields at all.
    fn field_definition(
        &self,
        parent_type: &SchemaType<'s>,
        name: &str,
    ) -> Option<&'s FieldDefinition>;

    /// The root type operations of `kind` start from.
    fn root_type_for_operation(&self, kind: OperationKind) -> Option<NamedType<'s>>;

    /// Resolves a type reference. `None` if the named type at its core is
    /// unknown.
    fn resolve_type(&self, type_ref: &TypeRef) -> Option<SchemaType<'s>> {
        match type_ref {
            TypeRef::Named(named) => self.named_type(named.name.as_str()).map(SchemaType::Named),
            TypeRef::List(list) => {
                let element_type = self.resolve_type(&list.element_type)?;
                Some(SchemaType::List(Box::new(element_type)))
            },
            TypeRef::NonNull(non_null) => {
                let nullable_type = match &non_null.nullable_type {
                    NullableTypeRef::Named(named) => {
                        SchemaType::Named(self.named_type(named.name.as_str())?)
                    },
                    NullableTypeRef::List(list) => {
                        SchemaType::List(Box::new(self.resolve_type(&list.element_type)?))
                    },
                };
                Some(SchemaType::NonNull(Box::new(nullable_type)))
            },
        }
    }
}
