use crate::BuiltInScalar;
use crate::NamedType;
use crate::Schema;
use crate::SchemaType;
use gqlfront_parser::ast::Definition;
use gqlfront_parser::ast::Document;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::OperationKind;
use gqlfront_parser::ast::OperationTypeDefinition;
use gqlfront_parser::ast::TypeDefinition;
use gqlfront_parser::ast::TypeExtension;
use indexmap::IndexMap;
use indexmap::map::Entry;
use inherent::inherent;

/// A [`Schema`] over the type system definitions of a parsed document.
///
/// Types are kept in an arena keyed by name and built in two passes:
/// first every type definition is declared, then extensions are attached
/// to the types they extend and root operation types are resolved. Root
/// types come from `schema { ... }` (and `extend schema`) if the document
/// has one; otherwise the types named `Query`, `Mutation` and
/// `Subscription` are used when they exist.
///
/// No validation happens here. For a name defined more than once the first
/// definition wins, and extensions of undefined types are ignored.
///
/// ```rust
/// use gqlfront_parser::ast::OperationKind;
/// use gqlfront_visit::DocumentSchema;
/// use gqlfront_visit::Schema;
/// use gqlfront_visit::SchemaType;
///
/// let document = gqlfront_parser::parse_document(
///     "type Query { me: User } type User { id: ID! } extend type User { name: String }",
/// ).unwrap();
/// let schema = DocumentSchema::new(&document);
/// let query = schema.root_type_for_operation(OperationKind::Query).unwrap();
/// let me = schema.field_definition(&SchemaType::Named(query), "me").unwrap();
/// let user = schema.resolve_type(&me.type_ref).unwrap();
/// assert!(schema.field_definition(&user, "name").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentSchema<'s> {
    types: IndexMap<&'s str, TypeEntry<'s>>,
    root_types: IndexMap<OperationKind, &'s str>,
}

#[derive(Clone, Debug)]
struct TypeEntry<'s> {
    definition: &'s TypeDefinition,
    extensions: Vec<&'s TypeExtension>,
}

impl<'s> TypeEntry<'s> {
    fn fields(&self) -> impl Iterator<Item = &'s FieldDefinition> {
        self.definition.fields().iter().chain(
            self.extensions
                .iter()
                .copied()
                .flat_map(TypeExtension::fields),
        )
    }
}

impl<'s> DocumentSchema<'s> {
    pub fn new(document: &'s Document) -> Self {
        let mut schema = Self::default();
        schema.declare_types(document);
        schema.attach_extensions_and_roots(document);
        log::debug!(
            "Built a schema with {} type(s) and {} root operation type(s)",
            schema.types.len(),
            schema.root_types.len(),
        );
        schema
    }

    fn declare_types(&mut self, document: &'s Document) {
        for definition in &document.definitions {
            let Definition::Type(type_definition) = definition else {
                continue;
            };
            let name = type_definition.name().as_str();
            match self.types.entry(name) {
                Entry::Vacant(entry) => {
                    log::trace!("Declared type `{name}`");
                    entry.insert(TypeEntry {
                        definition: type_definition,
                        extensions: Vec::new(),
                    });
                },
                Entry::Occupied(_) => {
                    log::trace!("Ignored duplicate definition of type `{name}`");
                },
            }
        }
    }

    fn attach_extensions_and_roots(&mut self, document: &'s Document) {
        let mut has_schema_definition = false;
        for definition in &document.definitions {
            match definition {
                Definition::TypeExtension(extension) => {
                    let name = extension.name().as_str();
                    match self.types.get_mut(name) {
                        Some(entry) => entry.extensions.push(extension),
                        None => log::trace!("Ignored extension of undefined type `{name}`"),
                    }
                },
                Definition::Schema(schema_definition) => {
                    has_schema_definition = true;
                    self.add_root_types(&schema_definition.operation_types);
                },
                Definition::SchemaExtension(schema_extension) => {
                    has_schema_definition = true;
                    self.add_root_types(&schema_extension.operation_types);
                },
                _ => {},
            }
        }

        if !has_schema_definition {
            for kind in [
                OperationKind::Query,
                OperationKind::Mutation,
                OperationKind::Subscription,
            ] {
                let name = kind.default_root_type_name();
                if self.types.contains_key(name) {
                    self.root_types.insert(kind, name);
                }
            }
        }
    }

    fn add_root_types(&mut self, operation_types: &'s [OperationTypeDefinition]) {
        for operation_type in operation_types {
            self.root_types
                .entry(operation_type.operation)
                .or_insert(operation_type.type_ref.name.as_str());
        }
    }

    /// Names of all defined types, in document order.
    pub fn type_names(&self) -> impl Iterator<Item = &'s str> {
        self.types.keys().copied()
    }

    /// Extensions attached to the type called `name`, in document order.
    pub fn extensions_of(&self, name: &str) -> &[&'s TypeExtension] {
        self.types
            .get(name)
            .map(|entry| entry.extensions.as_slice())
            .unwrap_or_default()
    }

    /// Fields of the type called `name` followed by those added by its
    /// extensions.
    pub fn fields_of(&self, name: &str) -> Vec<&'s FieldDefinition> {
        self.types
            .get(name)
            .map(|entry| entry.fields().collect())
            .unwrap_or_default()
    }
}

#[inherent]
impl<'s> Schema<'s> for DocumentSchema<'s> {
    pub fn named_type(&self, name: &str) -> Option<NamedType<'s>> {
        match self.types.get(name) {
            Some(entry) => Some(NamedType::Defined(entry.definition)),
            None => BuiltInScalar::from_name(name).map(NamedType::BuiltIn),
        }
    }

    pub fn field_definition(
        &self,
        parent_type: &SchemaType<'s>,
        name: &str,
    ) -> Option<&'s FieldDefinition> {
        self.types
            .get(parent_type.named_type().name())?
            .fields()
            .find(|field| field.name.as_str() == name)
    }

    pub fn root_type_for_operation(&self, kind: OperationKind) -> Option<NamedType<'s>> {
        let name = self.root_types.get(&kind)?;
        self.named_type(name)
    }
}
