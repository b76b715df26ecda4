//! Tests for the schema context [`ContextualVisitor`] tracks.

use crate::ContextualData;
use crate::ContextualVisitor;
use crate::DocumentSchema;
use crate::SchemaType;
use crate::Visitor;
use crate::VisitorContext;
use crate::tests::tree_utils::parse;
use gqlfront_parser::ast::ArgumentDefinition;
use gqlfront_parser::ast::FieldDefinition;
use gqlfront_parser::ast::FieldSelection;
use gqlfront_parser::ast::InlineFragmentSelection;
use gqlfront_parser::ast::NodeRef;
use gqlfront_parser::ast::VariableDefinition;
use std::panic::AssertUnwindSafe;

const SCHEMA: &str = "
    type Query { hero: Character droid(id: ID!): Droid }
    interface Character { name: String friends: [Character] }
    type Droid implements Character {
        name: String
        friends: [Character]
        primaryFunction(format: Format = SHORT): String
    }
    enum Format { SHORT LONG }
";

/// The context seen at one field selection.
#[derive(Debug, PartialEq)]
struct FieldRecord {
    name: String,
    parent_type: Option<String>,
    related_type: Option<String>,
    has_definition: bool,
    operation: Option<String>,
    fragment: Option<String>,
}

/// Records the context of every field selection.
#[derive(Default)]
struct FieldContexts<'s> {
    records: Vec<FieldRecord>,
    definitions: Vec<Option<&'s FieldDefinition>>,
}

impl<'a, 's> Visitor<'a> for FieldContexts<'s> {
    type Data = ContextualData<'a, 's, ()>;
    type Output = ();

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: Self::Data) {}

    fn visit_field_selection(&mut self, node: &'a FieldSelection, data: Self::Data) {
        let context = data.context;
        self.definitions.push(context.related_field_definition);
        self.records.push(FieldRecord {
            name: node.name.as_str().to_string(),
            parent_type: context.related_parent_type.map(|t| t.to_string()),
            related_type: context.related_type.map(|t| t.to_string()),
            has_definition: context.related_field_definition.is_some(),
            operation: context
                .related_operation_definition
                .and_then(|operation| operation.name.as_ref())
                .map(|name| name.as_str().to_string()),
            fragment: context
                .related_fragment_definition
                .map(|fragment| fragment.name.as_str().to_string()),
        });
    }
}

fn record(
    name: &str,
    parent_type: Option<&str>,
    related_type: Option<&str>,
    operation: Option<&str>,
    fragment: Option<&str>,
) -> FieldRecord {
    FieldRecord {
        name: name.to_string(),
        parent_type: parent_type.map(str::to_string),
        related_type: related_type.map(str::to_string),
        has_definition: related_type.is_some(),
        operation: operation.map(str::to_string),
        fragment: fragment.map(str::to_string),
    }
}

/// Verifies field, fragment and inline fragment context updates.
#[test]
fn field_contexts_follow_the_schema() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse(
        "query Q { hero { name friends { name } } ...F } \
         fragment F on Query { droid(id: 1) { ... on Droid { primaryFunction } } }",
    );
    let mut visitor = ContextualVisitor::new(FieldContexts::default(), &schema, &document);
    visitor.walk(());
    let records = visitor.into_inner().records;
    assert_eq!(
        records,
        [
            record("hero", Some("Query"), Some("Character"), Some("Q"), None),
            record("name", Some("Character"), Some("String"), Some("Q"), None),
            record("friends", Some("Character"), Some("[Character]"), Some("Q"), None),
            record("name", Some("[Character]"), Some("String"), Some("Q"), None),
            record("droid", Some("Query"), Some("Droid"), None, Some("F")),
            record("primaryFunction", Some("Droid"), Some("String"), None, Some("F")),
        ],
    );
}

/// Verifies that a sibling sees its parent's context, not the context its
/// previous sibling's subtree set up.
#[test]
fn siblings_start_from_the_parent_context() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse("{ hero { friends { name } name } droid(id: 1) { name } }");
    let mut visitor = ContextualVisitor::new(FieldContexts::default(), &schema, &document);
    visitor.walk(());
    let parents: Vec<(String, Option<String>)> = visitor
        .inner()
        .records
        .iter()
        .map(|record| (record.name.clone(), record.parent_type.clone()))
        .collect();
    let parent = |name: &str, parent_type: &str| (name.to_string(), Some(parent_type.to_string()));
    assert_eq!(
        parents,
        [
            parent("hero", "Query"),
            parent("friends", "Character"),
            parent("name", "[Character]"),
            parent("name", "Character"),
            parent("droid", "Query"),
            parent("name", "Droid"),
        ],
    );
    assert_eq!(visitor.context(), VisitorContext::default());
}

/// Verifies that unknown fields clear the types below them.
#[test]
fn unknown_fields_clear_the_type() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse("{ villain { name } hero { name } }");
    let mut visitor = ContextualVisitor::new(FieldContexts::default(), &schema, &document);
    visitor.walk(());
    let inner = visitor.into_inner();
    assert_eq!(
        inner.records,
        [
            record("villain", Some("Query"), None, None, None),
            record("name", None, None, None, None),
            record("hero", Some("Query"), Some("Character"), None, None),
            record("name", Some("Character"), Some("String"), None, None),
        ],
    );
    assert_eq!(
        inner
            .definitions
            .iter()
            .map(|definition| definition.map(|d| d.name.as_str()))
            .collect::<Vec<_>>(),
        [None, None, Some("hero"), Some("name")],
    );
}

/// Verifies that operations without a root type have no related type.
#[test]
fn missing_root_type() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse("mutation M { like }");
    let mut visitor = ContextualVisitor::new(FieldContexts::default(), &schema, &document);
    visitor.walk(());
    assert_eq!(
        visitor.into_inner().records,
        [record("like", None, None, Some("M"), None)],
    );
}

/// Records the related type at inline fragments, variables and schema
/// elements.
#[derive(Default)]
struct RelatedTypes<'s> {
    types: Vec<(&'static str, Option<SchemaType<'s>>)>,
}

impl<'a, 's> Visitor<'a> for RelatedTypes<'s> {
    type Data = ContextualData<'a, 's, ()>;
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, data: Self::Data) {
        if matches!(
            node,
            NodeRef::ObjectTypeDefinition(_) | NodeRef::EnumTypeExtension(_),
        ) {
            self.push(node.kind_name(), data);
        }
    }

    fn visit_inline_fragment_selection(
        &mut self,
        _node: &'a InlineFragmentSelection,
        data: Self::Data,
    ) {
        self.push("InlineFragmentSelection", data);
    }

    fn visit_variable_definition(&mut self, _node: &'a VariableDefinition, data: Self::Data) {
        self.push("VariableDefinition", data);
    }

    fn visit_argument_definition(&mut self, _node: &'a ArgumentDefinition, data: Self::Data) {
        self.push("ArgumentDefinition", data);
    }

    fn visit_field_definition(&mut self, _node: &'a FieldDefinition, data: Self::Data) {
        self.push("FieldDefinition", data);
    }
}

impl<'s> RelatedTypes<'s> {
    fn push(&mut self, kind_name: &'static str, data: ContextualData<'_, 's, ()>) {
        self.types.push((kind_name, data.context.related_type));
    }

    fn rendered(&self) -> Vec<(&'static str, Option<String>)> {
        self.types
            .iter()
            .map(|(kind_name, related_type)| {
                (*kind_name, related_type.as_ref().map(|t| t.to_string()))
            })
            .collect()
    }
}

fn related(kind_name: &'static str, related_type: &str) -> (&'static str, Option<String>) {
    (kind_name, Some(related_type.to_string()))
}

/// Verifies the related types of type system definitions and extensions.
#[test]
fn schema_elements_set_the_related_type() {
    let schema_document = parse(&format!("{SCHEMA} extend enum Format {{ FULL }}"));
    let schema = DocumentSchema::new(&schema_document);
    let mut visitor =
        ContextualVisitor::new(RelatedTypes::default(), &schema, &schema_document);
    visitor.walk(());
    assert_eq!(
        visitor.inner().rendered(),
        [
            related("ObjectTypeDefinition", "Query"),
            related("FieldDefinition", "Character"),
            related("FieldDefinition", "Droid"),
            related("ArgumentDefinition", "ID!"),
            related("FieldDefinition", "String"),
            related("FieldDefinition", "[Character]"),
            related("ObjectTypeDefinition", "Droid"),
            related("FieldDefinition", "String"),
            related("FieldDefinition", "[Character]"),
            related("FieldDefinition", "String"),
            related("ArgumentDefinition", "Format"),
            related("EnumTypeExtension", "Format"),
        ],
    );
}

/// Verifies variables and inline fragments, with and without a type
/// condition.
#[test]
fn variables_and_inline_fragments() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse(
        "query Q($id: ID!, $format: [Format], $other: Starship) { \
           droid(id: $id) { ... @include(if: true) { name } ... on Character { name } } \
         }",
    );
    let mut visitor = ContextualVisitor::new(RelatedTypes::default(), &schema, &document);
    visitor.walk(());
    assert_eq!(
        visitor.inner().rendered(),
        [
            related("VariableDefinition", "ID!"),
            related("VariableDefinition", "[Format]"),
            ("VariableDefinition", None),
            related("InlineFragmentSelection", "Droid"),
            related("InlineFragmentSelection", "Character"),
        ],
    );
}

/// Panics when it reaches a field with the given name.
struct PanicAt<'s> {
    name: &'static str,
    reached: Vec<Option<SchemaType<'s>>>,
}

impl<'a, 's> Visitor<'a> for PanicAt<'s> {
    type Data = ContextualData<'a, 's, ()>;
    type Output = ();

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: Self::Data) {}

    fn visit_field_selection(&mut self, node: &'a FieldSelection, data: Self::Data) {
        self.reached.push(data.context.related_parent_type);
        if node.name.as_str() == self.name {
            panic!("reached {}", self.name);
        }
    }
}

/// Verifies that the context is restored when the inner visitor panics
/// part way through a walk.
#[test]
fn context_is_restored_after_a_panic() {
    let schema_document = parse(SCHEMA);
    let schema = DocumentSchema::new(&schema_document);
    let document = parse("{ hero { friends { name } } }");
    let mut visitor = ContextualVisitor::new(
        PanicAt {
            name: "name",
            reached: Vec::new(),
        },
        &schema,
        &document,
    );
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| visitor.walk(())));
    assert!(result.is_err());
    assert_eq!(visitor.context(), VisitorContext::default());
    assert_eq!(visitor.inner().reached.len(), 3);

    visitor.inner_mut().name = "none";
    visitor.inner_mut().reached.clear();
    visitor.walk(());
    assert_eq!(
        visitor
            .inner()
            .reached
            .iter()
            .map(|parent| parent.as_ref().map(|t| t.to_string()))
            .collect::<Vec<_>>(),
        [
            Some("Query".to_string()),
            Some("Character".to_string()),
            Some("[Character]".to_string()),
        ],
    );
}
