//! Tests for [`Visitor`] default cascading and [`Accept`] dispatch.

use crate::Accept;
use crate::Visitor;
use crate::tests::tree_utils::find_kind;
use crate::tests::tree_utils::parse;
use crate::tests::tree_utils::pre_order;
use gqlfront_parser::ast::IntValue;
use gqlfront_parser::ast::NodeRef;
use gqlfront_parser::ast::OperationDefinition;
use gqlfront_parser::parse_value;

/// Overrides a value kind, the value category and the root.
struct ValueMethods;

impl<'a> Visitor<'a> for ValueMethods {
    type Data = ();
    type Output = &'static str;

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_node"
    }

    fn visit_value(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_value"
    }

    fn visit_int_value(&mut self, _node: &'a IntValue, _data: ()) -> &'static str {
        "visit_int_value"
    }
}

/// Verifies that the most specific override handles a dispatch.
#[test]
fn most_specific_override_wins() {
    let int = parse_value("1").unwrap();
    assert_eq!(int.accept(&mut ValueMethods, ()), "visit_int_value");

    let string = parse_value("\"s\"").unwrap();
    assert_eq!(string.accept(&mut ValueMethods, ()), "visit_value");

    let list = parse_value("[1]").unwrap();
    assert_eq!(list.accept(&mut ValueMethods, ()), "visit_value");

    let document = parse("{ a }");
    assert_eq!(document.accept(&mut ValueMethods, ()), "visit_node");
}

/// Overrides every category method.
struct CategoryMethods;

impl<'a> Visitor<'a> for CategoryMethods {
    type Data = ();
    type Output = &'static str;

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_node"
    }

    fn visit_definition(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_definition"
    }

    fn visit_executable_definition(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_executable_definition"
    }

    fn visit_type_system_definition(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_type_system_definition"
    }

    fn visit_type_definition(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_type_definition"
    }

    fn visit_type_system_extension(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_type_system_extension"
    }

    fn visit_type_extension(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_type_extension"
    }

    fn visit_selection(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_selection"
    }

    fn visit_value(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_value"
    }

    fn visit_type_ref(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_type_ref"
    }
}

const EVERY_CATEGORY: &str = "
    query Q($v: [Int!]) { a(x: [1]) @d ...F ... on T { b } }
    fragment F on T { c }
    schema { query: Q }
    type T { f: Int }
    directive @d on FIELD
    extend schema @d
    extend enum E { A }
";

/// Verifies that each concrete kind reaches its category method.
#[test]
fn kinds_reach_their_category() {
    let document = parse(EVERY_CATEGORY);
    let root = document.as_node_ref();
    let expectations = [
        ("OperationDefinition", "visit_executable_definition"),
        ("FragmentDefinition", "visit_executable_definition"),
        ("SchemaDefinition", "visit_type_system_definition"),
        ("DirectiveDefinition", "visit_type_system_definition"),
        ("ObjectTypeDefinition", "visit_type_definition"),
        ("SchemaExtension", "visit_type_system_extension"),
        ("EnumTypeExtension", "visit_type_extension"),
        ("FieldSelection", "visit_selection"),
        ("FragmentSelection", "visit_selection"),
        ("InlineFragmentSelection", "visit_selection"),
        ("ListValue", "visit_value"),
        ("IntValue", "visit_value"),
        ("ListTypeRef", "visit_type_ref"),
        ("NonNullTypeRef", "visit_type_ref"),
        ("NamedTypeRef", "visit_type_ref"),
        ("Document", "visit_node"),
        ("VariableDefinition", "visit_node"),
        ("SelectionSet", "visit_node"),
        ("Argument", "visit_node"),
        ("Directive", "visit_node"),
        ("Name", "visit_node"),
        ("FieldDefinition", "visit_node"),
        ("OperationTypeDefinition", "visit_node"),
        ("EnumValueDefinition", "visit_node"),
    ];
    for (kind_name, method) in expectations {
        let node = find_kind(root, kind_name);
        assert_eq!(node.accept(&mut CategoryMethods, ()), method, "{kind_name}");
    }
}

/// Overrides only `visit_definition` below the root.
struct DefinitionsOnly;

impl<'a> Visitor<'a> for DefinitionsOnly {
    type Data = ();
    type Output = &'static str;

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_node"
    }

    fn visit_definition(&mut self, _node: NodeRef<'a>, _data: ()) -> &'static str {
        "visit_definition"
    }
}

/// Verifies that categories cascade through every intermediate level.
#[test]
fn categories_cascade_to_broader_categories() {
    let document = parse(EVERY_CATEGORY);
    for definition in &document.definitions {
        assert_eq!(definition.accept(&mut DefinitionsOnly, ()), "visit_definition");
    }
    let field = find_kind(document.as_node_ref(), "FieldSelection");
    assert_eq!(field.accept(&mut DefinitionsOnly, ()), "visit_node");
}

/// Hands every node back unchanged.
struct Identity;

impl<'a> Visitor<'a> for Identity {
    type Data = ();
    type Output = NodeRef<'a>;

    fn visit_node(&mut self, node: NodeRef<'a>, _data: ()) -> NodeRef<'a> {
        node
    }
}

/// Verifies that `visit_node` sees every node as itself, whatever its
/// kind, including when dispatched through a category enum.
#[test]
fn visit_node_sees_every_node() {
    let document = parse(EVERY_CATEGORY);
    for node in pre_order(document.as_node_ref()) {
        assert!(node.accept(&mut Identity, ()).same_node(node), "{}", node.kind_name());
    }
    let operation = document.operations().next().unwrap();
    let dispatched = document.definitions[0].accept(&mut Identity, ());
    assert!(dispatched.same_node(operation.as_node_ref()));
}

/// Counts how often each method runs, threading a counter through data.
#[derive(Default)]
struct OperationCounter {
    operations: usize,
}

impl<'a> Visitor<'a> for OperationCounter {
    type Data = usize;
    type Output = usize;

    fn visit_node(&mut self, _node: NodeRef<'a>, data: usize) -> usize {
        data
    }

    fn visit_operation_definition(&mut self, node: &'a OperationDefinition, data: usize) -> usize {
        self.operations += 1;
        // Falling back to the default keeps the cascade going.
        self.visit_executable_definition(node.as_node_ref(), data + 1)
    }
}

/// Verifies that an override can hand off to the default chain with new
/// data.
#[test]
fn override_can_continue_the_cascade() {
    let document = parse("query A { a } query B { b }");
    let mut counter = OperationCounter::default();
    let outputs: Vec<usize> = document
        .definitions
        .iter()
        .map(|definition| definition.accept(&mut counter, 10))
        .collect();
    assert_eq!(outputs, [11, 11]);
    assert_eq!(counter.operations, 2);
}
