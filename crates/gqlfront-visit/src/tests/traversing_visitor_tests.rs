//! Tests for [`TraversingVisitor`] and its [`TraversalStack`].

use crate::TraversalStack;
use crate::TraversingVisitor;
use crate::Visitor;
use crate::tests::tree_utils::kind_names;
use crate::tests::tree_utils::parse;
use crate::tests::tree_utils::pre_order;
use gqlfront_parser::ast::FieldSelection;
use gqlfront_parser::ast::NodeRef;
use gqlfront_parser::ast::SelectionSet;
use std::panic::AssertUnwindSafe;

/// Records kinds and descends everywhere.
#[derive(Default)]
struct DescendEverywhere<'a> {
    stack: TraversalStack<'a, ()>,
    seen: Vec<&'static str>,
    max_depth: usize,
}

impl<'a> Visitor<'a> for DescendEverywhere<'a> {
    type Data = ();
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, _data: ()) {
        self.seen.push(node.kind_name());
        self.max_depth = self.max_depth.max(self.stack.depth());
        self.descend();
    }
}

impl<'a> TraversingVisitor<'a> for DescendEverywhere<'a> {
    fn traversal_stack(&self) -> &TraversalStack<'a, ()> {
        &self.stack
    }
}

/// Verifies that descending everywhere visits the whole tree in
/// pre-order and leaves the stack empty.
#[test]
fn descending_everywhere_visits_in_pre_order() {
    let document = parse("query Q($v: Int = 1) { a(x: $v) { b } ...F } fragment F on T { c }");
    let mut visitor = DescendEverywhere::default();
    visitor.traverse(document.as_node_ref(), ());
    assert_eq!(visitor.seen, kind_names(&pre_order(document.as_node_ref())));
    assert!(visitor.stack.is_empty());
}

/// Verifies the stack holds one frame per active dispatch.
#[test]
fn stack_depth_tracks_nesting() {
    // Document > OperationDefinition > SelectionSet > FieldSelection > Name
    let document = parse("{ a }");
    let mut visitor = DescendEverywhere::default();
    visitor.traverse(document.as_node_ref(), ());
    assert_eq!(visitor.max_depth, 5);
}

/// Descends everywhere except into fields.
#[derive(Default)]
struct StopAtFields<'a> {
    stack: TraversalStack<'a, ()>,
    seen: Vec<&'static str>,
}

impl<'a> Visitor<'a> for StopAtFields<'a> {
    type Data = ();
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, _data: ()) {
        self.seen.push(node.kind_name());
        self.descend();
    }

    fn visit_field_selection(&mut self, node: &'a FieldSelection, _data: ()) {
        self.seen.push(node.as_node_ref().kind_name());
    }
}

impl<'a> TraversingVisitor<'a> for StopAtFields<'a> {
    fn traversal_stack(&self) -> &TraversalStack<'a, ()> {
        &self.stack
    }
}

/// Verifies that children are not visited unless the visitor descends.
#[test]
fn children_need_an_explicit_descend() {
    let document = parse("{ a { b } c }");
    let mut visitor = StopAtFields::default();
    visitor.traverse(document.as_node_ref(), ());
    assert_eq!(
        visitor.seen,
        [
            "Document",
            "OperationDefinition",
            "SelectionSet",
            "FieldSelection",
            "FieldSelection",
        ],
    );
}

/// Counts the nodes of each subtree from its children's outputs.
#[derive(Default)]
struct SubtreeSize<'a> {
    stack: TraversalStack<'a, ()>,
}

impl<'a> Visitor<'a> for SubtreeSize<'a> {
    type Data = ();
    type Output = usize;

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) -> usize {
        1 + self.descend().into_iter().sum::<usize>()
    }
}

impl<'a> TraversingVisitor<'a> for SubtreeSize<'a> {
    fn traversal_stack(&self) -> &TraversalStack<'a, ()> {
        &self.stack
    }
}

/// Verifies that `descend()` returns one output per child.
#[test]
fn descend_returns_child_outputs() {
    let document = parse("{ a(x: [1, 2, {y: 3}]) @d { b } } type T implements I { f: [T!]! }");
    let size = SubtreeSize::default().traverse(document.as_node_ref(), ());
    assert_eq!(size, pre_order(document.as_node_ref()).len());
}

/// Threads the selection depth through data.
#[derive(Default)]
struct FieldDepths<'a> {
    stack: TraversalStack<'a, usize>,
    depths: Vec<(String, usize)>,
}

impl<'a> Visitor<'a> for FieldDepths<'a> {
    type Data = usize;
    type Output = ();

    fn visit_node(&mut self, _node: NodeRef<'a>, _depth: usize) {
        self.descend();
    }

    fn visit_field_selection(&mut self, node: &'a FieldSelection, depth: usize) {
        self.depths.push((node.name.as_str().to_string(), depth));
        self.descend();
    }

    fn visit_selection_set(&mut self, _node: &'a SelectionSet, depth: usize) {
        self.descend_with(depth + 1);
    }
}

impl<'a> TraversingVisitor<'a> for FieldDepths<'a> {
    fn traversal_stack(&self) -> &TraversalStack<'a, usize> {
        &self.stack
    }
}

/// Verifies that `descend_with()` hands new data to the children only.
#[test]
fn descend_with_passes_new_data() {
    let document = parse("{ a { b { c } } d }");
    let mut visitor = FieldDepths::default();
    visitor.traverse(document.as_node_ref(), 0);
    let depths: Vec<(&str, usize)> = visitor
        .depths
        .iter()
        .map(|(name, depth)| (name.as_str(), *depth))
        .collect();
    assert_eq!(depths, [("a", 1), ("b", 2), ("c", 3), ("d", 1)]);
}

/// Verifies that `descend()` outside of a dispatch is a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn descend_outside_dispatch_panics() {
    let mut visitor = DescendEverywhere::default();
    visitor.descend();
}

/// Verifies that `descend_with()` outside of a dispatch is a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn descend_with_outside_dispatch_panics() {
    let mut visitor = FieldDepths::default();
    visitor.descend_with(1);
}

/// Panics on the first field.
#[derive(Default)]
struct PanicAtField<'a> {
    stack: TraversalStack<'a, ()>,
}

impl<'a> Visitor<'a> for PanicAtField<'a> {
    type Data = ();
    type Output = ();

    fn visit_node(&mut self, _node: NodeRef<'a>, _data: ()) {
        self.descend();
    }

    fn visit_field_selection(&mut self, _node: &'a FieldSelection, _data: ()) {
        panic!("field");
    }
}

impl<'a> TraversingVisitor<'a> for PanicAtField<'a> {
    fn traversal_stack(&self) -> &TraversalStack<'a, ()> {
        &self.stack
    }
}

/// Verifies that frames are popped while unwinding.
#[test]
fn frames_pop_on_unwind() {
    let document = parse("{ a }");
    let mut visitor = PanicAtField::default();
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        visitor.traverse(document.as_node_ref(), ());
    }));
    assert!(result.is_err());
    assert_eq!(visitor.stack.depth(), 0);
    assert!(visitor.stack.current().is_none());
}
