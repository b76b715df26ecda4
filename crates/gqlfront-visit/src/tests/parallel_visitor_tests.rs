//! Tests for [`ParallelVisitor`] walks and the [`VisitCoordination`]
//! state machine.

use crate::CoordinatedVisitor;
use crate::CoordinationState;
use crate::ParallelVisitOutcome;
use crate::ParallelVisitor;
use crate::VisitCoordination;
use crate::Visitor;
use crate::tests::tree_utils::kind_names;
use crate::tests::tree_utils::parse;
use crate::tests::tree_utils::post_order;
use crate::tests::tree_utils::pre_order;
use gqlfront_parser::ast::NodeRef;
use std::panic::AssertUnwindSafe;

type Policy = fn(NodeRef<'_>, usize, &mut VisitCoordination<usize>);

/// Records what it is dispatched and decides through `policy`.
struct Recorder {
    coordination: VisitCoordination<usize>,
    seen: Vec<(&'static str, usize)>,
    left: Vec<&'static str>,
    policy: Policy,
}

impl Recorder {
    fn new(policy: Policy) -> Self {
        Self {
            coordination: VisitCoordination::new(0),
            seen: Vec::new(),
            left: Vec::new(),
            policy,
        }
    }

    fn seen_kinds(&self) -> Vec<&'static str> {
        self.seen.iter().map(|(kind_name, _)| *kind_name).collect()
    }
}

impl<'a> Visitor<'a> for Recorder {
    type Data = usize;
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, data: usize) {
        self.seen.push((node.kind_name(), data));
        (self.policy)(node, data, &mut self.coordination);
    }
}

impl<'a> CoordinatedVisitor<'a> for Recorder {
    fn coordination(&self) -> &VisitCoordination<usize> {
        &self.coordination
    }

    fn coordination_mut(&mut self) -> &mut VisitCoordination<usize> {
        &mut self.coordination
    }

    fn leave_node(&mut self, node: NodeRef<'a>, _data: usize) {
        self.left.push(node.kind_name());
    }
}

fn undecided(_: NodeRef<'_>, _: usize, _: &mut VisitCoordination<usize>) {}

// =============================================================================
// Walks
// =============================================================================

/// Verifies that visitors which never decide see every node in pre-order
/// and leave every node in post-order.
#[test]
fn undecided_visitors_see_everything() {
    let document = parse("query Q($v: Int) { a(x: $v) { b } } type T { f: [T!] }");
    let root = document.as_node_ref();
    let mut first = Recorder::new(undecided);
    let mut second = Recorder::new(|_, _, coordination| coordination.visit_children());

    let outcome = ParallelVisitor::new()
        .with_visitor(&mut first)
        .with_visitor(&mut second)
        .walk(root);

    assert_eq!(outcome, ParallelVisitOutcome::Completed);
    for visitor in [&first, &second] {
        assert_eq!(visitor.seen_kinds(), kind_names(&pre_order(root)));
        assert_eq!(visitor.left, kind_names(&post_order(root)));
        assert!(visitor.seen.iter().all(|(_, data)| *data == 0));
        assert_eq!(visitor.coordination.state(), CoordinationState::Completed);
    }
}

/// Verifies that skipping only affects the visitor that skips.
#[test]
fn skipping_children_is_per_visitor() {
    let document = parse("{ a { b } c }");
    let mut skipper = Recorder::new(|node, _, coordination| {
        if node.kind_name() == "FieldSelection" {
            coordination.skip_children();
        }
    });
    let mut other = Recorder::new(undecided);

    let outcome = ParallelVisitor::new()
        .with_visitor(&mut skipper)
        .with_visitor(&mut other)
        .walk(document.as_node_ref());

    assert_eq!(outcome, ParallelVisitOutcome::Completed);
    assert_eq!(
        skipper.seen_kinds(),
        [
            "Document",
            "OperationDefinition",
            "SelectionSet",
            "FieldSelection",
            "FieldSelection",
        ],
    );
    assert_eq!(skipper.left, ["SelectionSet", "OperationDefinition", "Document"]);
    assert_eq!(other.seen.len(), pre_order(document.as_node_ref()).len());
}

/// Verifies that an aborted visitor is never invoked again while the others
/// finish the walk.
#[test]
fn aborted_visitor_stops_alone() {
    let document = parse("{ a b c }");
    let mut aborter = Recorder::new(|node, _, coordination| {
        if node.kind_name() == "FieldSelection" {
            coordination.abort();
        }
    });
    let mut other = Recorder::new(undecided);

    let outcome = ParallelVisitor::new()
        .with_visitor(&mut aborter)
        .with_visitor(&mut other)
        .walk(document.as_node_ref());

    assert_eq!(outcome, ParallelVisitOutcome::Completed);
    assert_eq!(
        aborter.seen_kinds(),
        ["Document", "OperationDefinition", "SelectionSet", "FieldSelection"],
    );
    assert!(aborter.left.is_empty());
    assert_eq!(aborter.coordination.state(), CoordinationState::Aborted);
    assert_eq!(other.seen.len(), pre_order(document.as_node_ref()).len());
    assert_eq!(other.coordination.state(), CoordinationState::Completed);
}

/// Verifies that the walk stops, reporting `Aborted`, once every visitor
/// has aborted.
#[test]
fn walk_aborts_when_every_visitor_aborts() {
    let document = parse("{ a b c }");
    let mut at_field = Recorder::new(|node, _, coordination| {
        if node.kind_name() == "FieldSelection" {
            coordination.abort();
        }
    });
    let mut at_name = Recorder::new(|node, _, coordination| {
        if node.kind_name() == "Name" {
            coordination.abort();
        }
    });

    let outcome = ParallelVisitor::new()
        .with_visitor(&mut at_field)
        .with_visitor(&mut at_name)
        .walk(document.as_node_ref());

    assert_eq!(outcome, ParallelVisitOutcome::Aborted);
    assert_eq!(at_field.seen.len(), 4);
    assert_eq!(at_name.seen_kinds().last(), Some(&"Name"));
    assert_eq!(at_name.seen.len(), 5);
    assert_eq!(at_name.coordination.state(), CoordinationState::Aborted);
}

/// Verifies that aborting at the root ends the walk immediately.
#[test]
fn abort_at_root() {
    let document = parse("{ a }");
    let mut visitor = Recorder::new(|_, _, coordination| coordination.abort());
    let outcome = ParallelVisitor::new()
        .with_visitor(&mut visitor)
        .walk(document.as_node_ref());
    assert_eq!(outcome, ParallelVisitOutcome::Aborted);
    assert_eq!(visitor.seen_kinds(), ["Document"]);
}

/// Verifies that a walk without visitors completes.
#[test]
fn walk_without_visitors_completes() {
    let document = parse("{ a }");
    let mut walk = ParallelVisitor::new();
    assert_eq!(walk.visitor_count(), 0);
    assert_eq!(walk.walk(document.as_node_ref()), ParallelVisitOutcome::Completed);
}

/// Verifies that data chosen with `visit_children_with` reaches the
/// children and that nodes without a decision pass their data on.
#[test]
fn children_receive_chosen_data() {
    let document = parse("{ a { b } }");
    let mut visitor = Recorder::new(|node, depth, coordination| {
        if node.kind_name() == "SelectionSet" {
            coordination.visit_children_with(depth + 1);
        }
    });
    ParallelVisitor::new()
        .with_visitor(&mut visitor)
        .walk(document.as_node_ref());

    let fields: Vec<(&str, usize)> = visitor
        .seen
        .iter()
        .filter(|(kind_name, _)| *kind_name == "FieldSelection" || *kind_name == "Name")
        .copied()
        .collect();
    assert_eq!(
        fields,
        [
            ("FieldSelection", 1),
            ("Name", 1),
            ("FieldSelection", 2),
            ("Name", 2),
        ],
    );
}

/// Verifies that a coordinated visitor can be walked again after a walk
/// completes or aborts.
#[test]
fn visitors_can_walk_again() {
    let document = parse("{ a }");
    let mut visitor = Recorder::new(|node, _, coordination| {
        if node.kind_name() == "Name" {
            coordination.abort();
        }
    });
    let mut walk = ParallelVisitor::new().with_visitor(&mut visitor);
    assert_eq!(walk.walk(document.as_node_ref()), ParallelVisitOutcome::Aborted);
    assert_eq!(walk.walk(document.as_node_ref()), ParallelVisitOutcome::Aborted);
    drop(walk);
    assert_eq!(visitor.seen.len(), 10);
}

/// Verifies that a visitor panicking mid-walk leaves every visitor free to
/// join a later walk.
#[test]
fn visitors_can_walk_again_after_a_panic() {
    let document = parse("{ a b }");
    let mut healthy = Recorder::new(undecided);
    let mut failing = Recorder::new(|node, _, _| {
        if node.kind_name() == "FieldSelection" {
            panic!("failed at {}", node.kind_name());
        }
    });
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        ParallelVisitor::new()
            .with_visitor(&mut healthy)
            .with_visitor(&mut failing)
            .walk(document.as_node_ref())
    }));
    assert!(result.is_err());
    assert_eq!(healthy.coordination.state(), CoordinationState::Completed);

    healthy.seen.clear();
    let outcome = ParallelVisitor::new()
        .with_visitor(&mut healthy)
        .walk(document.as_node_ref());
    assert_eq!(outcome, ParallelVisitOutcome::Completed);
    assert_eq!(healthy.seen_kinds(), kind_names(&pre_order(document.as_node_ref())));

    failing.policy = undecided;
    failing.seen.clear();
    let outcome = ParallelVisitor::new()
        .with_visitor(&mut failing)
        .walk(document.as_node_ref());
    assert_eq!(outcome, ParallelVisitOutcome::Completed);
    assert_eq!(failing.seen_kinds(), kind_names(&pre_order(document.as_node_ref())));
}

// =============================================================================
// Coordination misuse
// =============================================================================

/// Verifies that deciding twice about the same children is a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn skip_after_visit_children_panics() {
    let document = parse("{ a }");
    let mut visitor = Recorder::new(|_, _, coordination| {
        coordination.visit_children();
        coordination.skip_children();
    });
    ParallelVisitor::new()
        .with_visitor(&mut visitor)
        .walk(document.as_node_ref());
}

/// Verifies that aborting twice is a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn abort_after_abort_panics() {
    let document = parse("{ a }");
    let mut visitor = Recorder::new(|_, _, coordination| {
        coordination.abort();
        coordination.abort();
    });
    ParallelVisitor::new()
        .with_visitor(&mut visitor)
        .walk(document.as_node_ref());
}

/// Verifies that decisions outside of a dispatch are a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn decision_outside_dispatch_panics() {
    let mut coordination = VisitCoordination::new(());
    coordination.skip_children();
}

/// Verifies that dispatching into a coordination that is still inside a
/// dispatch is a misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn reentrant_dispatch_panics() {
    let mut coordination = VisitCoordination::new(());
    coordination.attach();
    coordination.begin_dispatch();
    coordination.begin_dispatch();
}

/// Verifies that attaching to a second walk while one is active is a
/// misuse.
#[test]
#[should_panic(expected = "MisuseError")]
fn second_active_walk_panics() {
    let mut coordination = VisitCoordination::new(());
    coordination.attach();
    coordination.attach();
}

/// Verifies the states a coordination moves through for one node.
#[test]
fn coordination_states() {
    let mut coordination = VisitCoordination::new(7);
    assert_eq!(coordination.state(), CoordinationState::Initial);
    coordination.attach();
    assert_eq!(coordination.begin_dispatch(), 7);
    assert_eq!(coordination.state(), CoordinationState::BeforeVisitingChildren);
    coordination.visit_children_with(8);
    assert_eq!(coordination.state(), CoordinationState::AfterVisitingChildren);
    coordination.finish_dispatch();
    assert_eq!(coordination.state(), CoordinationState::Initial);
    assert_eq!(coordination.begin_dispatch(), 8);
    coordination.skip_children();
    assert_eq!(coordination.state(), CoordinationState::SkippingChildren);
    coordination.finish_dispatch();
    assert_eq!(coordination.finish_children(), 7);
    coordination.detach();
    assert_eq!(coordination.state(), CoordinationState::Completed);
    assert!(!coordination.is_aborted());
}
