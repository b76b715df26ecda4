//! Tests for the visitors behind `stats`.

use crate::commands::DepthTracker;
use crate::commands::KindCounter;
use crate::commands::render_stats;
use gqlfront_parser::ast::Document;
use gqlfront_visit::ParallelVisitOutcome;
use gqlfront_visit::ParallelVisitor;

fn collect(documents: &[Document]) -> (KindCounter, DepthTracker) {
    let mut kinds = KindCounter::default();
    let mut depths = DepthTracker::default();
    for document in documents {
        let outcome = ParallelVisitor::new()
            .with_visitor(&mut kinds)
            .with_visitor(&mut depths)
            .walk(document.as_node_ref());
        assert_eq!(outcome, ParallelVisitOutcome::Completed);
    }
    (kinds, depths)
}

fn parse(source: &str) -> Document {
    gqlfront_parser::parse_document(source).unwrap()
}

/// Verifies node kind and definition category counts.
#[test]
fn counts_kinds_and_definitions() {
    let (kinds, _) = collect(&[parse(
        "query Q { a b } fragment F on T { c } type T { c: Int } extend type T { d: Int }",
    )]);
    assert_eq!(kinds.executable_definitions, 2);
    assert_eq!(kinds.type_system_definitions, 2);
    assert_eq!(kinds.counts.get("FieldSelection"), Some(&3));
    assert_eq!(kinds.counts.get("FieldDefinition"), Some(&2));
    assert_eq!(kinds.counts.get("Document"), Some(&1));
    assert_eq!(kinds.counts.get("OperationDefinition"), Some(&1));
    assert_eq!(kinds.counts.get("ObjectTypeExtension"), Some(&1));
}

/// Verifies that the depth tracker sees the deepest node, counting the
/// document as depth 0.
#[test]
fn tracks_max_depth() {
    // Document > OperationDefinition > SelectionSet > FieldSelection > Name
    let (_, depths) = collect(&[parse("{ a }")]);
    assert_eq!(depths.max_depth, 4);

    let (_, depths) = collect(&[parse("{ a }"), parse("{ a { b } }")]);
    assert_eq!(depths.max_depth, 6);
}

/// Verifies that totals accumulate across documents and render most
/// frequent kinds first.
#[test]
fn totals_across_documents() {
    let (kinds, depths) = collect(&[parse("{ a }"), parse("{ b c }")]);
    assert_eq!(kinds.counts.get("Document"), Some(&2));
    assert_eq!(kinds.counts.get("FieldSelection"), Some(&3));
    assert_eq!(kinds.total(), 2 + 2 + 2 + 3 + 3);
    assert_eq!(
        kinds.sorted_counts(),
        [
            ("FieldSelection", 3),
            ("Name", 3),
            ("Document", 2),
            ("OperationDefinition", 2),
            ("SelectionSet", 2),
        ],
    );

    let rendered = render_stats(&kinds, &depths);
    assert!(rendered.starts_with("  * 12 nodes, at most 4 deep.\n"), "{rendered}");
    assert!(rendered.contains("  * 2 executable definitions.\n"), "{rendered}");
    assert!(rendered.ends_with("\n      SelectionSet: 2"), "{rendered}");
}
