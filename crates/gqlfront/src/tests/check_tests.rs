//! Tests for `check` failure reports.

use crate::commands::describe_failure;
use crate::commands::load_files;
use crate::tests::scratch_dir::ScratchDir;

/// Verifies that syntax errors are reported with their file and source
/// line, and that parsed files report nothing.
#[tokio::test]
async fn describes_syntax_errors() {
    let dir = ScratchDir::new("describes-errors");
    let good = dir.write("good.graphql", "{ a }");
    let bad = dir.write("bad.graphql", "{ a(x: 01) }");

    let loaded = load_files(vec![good, bad.clone()]).await;
    assert!(describe_failure(&loaded[0]).is_none());
    let report = describe_failure(&loaded[1]).unwrap();
    assert!(report.starts_with("error: "), "{report}");
    assert!(report.contains(&bad.display().to_string()), "{report}");
    assert!(report.contains("{ a(x: 01) }"), "{report}");
}

/// Verifies that I/O errors are reported with the failing path.
#[tokio::test]
async fn describes_read_errors() {
    let dir = ScratchDir::new("describes-read-errors");
    let missing = dir.path().join("missing.graphql");
    let loaded = load_files(vec![missing.clone()]).await;
    let report = describe_failure(&loaded[0]).unwrap();
    assert!(report.starts_with("error: Failed to read"), "{report}");
    assert!(report.contains("missing.graphql"), "{report}");
}
