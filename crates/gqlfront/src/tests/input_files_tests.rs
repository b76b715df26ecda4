//! Tests for finding and loading GraphQL input files.

use crate::commands::InputFiles;
use crate::commands::load_files;
use crate::tests::scratch_dir::ScratchDir;

fn default_exts() -> Vec<String> {
    vec!["graphql".to_string(), ".graphqls".to_string()]
}

/// Verifies that directories are scanned recursively and filtered by
/// extension.
#[test]
fn finds_files_by_extension() {
    let dir = ScratchDir::new("finds-files");
    let query = dir.write("a/query.graphql", "{ a }");
    let schema = dir.write("b/c/schema.graphqls", "type A { a: Int }");
    dir.write("notes.txt", "not graphql");

    let found = InputFiles::find(&[dir.path().to_path_buf()], &default_exts()).unwrap();
    assert_eq!(found.file_paths, [query, schema]);
    assert_eq!(found.num_non_graphql_files, 1);
}

/// Verifies that a single explicitly named file is accepted whatever its
/// extension.
#[test]
fn single_file_is_always_accepted() {
    let dir = ScratchDir::new("single-file");
    let path = dir.write("schema.txt", "scalar Date");
    let found = InputFiles::find(&[path.clone()], &default_exts()).unwrap();
    assert_eq!(found.file_paths, [path]);
    assert_eq!(found.num_non_graphql_files, 0);
}

/// Verifies that a missing path is an error.
#[test]
fn missing_path_is_an_error() {
    let dir = ScratchDir::new("missing-path");
    let missing = dir.path().join("missing");
    assert!(InputFiles::find(&[missing], &default_exts()).is_err());
}

/// Verifies that files load in order, with syntax and I/O errors kept per
/// file.
#[tokio::test]
async fn loads_files_in_order() {
    let dir = ScratchDir::new("loads-files");
    let good = dir.write("good.graphql", "{ a }");
    let bad = dir.write("bad.graphql", "{ a(x: 01) }");
    let missing = dir.path().join("missing.graphql");

    let loaded = load_files(vec![good.clone(), bad.clone(), missing.clone()]).await;
    let paths: Vec<_> = loaded.iter().map(|file| file.path.clone()).collect();
    assert_eq!(paths, [good, bad, missing]);
    assert_eq!(loaded[0].document.as_ref().unwrap().definitions.len(), 1);
    let syntax_error = loaded[1].document.as_ref().unwrap_err();
    assert!(syntax_error.downcast_ref::<gqlfront_parser::SyntaxError>().is_some());
    let io_error = loaded[2].document.as_ref().unwrap_err();
    assert!(io_error.downcast_ref::<gqlfront_parser::SyntaxError>().is_none());
}
