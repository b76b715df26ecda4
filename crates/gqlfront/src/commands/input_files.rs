use anyhow::Context;
use gqlfront_parser::Source;
use gqlfront_parser::ast::Document;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File selection arguments shared by every command that reads GraphQL
/// files.
#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

/// The GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_non_graphql_files: usize,
}

impl InputFiles {
    /// Recursively finds the files under `paths` whose extension is one of
    /// `exts` (with or without the leading `.`).
    ///
    /// A single path naming a file is always accepted, whatever its
    /// extension.
    pub fn find(paths: &[PathBuf], exts: &[String]) -> anyhow::Result<Self> {
        let graphql_file_exts: HashSet<&str> =
            exts.iter()
                .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
                .collect();

        log::debug!("Scanning {} input paths...", paths.len());
        let mut found = Self::default();
        for path in paths {
            for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("Failed to scan files at or under {path:?}")
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }
                if has_graphql_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Found GraphQL file at {entry_path:?}.");
                    found.file_paths.push(canonicalize(entry_path)?);
                } else {
                    log::trace!("Skipping non-GraphQL file: {entry_path:?}.");
                    found.num_non_graphql_files += 1;
                }
            }
        }

        if found.file_paths.is_empty()
            && let [only_path] = paths
            && only_path.is_file() {
            log::warn!(
                "Proceeding with {only_path:?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.num_non_graphql_files = 0;
            found.file_paths.push(canonicalize(only_path)?);
        }

        log::debug!("Found {} GraphQL files.", found.file_paths.len());
        Ok(found)
    }
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<&str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| graphql_file_exts.contains(ext))
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:?}"))
}

/// A file read and parsed by [`load_files`].
#[derive(Debug)]
pub(crate) struct LoadedFile {
    pub path: PathBuf,
    /// The parsed document, or the I/O or
    /// [`SyntaxError`](gqlfront_parser::SyntaxError) that stopped it.
    pub document: anyhow::Result<Document>,
}

/// Reads and parses every file concurrently, returning them in the order
/// given.
pub(crate) async fn load_files(file_paths: Vec<PathBuf>) -> Vec<LoadedFile> {
    let tasks: Vec<_> =
        file_paths.into_iter()
            .map(|path| tokio::task::spawn_blocking(move || {
                let document = load_file(&path);
                LoadedFile { path, document }
            }))
            .collect();

    let mut loaded = Vec::with_capacity(tasks.len());
    for task in tasks {
        match task.await {
            Ok(file) => loaded.push(file),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
    loaded
}

fn load_file(path: &Path) -> anyhow::Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:?}"))?;
    log::trace!("Parsing {path:?} ({} bytes).", content.len());
    let document = gqlfront_parser::parse_document(
        Source::new(content, path.display().to_string()),
    )?;
    Ok(document)
}
