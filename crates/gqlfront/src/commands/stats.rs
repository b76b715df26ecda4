use super::input_files::InputArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::InputFiles;
use crate::commands::describe_failure;
use crate::commands::load_files;
use crate::output_utils;
use gqlfront_parser::ast::NodeRef;
use gqlfront_visit::CoordinatedVisitor;
use gqlfront_visit::ParallelVisitor;
use gqlfront_visit::VisitCoordination;
use gqlfront_visit::Visitor;
use indexmap::IndexMap;
use std::fmt::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct StatsCmd {
    #[command(flatten)]
    input: InputArgs,
}

#[inherent::inherent]
impl RunnableCommand for StatsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let input_files = match InputFiles::find(
            &self.input.file_or_dir_paths,
            &self.input.graphql_file_exts,
        ) {
            Ok(input_files) => input_files,
            Err(e) => return CommandResult::failure(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let loaded = load_files(input_files.file_paths).await;
        let mut kinds = KindCounter::default();
        let mut depths = DepthTracker::default();
        let mut num_documents = 0;
        let mut failures = vec![];
        for file in &loaded {
            match &file.document {
                Ok(document) => {
                    log::debug!("Collecting stats for {:?}.", file.path);
                    ParallelVisitor::new()
                        .with_visitor(&mut kinds)
                        .with_visitor(&mut depths)
                        .walk(document.as_node_ref());
                    num_documents += 1;
                },
                Err(_) => failures.extend(describe_failure(file)),
            }
        }

        let result = CommandResult::success(format_args!(
            "{} Walked {num_documents} documents:\n{}",
            output_utils::GREEN_CHECK,
            render_stats(&kinds, &depths),
        ));
        if failures.is_empty() {
            result
        } else {
            result.with_errors(format!(
                "{}\n{} {} GraphQL files failed to parse.",
                failures.join("\n"),
                output_utils::RED_X,
                failures.len(),
            ))
        }
    }
}

/// Renders the totals collected by `kinds` and `depths`, most frequent
/// node kinds first.
pub(crate) fn render_stats(kinds: &KindCounter, depths: &DepthTracker) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  * {} nodes, at most {} deep.", kinds.total(), depths.max_depth);
    let _ = writeln!(out, "  * {} executable definitions.", kinds.executable_definitions);
    let _ = writeln!(out, "  * {} type system definitions.", kinds.type_system_definitions);
    let _ = write!(out, "  * Node kinds:");
    for (kind_name, count) in kinds.sorted_counts() {
        let _ = write!(out, "\n      {kind_name}: {count}");
    }
    out
}

/// Counts nodes by kind and definitions by category.
#[derive(Debug)]
pub(crate) struct KindCounter {
    coordination: VisitCoordination<()>,
    pub counts: IndexMap<&'static str, usize>,
    pub executable_definitions: usize,
    pub type_system_definitions: usize,
}

impl Default for KindCounter {
    fn default() -> Self {
        Self {
            coordination: VisitCoordination::new(()),
            counts: IndexMap::new(),
            executable_definitions: 0,
            type_system_definitions: 0,
        }
    }
}

impl KindCounter {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts by descending count, ties in first-seen order.
    pub fn sorted_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<_> =
            self.counts.iter()
                .map(|(kind_name, count)| (*kind_name, *count))
                .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<'a> Visitor<'a> for KindCounter {
    type Data = ();
    type Output = ();

    fn visit_node(&mut self, node: NodeRef<'a>, _data: ()) {
        *self.counts.entry(node.kind_name()).or_default() += 1;
    }

    fn visit_executable_definition(&mut self, node: NodeRef<'a>, data: ()) {
        self.executable_definitions += 1;
        self.visit_definition(node, data);
    }

    fn visit_type_system_definition(&mut self, node: NodeRef<'a>, data: ()) {
        self.type_system_definitions += 1;
        self.visit_definition(node, data);
    }

    fn visit_type_system_extension(&mut self, node: NodeRef<'a>, data: ()) {
        self.type_system_definitions += 1;
        self.visit_definition(node, data);
    }
}

impl<'a> CoordinatedVisitor<'a> for KindCounter {
    fn coordination(&self) -> &VisitCoordination<()> {
        &self.coordination
    }

    fn coordination_mut(&mut self) -> &mut VisitCoordination<()> {
        &mut self.coordination
    }
}

/// Tracks the deepest node seen, the root being at depth 0.
#[derive(Debug)]
pub(crate) struct DepthTracker {
    coordination: VisitCoordination<usize>,
    pub max_depth: usize,
}

impl Default for DepthTracker {
    fn default() -> Self {
        Self {
            coordination: VisitCoordination::new(0),
            max_depth: 0,
        }
    }
}

impl<'a> Visitor<'a> for DepthTracker {
    type Data = usize;
    type Output = ();

    fn visit_node(&mut self, _node: NodeRef<'a>, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        self.coordination.visit_children_with(depth + 1);
    }
}

impl<'a> CoordinatedVisitor<'a> for DepthTracker {
    fn coordination(&self) -> &VisitCoordination<usize> {
        &self.coordination
    }

    fn coordination_mut(&mut self) -> &mut VisitCoordination<usize> {
        &mut self.coordination
    }
}
