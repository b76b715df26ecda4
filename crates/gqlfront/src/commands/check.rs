use super::input_files::InputArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::InputFiles;
use crate::commands::LoadedFile;
use crate::commands::load_files;
use crate::output_utils;
use gqlfront_parser::SyntaxError;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    input: InputArgs,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
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

        let num_files = input_files.file_paths.len();
        let loaded = load_files(input_files.file_paths).await;
        let failures: Vec<String> =
            loaded.iter()
                .filter_map(describe_failure)
                .collect();

        if !failures.is_empty() {
            return CommandResult::failure(format_args!(
                "{}\n{} {} of {num_files} GraphQL files failed to parse.",
                failures.join("\n"),
                output_utils::RED_X,
                failures.len(),
            ));
        }

        let num_definitions: usize =
            loaded.iter()
                .filter_map(|file| file.document.as_ref().ok())
                .map(|document| document.definitions.len())
                .sum();
        CommandResult::success(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Parsed {} definitions.",
            ),
            output_utils::GREEN_CHECK,
            num_files,
            input_files.num_non_graphql_files,
            num_definitions,
        ))
    }
}

/// Renders the error that stopped `file` from parsing, if any. Syntax
/// errors get their detailed, source-annotated form.
pub(crate) fn describe_failure(file: &LoadedFile) -> Option<String> {
    let error = file.document.as_ref().err()?;
    Some(match error.downcast_ref::<SyntaxError>() {
        Some(syntax_error) => syntax_error.format_detailed(),
        None => format!("error: {error:#}"),
    })
}
