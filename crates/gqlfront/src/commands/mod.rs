mod check;
mod input_files;
mod stats;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use stats::StatsCmd;

pub(crate) use check::describe_failure;
pub(crate) use input_files::InputFiles;
pub(crate) use input_files::LoadedFile;
pub(crate) use input_files::load_files;
#[cfg(test)]
pub(crate) use stats::DepthTracker;
#[cfg(test)]
pub(crate) use stats::KindCounter;
#[cfg(test)]
pub(crate) use stats::render_stats;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlfront")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report syntax errors.
    Check(Box<CheckCmd>),
    /// Parse GraphQL files and summarize the nodes they contain.
    Stats(Box<StatsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Stats(cmd) => cmd.run(cli).await,
        }
    }
}
