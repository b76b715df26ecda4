use clap::CommandFactory;
use crate::commands::CommandEnum;

/// Parses GraphQL documents and reports on them.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlfront", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<CommandEnum>,

    /// Log at debug level, overriding `LOG_LEVEL`. Accepted before or
    /// after the subcommand.
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,
}
impl Cli {
    /// Prints usage when no subcommand was given.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        let mut command = Self::command();
        command.print_help()?;
        println!();
        Ok(())
    }
}
