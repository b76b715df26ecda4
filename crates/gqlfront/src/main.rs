mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
#[cfg(test)]
mod tests;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else if let Err(e) = cli.run_default().await {
        eprintln!("{} {e:#}", output_utils::RED_X);
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());
            parse_log_level(env_val.as_deref().ok())
                .unwrap_or_else(|invalid| {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{invalid}`"
                    ));
                    DEFAULT_LOG_LEVEL
                })
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

/// Maps a `LOG_LEVEL` value to a level. An unset variable means the
/// default level; an unknown value is handed back as the error.
pub(crate) fn parse_log_level(value: Option<&str>) -> Result<tracing::Level, &str> {
    match value {
        Some("DEBUG" | "debug") => Ok(tracing::Level::DEBUG),
        Some("INFO" | "info") => Ok(tracing::Level::INFO),
        Some("TRACE" | "trace") => Ok(tracing::Level::TRACE),
        Some("VERBOSE" | "verbose") => Ok(tracing::Level::DEBUG),
        Some(other) => Err(other),
        None => Ok(DEFAULT_LOG_LEVEL),
    }
}
