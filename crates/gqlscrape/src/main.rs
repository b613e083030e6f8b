mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    match cli.cmd.take() {
        Some(command) => command.run(&cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )).emit(),
        },
    }
}

fn setup_logger(cli: &Cli) {
    let env_log_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = cli.log_level(env_log_level.as_deref(), DEFAULT_LOG_LEVEL);

    // Progress logs go to stderr so stdout carries only the final report.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
