use crate::Cli;
use crate::CommandResult;

/// A `gqlscrape` subcommand. Every outcome, failures included, comes back as
/// a [`CommandResult`] for `main` to print.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
