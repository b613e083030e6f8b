use clap::CommandFactory;
use crate::commands;
use std::str::FromStr;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlscrape",
    about = "Generate a query or mutation for every root field of a GraphQL \
             endpoint's schema, then run the queries and save the responses.",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        global=true,
        help="Log more: `-v` for debug output, `-vv` to trace.",
        long,
        short='v',
    )]
    pub verbose: u8,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// The level to log at: `-v` flags win over the `LOG_LEVEL` value
    /// (`env_log_level`). An unrecognized `LOG_LEVEL` falls back to
    /// `default`, with a message to report once logging is up.
    pub(crate) fn log_level(
        &self,
        env_log_level: Option<&str>,
        default: tracing::Level,
    ) -> (tracing::Level, Option<String>) {
        match self.verbose {
            0 => (),
            1 => return (tracing::Level::DEBUG, None),
            _ => return (tracing::Level::TRACE, None),
        }

        let Some(env_log_level) = env_log_level.map(str::trim) else {
            return (default, None);
        };
        if env_log_level.eq_ignore_ascii_case("verbose") {
            return (tracing::Level::DEBUG, None);
        }
        match tracing::Level::from_str(env_log_level) {
            Ok(level) => (level, None),
            Err(_) => (
                default,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: \
                    `{env_log_level}`",
                )),
            ),
        }
    }
}
