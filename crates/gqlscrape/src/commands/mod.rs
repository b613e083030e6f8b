mod generate;
mod scrape;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use libgqlscrape::session::RunSummary;
use scrape::ScrapeCmd;
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlscrape")]
pub(crate) enum CommandEnum {
    Generate(Box<GenerateCmd>),
    Scrape(Box<ScrapeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Scrape(cmd) => cmd.run(cli).await,
        }
    }
}

/// Bullet-list rendering of a [`RunSummary`] shared by every command's
/// final report.
fn summary_lines(summary: &RunSummary, output_dir: &Path) -> String {
    let mut lines = format!(
        concat!(
            "  * Generated {} queries, {} mutations and {} subscriptions.\n",
            "  * Wrote {} documents to {:#?}.",
        ),
        summary.queries_generated,
        summary.mutations_generated,
        summary.subscriptions_generated,
        summary.documents_written,
        output_dir,
    );
    for failure in &summary.generation_failures {
        let _ = write!(
            lines,
            "\n  * Could not generate {} `{}`: {}",
            failure.operation_kind,
            failure.root_field_name,
            failure.error,
        );
    }
    for failure in &summary.persistence_failures {
        let _ = write!(lines, "\n  * {failure}");
    }
    lines
}
