use crate::commands::summary_lines;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlscrape::execution::ExecutorConfig;
use libgqlscrape::operation::DEFAULT_MAX_DEPTH;
use libgqlscrape::operation::GeneratorConfig;
use libgqlscrape::schema::SchemaBuilder;
use libgqlscrape::session::ScrapeSession;
use libgqlscrape::sink::ResultSink;
use std::path::PathBuf;

/// Generate documents offline from a saved introspection result. Nothing is
/// sent anywhere.
#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value_t=DEFAULT_MAX_DEPTH,
        help="How many selection sets may nest below a root field.",
        long,
    )]
    max_depth: usize,

    #[arg(
        default_value="result",
        help="Directory the generated documents are written into.",
        long,
        short='o',
    )]
    output_dir: PathBuf,

    #[arg(
        help="Path to a JSON introspection result (a full response, its \
             `data` object, or the bare `__schema` object).",
        name="SCHEMA_JSON",
    )]
    schema_json: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        log::debug!("Loading introspection result from {:#?}...", self.schema_json);
        let content = match std::fs::read_to_string(&self.schema_json) {
            Ok(content) => content,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {:#?}: {e}",
                output_utils::RED_X,
                self.schema_json,
            )),
        };

        let schema =
            match SchemaBuilder::from_introspection_str(&content)
                .and_then(SchemaBuilder::build) {
                Ok(schema) => schema,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Errors loading schema: {e}",
                    output_utils::RED_X,
                )),
            };

        let sink = match ResultSink::create(&self.output_dir) {
            Ok(sink) => sink,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let session = ScrapeSession::new(
            GeneratorConfig { max_depth: self.max_depth },
            ExecutorConfig::default(),
        );
        let summary = session.generate(&schema, &sink);

        if summary.has_persistence_failures() {
            CommandResult::stdout(format_args!(
                "{} Generated documents with write errors:\n{}",
                output_utils::RED_X,
                summary_lines(&summary, sink.output_dir()),
            ))
        } else {
            CommandResult::success(format_args!(
                "{} Generated documents:\n{}",
                output_utils::GREEN_CHECK,
                summary_lines(&summary, sink.output_dir()),
            ))
        }
    }
}
