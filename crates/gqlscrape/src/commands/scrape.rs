use crate::commands::summary_lines;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlscrape::execution::ExecutorConfig;
use libgqlscrape::execution::HttpTransport;
use libgqlscrape::execution::HttpTransportConfig;
use libgqlscrape::operation::DEFAULT_MAX_DEPTH;
use libgqlscrape::operation::GeneratorConfig;
use libgqlscrape::schema::SchemaBuilder;
use libgqlscrape::session::ScrapeSession;
use libgqlscrape::sink::ResultSink;
use std::path::PathBuf;
use std::time::Duration;

/// Introspect an endpoint, generate a document for every root field, run the
/// queries and save everything under `--output-dir`.
#[derive(Debug, clap::Args)]
pub(crate) struct ScrapeCmd {
    #[arg(
        help="Sent as `Authorization: Bearer <TOKEN>` with every request.",
        long,
        value_name="TOKEN",
    )]
    auth_token: Option<String>,

    #[arg(
        default_value_t=4,
        help="Maximum number of queries in flight at once.",
        long,
    )]
    concurrency: usize,

    #[arg(
        help="Raw `Cookie` header value, e.g. \"session=abc; theme=dark\".",
        long,
    )]
    cookie: Option<String>,

    #[arg(
        default_value_t=100,
        help="Milliseconds to wait before sending each query.",
        long,
    )]
    delay_ms: u64,

    #[arg(
        help="URL of the GraphQL endpoint.",
        name="ENDPOINT",
        value_parser=parse_endpoint,
    )]
    endpoint: reqwest::Url,

    #[arg(
        help="Extra request header as \"Name: Value\". May be repeated.",
        long="header",
        short='H',
        value_parser=parse_header,
    )]
    headers: Vec<(String, String)>,

    #[arg(
        default_value_t=DEFAULT_MAX_DEPTH,
        help="How many selection sets may nest below a root field.",
        long,
    )]
    max_depth: usize,

    #[arg(
        default_value="result",
        help="Directory the documents and responses are written into.",
        long,
        short='o',
    )]
    output_dir: PathBuf,

    #[arg(
        default_value_t=30,
        help="Seconds to wait for each response.",
        long,
    )]
    timeout_secs: u64,
}
impl ScrapeCmd {
    fn transport_config(&self) -> HttpTransportConfig {
        let mut config = HttpTransportConfig {
            auth_token: self.auth_token.to_owned(),
            cookie: self.cookie.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpTransportConfig::default()
        };
        for (name, value) in &self.headers {
            // Header names are case-insensitive; the last `-H` for a name wins.
            config.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            config.headers.insert(name.to_owned(), value.to_owned());
        }
        config
    }

    fn session(&self) -> ScrapeSession {
        ScrapeSession::new(
            GeneratorConfig { max_depth: self.max_depth },
            ExecutorConfig {
                concurrency: self.concurrency,
                delay: Duration::from_millis(self.delay_ms),
                timeout: Duration::from_secs(self.timeout_secs),
            },
        )
    }
}

#[inherent::inherent]
impl RunnableCommand for ScrapeCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let transport = match HttpTransport::new(
            self.endpoint.clone(),
            &self.transport_config(),
        ) {
            Ok(transport) => transport,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
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

        log::info!("Introspecting `{}`...", self.endpoint);
        let introspection = match transport.introspect().await {
            Ok(introspection) => introspection,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Introspection of `{}` failed: {e}",
                output_utils::RED_X,
                self.endpoint,
            )),
        };
        if let Err(e) = sink.write_schema(&introspection) {
            log::error!("{e}");
        }

        let schema =
            match SchemaBuilder::from_introspection_value(introspection)
                .and_then(SchemaBuilder::build) {
                Ok(schema) => schema,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Errors loading schema from `{}`: {e}",
                    output_utils::RED_X,
                    self.endpoint,
                )),
            };

        let summary = self.session()
            .run(&schema, &transport, &sink, shutdown_signal())
            .await;

        let report = format!(
            concat!(
                "{}\n",
                "  * {} queries answered ({} with GraphQL errors).\n",
                "  * {} queries failed.\n",
                "  * {} mutations skipped.\n",
                "  * Coverage: {:.2}%",
            ),
            summary_lines(&summary, sink.output_dir()),
            summary.queries_answered,
            summary.queries_answered_with_errors,
            summary.query_failures.len(),
            summary.mutations_generated,
            summary.coverage(),
        );
        if summary.cancelled {
            CommandResult::interrupted(format_args!(
                "{} Interrupted with {} queries not sent:\n{report}",
                output_utils::RED_X,
                summary.queries_not_sent(),
            ))
        } else if summary.has_persistence_failures() {
            CommandResult::stdout(format_args!(
                "{} Scraped `{}` with write errors:\n{report}",
                output_utils::RED_X,
                self.endpoint,
            ))
        } else {
            CommandResult::success(format_args!(
                "{} Scraped `{}`:\n{report}",
                output_utils::GREEN_CHECK,
                self.endpoint,
            ))
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the signal handler can't be
/// installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Unable to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

fn parse_endpoint(value: &str) -> Result<reqwest::Url, String> {
    let url = reqwest::Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("URL has no host".to_string());
    }
    Ok(url)
}

fn parse_header(value: &str) -> Result<(String, String), String> {
    match value.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() =>
            Ok((name.trim().to_string(), value.trim().to_string())),
        _ => Err(format!("expected \"Name: Value\", got `{value}`")),
    }
}
