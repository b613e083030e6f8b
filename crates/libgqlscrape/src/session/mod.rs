mod run_summary;
mod scrape_session;

pub use run_summary::FailureRecord;
pub use run_summary::RunSummary;
pub use scrape_session::ScrapeSession;
