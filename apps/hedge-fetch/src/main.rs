use std::sync::Arc;

use tracing::{info, warn};

use hedge_core::RaceCoordinator;
use hedge_exec::{HttpConfig, HttpWorker};
use hedge_model::RaceTask;
use hedge_observe::{LoggerConfig, init_logger, log_record, print_report};

const URLS: [&str; 9] = [
    "https://www.tumblr.com",
    "https://www.reddit.com",
    "https://www.snapchat.com",
    "https://www.whatsapp.com",
    "https://www.google.com",
    "https://www.facebook.com",
    "https://www.linkedin.com",
    "https://www.instagram.com",
    "https://www.pinterest.com",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger(&LoggerConfig::default())?;

    let worker = HttpWorker::new(HttpConfig::default())?;
    let tasks: Vec<RaceTask> = URLS.iter().map(|url| worker.task(*url)).collect();

    let race = RaceCoordinator::new(Arc::new(worker));
    info!(tasks = tasks.len(), "starting race");

    let report = race.run(tasks).await;
    for rec in &report.records {
        log_record(rec);
    }
    // Exit status stays 0 even if stdout is closed.
    if let Err(e) = print_report(&report) {
        warn!(error = %e, "failed to write report");
    }

    if report.all_failed() {
        info!("no request got a 200 response");
    }
    Ok(())
}
