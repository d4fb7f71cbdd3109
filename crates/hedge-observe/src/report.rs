//! Console rendering of race results.
//!
//! One line per task on stdout, preceded by the winner announcement when there is one.
//! Structured diagnostics for the same records go through `tracing`.

use std::io::{self, Write};

use hedge_model::{OutcomeKind, OutcomeRecord, RaceReport, WorkerOutcome};
use tracing::{debug, info, warn};

/// Render the line for a single record.
///
/// - response received (200 or not): `Url: <url> got response status: <status> in <elapsed>`
/// - cancelled: `Error: <url>: request cancelled after <elapsed>`
/// - any other failure: `Error: <url>: <error>`
pub fn render_line(rec: &OutcomeRecord) -> String {
    match (&rec.outcome, rec.outcome.response()) {
        (_, Some(meta)) => format!(
            "Url: {} got response status: {} in {:?}",
            rec.url,
            meta.status_text(),
            rec.elapsed
        ),
        (WorkerOutcome::Failure(err), None) => format!("Error: {}: {}", rec.url, err),
        (_, None) => format!("Error: {}: request cancelled after {:?}", rec.url, rec.elapsed),
    }
}

pub fn winner_line(rec: &OutcomeRecord) -> String {
    format!(
        "Url: {} got 200 status first. Cancelling other requests.",
        rec.url
    )
}

/// All report lines in print order.
pub fn render_report(report: &RaceReport) -> Vec<String> {
    report
        .winner_record()
        .map(winner_line)
        .into_iter()
        .chain(report.records.iter().map(render_line))
        .collect()
}

pub fn write_report<W: Write>(report: &RaceReport, mut out: W) -> io::Result<()> {
    for line in render_report(report) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write the report to stdout.
pub fn print_report(report: &RaceReport) -> io::Result<()> {
    write_report(report, io::stdout().lock())
}

/// Emit one structured event for `rec`, level chosen by outcome kind.
pub fn log_record(rec: &OutcomeRecord) {
    let url = rec.url.as_str();
    let outcome = rec.kind().as_str();
    let elapsed_ms = rec.elapsed.as_millis() as u64;
    let status = rec.outcome.response().map(|m| m.status);

    match rec.kind() {
        OutcomeKind::Succeeded => info!(
            target: "hedge.report",
            url, outcome, elapsed_ms, status, winner = rec.winner,
            "request succeeded"
        ),
        OutcomeKind::Cancelled => debug!(
            target: "hedge.report",
            url, outcome, elapsed_ms,
            "request cancelled"
        ),
        OutcomeKind::Failed | OutcomeKind::Timeout => {
            let reason = match &rec.outcome {
                WorkerOutcome::Failure(err) => err.to_string(),
                _ => String::new(),
            };
            warn!(
                target: "hedge.report",
                url, outcome, elapsed_ms, status, reason = %reason,
                "request failed"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hedge_model::{ResponseMeta, WorkerError};

    use super::*;

    fn rec(url: &str, outcome: WorkerOutcome, winner: bool) -> OutcomeRecord {
        OutcomeRecord {
            url: url.to_string(),
            outcome,
            elapsed: Duration::from_millis(150),
            winner,
        }
    }

    #[test]
    fn success_line_has_status_and_duration() {
        let line = render_line(&rec(
            "https://www.google.com",
            WorkerOutcome::Success(ResponseMeta::new(200, "OK")),
            true,
        ));
        assert_eq!(
            line,
            "Url: https://www.google.com got response status: 200 OK in 150ms"
        );
    }

    #[test]
    fn non_200_uses_url_line() {
        let line = render_line(&rec(
            "https://www.reddit.com",
            WorkerOutcome::Failure(WorkerError::status(ResponseMeta::new(403, "Forbidden"))),
            false,
        ));
        assert_eq!(
            line,
            "Url: https://www.reddit.com got response status: 403 Forbidden in 150ms"
        );
    }

    #[test]
    fn transport_failure_uses_error_line() {
        let line = render_line(&rec(
            "https://www.tumblr.com",
            WorkerOutcome::Failure(WorkerError::Timeout { timeout_ms: 2000 }),
            false,
        ));
        assert_eq!(
            line,
            "Error: https://www.tumblr.com: request timed out after 2000ms"
        );
    }

    #[test]
    fn cancelled_line_mentions_elapsed() {
        let line = render_line(&rec("https://www.snapchat.com", WorkerOutcome::Cancelled, false));
        assert_eq!(
            line,
            "Error: https://www.snapchat.com: request cancelled after 150ms"
        );
    }

    #[test]
    fn report_starts_with_winner_announcement() {
        let report = RaceReport {
            records: vec![
                rec("a", WorkerOutcome::Cancelled, false),
                rec("b", WorkerOutcome::Success(ResponseMeta::new(200, "OK")), true),
            ],
            winner: Some(1),
        };

        let mut buf = Vec::new();
        write_report(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Url: b got 200 status first. Cancelling other requests.");
        assert!(lines[1].starts_with("Error: a: request cancelled"));
        assert!(lines[2].starts_with("Url: b got response status: 200 OK"));
    }

    #[test]
    fn report_without_winner_has_no_announcement() {
        let report = RaceReport {
            records: vec![rec(
                "a",
                WorkerOutcome::Failure(WorkerError::network("connection refused")),
                false,
            )],
            winner: None,
        };

        assert_eq!(
            render_report(&report),
            vec!["Error: a: network error: connection refused".to_string()]
        );
    }

    #[test]
    fn closed_output_surfaces_io_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let report = RaceReport {
            records: vec![rec("a", WorkerOutcome::Cancelled, false)],
            winner: None,
        };

        let err = write_report(&report, Closed).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
