use async_trait::async_trait;
use hedge_model::{OutcomeRecord, RaceTask, ResponseMeta, WorkerError, WorkerOutcome};
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::signal::CancelSignal;

/// Backend that performs one request for a [`RaceTask`].
///
/// Implementations should return as soon as they can once `signal` fires, but they do not have to:
/// [`run_worker`] drops the in-flight call when the signal or the task deadline wins.
#[async_trait]
pub trait Worker: Send + Sync {
    fn name(&self) -> &'static str;

    /// Perform the request. `Ok` means status 200; any other status is an error.
    async fn call(
        &self,
        task: &RaceTask,
        signal: &CancelSignal,
    ) -> Result<ResponseMeta, WorkerError>;
}

/// Drive one worker to a terminal state.
///
/// - A signal that is already set short-circuits to `Cancelled` without calling the worker.
/// - Otherwise the call races the signal and the task deadline; the losing call is dropped,
///   which aborts its in-flight I/O.
/// - A call that has already completed is taken over a concurrent cancellation, so a late
///   success is still reported as `Success`, just not as the winner.
/// - A success attempts the one-shot transition exactly once; owning it makes this worker the winner.
pub async fn run_worker(
    worker: &dyn Worker,
    task: &RaceTask,
    signal: &CancelSignal,
) -> OutcomeRecord {
    let started = Instant::now();

    if signal.is_cancelled() {
        trace!(
            target: "hedge.core.worker",
            url = task.url(),
            "signal already set; skipping request"
        );
        return OutcomeRecord {
            url: task.url().to_string(),
            outcome: WorkerOutcome::Cancelled,
            elapsed: started.elapsed(),
            winner: false,
        };
    }

    trace!(
        target: "hedge.core.worker",
        url = task.url(),
        worker = worker.name(),
        "request starting"
    );
    let call = tokio::time::timeout(task.timeout(), worker.call(task, signal));

    let outcome = tokio::select! {
        biased;
        res = call => match res {
            Ok(res) => WorkerOutcome::from(res),
            Err(_) => WorkerOutcome::Failure(WorkerError::Timeout { timeout_ms: task.timeout_ms() }),
        },
        _ = signal.cancelled() => WorkerOutcome::Cancelled,
    };

    let winner = outcome.is_success() && signal.trigger();
    let elapsed = started.elapsed();

    debug!(
        target: "hedge.core.worker",
        url = task.url(),
        outcome = outcome.kind().as_str(),
        elapsed_ms = elapsed.as_millis() as u64,
        winner,
        "worker finished"
    );

    OutcomeRecord {
        url: task.url().to_string(),
        outcome,
        elapsed,
        winner,
    }
}
