use std::sync::Arc;

use hedge_model::{RaceReport, RaceTask};
use tokio::task::AbortHandle;
use tracing::{debug, info, instrument};

use crate::{
    barrier::CompletionBarrier,
    signal::CancelSignal,
    state::OutcomeBoard,
    worker::{Worker, run_worker},
};

/// Runs a set of tasks concurrently and stops every other worker once one succeeds.
///
/// `run` returns only after every worker reached a terminal state; a race without
/// any success is a normal result, not an error.
pub struct RaceCoordinator {
    worker: Arc<dyn Worker>,
}

impl RaceCoordinator {
    pub fn new(worker: Arc<dyn Worker>) -> Self {
        Self { worker }
    }

    pub async fn run(&self, tasks: Vec<RaceTask>) -> RaceReport {
        self.run_with_signal(tasks, CancelSignal::new()).await
    }

    /// Same as [`RaceCoordinator::run`] with a caller-owned signal.
    ///
    /// Firing the signal from outside cancels the race; a signal that is already set
    /// makes every worker report `Cancelled` without issuing a request.
    #[instrument(
        level = "debug",
        skip_all,
        fields(run_id = %uuid::Uuid::new_v4(), tasks = tasks.len(), worker = self.worker.name())
    )]
    pub async fn run_with_signal(&self, tasks: Vec<RaceTask>, signal: CancelSignal) -> RaceReport {
        let barrier = CompletionBarrier::new(tasks.len());
        let board = OutcomeBoard::new(tasks.len());
        let mut handles = AbortOnDrop::default();

        for (idx, task) in tasks.iter().cloned().enumerate() {
            let worker = Arc::clone(&self.worker);
            let signal = signal.clone();
            let board = board.clone();
            let arrival = barrier.arrival();

            let handle = tokio::spawn(async move {
                let _arrival = arrival;
                let rec = run_worker(worker.as_ref(), &task, &signal).await;
                if rec.winner {
                    info!(
                        target: "hedge.core.race",
                        url = %rec.url,
                        "got 200 status first; cancelling other requests"
                    );
                }
                board.record(idx, rec);
            });
            handles.0.push(handle.abort_handle());
        }
        debug!(target: "hedge.core.race", "all workers started");

        barrier.wait().await;
        let report = board.finish(&tasks);

        debug!(
            target: "hedge.core.race",
            winner = report.winner_record().map(|r| r.url.as_str()),
            "all workers finished"
        );
        report
    }
}

/// Aborts still-running workers when the race future itself is dropped.
///
/// After a normal return every worker has already finished, so the aborts are no-ops.
#[derive(Default)]
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}
