use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use hedge_model::{OutcomeRecord, RaceReport, RaceTask, WorkerError, WorkerOutcome};

/// Per-race outcome table, one slot per task index.
///
/// Workers write their own slot exactly once; the driver reads the table after
/// the completion barrier released it.
#[derive(Clone, Debug)]
pub struct OutcomeBoard {
    inner: Arc<Mutex<Vec<Option<OutcomeRecord>>>>,
}

impl OutcomeBoard {
    pub fn new(size: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vec![None; size])),
        }
    }

    fn slots(&self) -> MutexGuard<'_, Vec<Option<OutcomeRecord>>> {
        // Slots are plain data written in one assignment; a poisoned lock still holds valid records.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store the terminal record of task `idx`. Out-of-range indexes are ignored.
    pub fn record(&self, idx: usize, rec: OutcomeRecord) {
        if let Some(slot) = self.slots().get_mut(idx) {
            *slot = Some(rec);
        }
    }

    /// Number of slots that hold a record.
    pub fn filled(&self) -> usize {
        self.slots().iter().filter(|s| s.is_some()).count()
    }

    /// Build the report in task order.
    ///
    /// A slot left empty belongs to a worker that unwound before recording; it becomes
    /// a `Panicked` failure. The winner is the single record flagged as owning the transition.
    pub fn finish(&self, tasks: &[RaceTask]) -> RaceReport {
        let mut slots = self.slots();

        let records: Vec<OutcomeRecord> = tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                slots
                    .get_mut(idx)
                    .and_then(Option::take)
                    .unwrap_or_else(|| OutcomeRecord {
                        url: task.url().to_string(),
                        outcome: WorkerOutcome::Failure(WorkerError::Panicked),
                        elapsed: Duration::ZERO,
                        winner: false,
                    })
            })
            .collect();

        let winner = records.iter().position(|r| r.winner);
        RaceReport { records, winner }
    }
}
