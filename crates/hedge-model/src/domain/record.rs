use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{OutcomeKind, WorkerOutcome};

/// Terminal state of one task together with its observability data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    /// Target URL of the task.
    pub url: String,
    /// What the worker ended with.
    pub outcome: WorkerOutcome,
    /// Time from worker start to its terminal state.
    #[serde(rename = "elapsedMs", with = "millis_serde")]
    pub elapsed: Duration,
    /// Whether this worker performed the cancellation transition.
    ///
    /// A success that lands after a peer already won is recorded with `winner == false`.
    pub winner: bool,
}

impl OutcomeRecord {
    #[inline]
    pub fn kind(&self) -> OutcomeKind {
        self.outcome.kind()
    }
}

/// Aggregated result of a race, records in task order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceReport {
    pub records: Vec<OutcomeRecord>,
    /// Index into `records` of the worker that flipped the cancellation signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<usize>,
}

impl RaceReport {
    pub fn winner_record(&self) -> Option<&OutcomeRecord> {
        self.winner.and_then(|idx| self.records.get(idx))
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.records.iter().filter(|r| r.kind() == kind).count()
    }

    /// `true` when the race ended without any success. Not an error by itself.
    pub fn all_failed(&self) -> bool {
        !self.records.iter().any(|r| r.outcome.is_success())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

mod millis_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (d.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
