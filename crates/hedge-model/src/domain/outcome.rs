use serde::{Deserialize, Serialize};

use crate::{OutcomeKind, ResponseMeta, WorkerError};

/// Result of one worker, produced exactly once per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "camelCase")]
pub enum WorkerOutcome {
    Success(ResponseMeta),
    Failure(WorkerError),
    Cancelled,
}

impl WorkerOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            WorkerOutcome::Success(_) => OutcomeKind::Succeeded,
            WorkerOutcome::Failure(WorkerError::Timeout { .. }) => OutcomeKind::Timeout,
            WorkerOutcome::Failure(WorkerError::Cancelled) => OutcomeKind::Cancelled,
            WorkerOutcome::Failure(_) => OutcomeKind::Failed,
            WorkerOutcome::Cancelled => OutcomeKind::Cancelled,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, WorkerOutcome::Success(_))
    }

    /// Response status line, if the server answered at all.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            WorkerOutcome::Success(meta) => Some(meta),
            WorkerOutcome::Failure(err) => err.response(),
            WorkerOutcome::Cancelled => None,
        }
    }
}

impl From<Result<ResponseMeta, WorkerError>> for WorkerOutcome {
    fn from(res: Result<ResponseMeta, WorkerError>) -> Self {
        match res {
            Ok(meta) => WorkerOutcome::Success(meta),
            Err(WorkerError::Cancelled) => WorkerOutcome::Cancelled,
            Err(err) => WorkerOutcome::Failure(err),
        }
    }
}
