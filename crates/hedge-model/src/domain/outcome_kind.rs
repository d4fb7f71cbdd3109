use serde::{Deserialize, Serialize};

/// Terminal state of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeKind {
    /// Response received with status 200.
    Succeeded,
    /// Request failed (network, construction or non-200 status).
    Failed,
    /// Request exceeded its deadline.
    Timeout,
    /// Request was aborted because a peer won the race.
    Cancelled,
}

impl OutcomeKind {
    /// Short symbolic identifier, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Succeeded => "succeeded",
            OutcomeKind::Failed => "failed",
            OutcomeKind::Timeout => "timeout",
            OutcomeKind::Cancelled => "cancelled",
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeKind::Succeeded)
    }

    /// `true` for every kind that counts as a failed attempt.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, OutcomeKind::Failed | OutcomeKind::Timeout)
    }
}
