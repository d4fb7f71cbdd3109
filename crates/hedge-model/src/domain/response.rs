use std::fmt;

use serde::{Deserialize, Serialize};

/// Status line of a received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Numeric status code.
    pub status: u16,
    /// Canonical reason phrase; empty when the code has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl ResponseMeta {
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// `true` only for `200`; every other code is a failed attempt.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Render the status as `"200 OK"` (or just `"299"` without a reason).
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResponseMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{} {}", self.status, self.reason)
        }
    }
}
