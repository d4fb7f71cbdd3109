use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::TimeoutMs;

/// Request deadline applied when a task does not specify its own.
pub const DEFAULT_TIMEOUT_MS: TimeoutMs = 2_000;

/// One unit of work in a race: a single GET against `url`.
///
/// Tasks are immutable once built and consumed by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceTask {
    url: String,
    timeout_ms: TimeoutMs,
}

impl RaceTask {
    /// Create a task with the default request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Override the per-request deadline.
    pub fn with_timeout_ms(mut self, timeout_ms: TimeoutMs) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn timeout_ms(&self) -> TimeoutMs {
        self.timeout_ms
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let task = RaceTask::new("https://www.google.com");
        assert_eq!(task.url(), "https://www.google.com");
        assert_eq!(task.timeout_ms(), DEFAULT_TIMEOUT_MS);
        assert_eq!(task.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn with_timeout_overrides_deadline() {
        let task = RaceTask::new("https://example.test").with_timeout_ms(150);
        assert_eq!(task.timeout(), Duration::from_millis(150));
    }

    #[test]
    fn serializes_camel_case() {
        let task = RaceTask::new("https://example.test").with_timeout_ms(10);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"url":"https://example.test","timeoutMs":10}"#);
    }
}
