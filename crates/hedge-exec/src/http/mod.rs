use std::time::Duration;

use async_trait::async_trait;
use hedge_core::{CancelSignal, Worker};
use hedge_model::{DEFAULT_TIMEOUT_MS, RaceTask, ResponseMeta, TimeoutMs, WorkerError};
use reqwest::StatusCode;
use tracing::{debug, trace};

use crate::error::{ExecError, ExecResult};

/// Client settings shared by every request of an [`HttpWorker`].
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Deadline given to tasks built through [`HttpWorker::task`].
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// Worker issuing one plain GET per task.
///
/// No custom headers, no body, default TLS verification. Only status 200 counts as success.
/// The deadline is set per request from the task, never on the shared client.
pub struct HttpWorker {
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpWorker {
    pub fn new(cfg: HttpConfig) -> ExecResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ExecError::Client(e.to_string()))?;

        Ok(Self {
            timeout: cfg.timeout,
            client,
        })
    }

    /// Task for `url` carrying the configured deadline.
    pub fn task(&self, url: impl Into<String>) -> RaceTask {
        RaceTask::new(url).with_timeout_ms(self.timeout.as_millis() as TimeoutMs)
    }

    /// GET `url` within `timeout`, aborting the in-flight request if `signal` fires first.
    ///
    /// The response is released before returning on every path; its body is never read.
    pub async fn fetch(
        &self,
        url: &str,
        timeout: Duration,
        signal: &CancelSignal,
    ) -> ExecResult<ResponseMeta> {
        if signal.is_cancelled() {
            return Err(ExecError::Cancelled);
        }

        trace!(target: "hedge.exec.http", url, timeout_ms = timeout.as_millis() as u64, "GET");
        let send = self.client.get(url).timeout(timeout).send();

        let response = tokio::select! {
            res = send => res.map_err(|e| ExecError::from_reqwest(e, timeout))?,
            _ = signal.cancelled() => {
                debug!(target: "hedge.exec.http", url, "cancelled; dropping in-flight request");
                return Err(ExecError::Cancelled);
            }
        };

        let status = response.status();
        drop(response);

        let meta = ResponseMeta::new(status.as_u16(), status.canonical_reason().unwrap_or(""));
        if status != StatusCode::OK {
            debug!(target: "hedge.exec.http", url, status = status.as_u16(), "non-200 status");
            return Err(ExecError::Status(meta));
        }
        Ok(meta)
    }
}

#[async_trait]
impl Worker for HttpWorker {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn call(
        &self,
        task: &RaceTask,
        signal: &CancelSignal,
    ) -> Result<ResponseMeta, WorkerError> {
        self.fetch(task.url(), task.timeout(), signal)
            .await
            .map_err(WorkerError::from)
    }
}
