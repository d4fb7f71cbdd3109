use std::time::Duration;

use hedge_model::{ResponseMeta, WorkerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("invalid request: {0}")]
    Builder(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("status code is not 200. Status code: {0}")]
    Status(ResponseMeta),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("cancelled")]
    Cancelled,
}

pub type ExecResult<T> = Result<T, ExecError>;

impl ExecError {
    /// Classify a transport error. `timeout` is the deadline the client was built with.
    pub fn from_reqwest(e: reqwest::Error, timeout: Duration) -> Self {
        if e.is_timeout() {
            ExecError::Timeout(timeout)
        } else if e.is_builder() {
            ExecError::Builder(e.to_string())
        } else {
            ExecError::Network(e.to_string())
        }
    }
}

impl From<ExecError> for WorkerError {
    fn from(e: ExecError) -> Self {
        match e {
            ExecError::Client(reason) | ExecError::Builder(reason) => {
                WorkerError::RequestConstruction { reason }
            }
            ExecError::Network(reason) => WorkerError::Network { reason },
            ExecError::Status(meta) => WorkerError::NonSuccessStatus { meta },
            ExecError::Timeout(d) => WorkerError::Timeout {
                timeout_ms: d.as_millis() as u64,
            },
            ExecError::Cancelled => WorkerError::Cancelled,
        }
    }
}
