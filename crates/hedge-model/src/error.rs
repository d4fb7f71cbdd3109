use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ResponseMeta, TimeoutMs};

/// Why a single worker did not produce a usable response.
///
/// Every variant is local to the worker that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WorkerError {
    #[error("invalid request: {reason}")]
    RequestConstruction { reason: String },
    #[error("network error: {reason}")]
    Network { reason: String },
    #[error("status code is not 200. Status code: {meta}")]
    NonSuccessStatus { meta: ResponseMeta },
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: TimeoutMs },
    #[error("request cancelled")]
    Cancelled,
    #[error("worker panicked")]
    Panicked,
}

impl WorkerError {
    pub fn request(reason: impl Into<String>) -> Self {
        WorkerError::RequestConstruction {
            reason: reason.into(),
        }
    }

    pub fn network(reason: impl Into<String>) -> Self {
        WorkerError::Network {
            reason: reason.into(),
        }
    }

    pub fn status(meta: ResponseMeta) -> Self {
        WorkerError::NonSuccessStatus { meta }
    }

    /// Response metadata when the server answered with a non-200 status.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            WorkerError::NonSuccessStatus { meta } => Some(meta),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_keeps_response() {
        let err = WorkerError::status(ResponseMeta::new(404, "Not Found"));
        assert_eq!(err.response().map(|m| m.status), Some(404));
        assert_eq!(
            err.to_string(),
            "status code is not 200. Status code: 404 Not Found"
        );
    }

    #[test]
    fn timeout_message_carries_deadline() {
        let err = WorkerError::Timeout { timeout_ms: 2000 };
        assert_eq!(err.to_string(), "request timed out after 2000ms");
        assert!(err.response().is_none());
    }

    #[test]
    fn serde_tagged_by_kind() {
        let json = serde_json::to_string(&WorkerError::network("dns")).unwrap();
        assert_eq!(json, r#"{"kind":"network","reason":"dns"}"#);
    }
}
