use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("journald output requires linux and the `journald` feature")]
    JournaldUnavailable,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("logger setup failed: {0}")]
    Setup(String),
    #[error("invalid log filter `{0}`")]
    InvalidLevel(String),
}
