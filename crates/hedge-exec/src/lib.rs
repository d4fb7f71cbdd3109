mod error;
pub use error::{ExecError, ExecResult};

pub mod http;
pub use http::{HttpConfig, HttpWorker};
