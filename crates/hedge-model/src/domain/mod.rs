mod task;
pub use task::{DEFAULT_TIMEOUT_MS, RaceTask};

mod response;
pub use response::ResponseMeta;

mod outcome;
pub use outcome::WorkerOutcome;

mod outcome_kind;
pub use outcome_kind::OutcomeKind;

mod record;
pub use record::{OutcomeRecord, RaceReport};

/// Timeout value in milliseconds.
///
/// Used on tasks and in timeout errors where an explicit time limit is required.
pub type TimeoutMs = u64;
