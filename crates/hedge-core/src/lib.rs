pub mod barrier;
pub use barrier::{Arrival, CompletionBarrier};
pub mod race;
pub use race::RaceCoordinator;
pub mod signal;
pub use signal::CancelSignal;
pub mod state;
pub use state::OutcomeBoard;
pub mod worker;
pub use worker::{Worker, run_worker};
