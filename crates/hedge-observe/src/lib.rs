mod logger;
pub use logger::*;

mod report;
pub use report::*;
