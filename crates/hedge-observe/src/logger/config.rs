use std::io::IsTerminal;

use crate::logger::{format::LoggerFormat, level::LoggerLevel};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    /// Settings derived from stderr, which carries all diagnostics.
    fn default() -> Self {
        let on_terminal = std::io::stderr().is_terminal();
        Self {
            format: LoggerFormat::for_stderr(cfg!(test) || on_terminal),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: on_terminal,
        }
    }
}
