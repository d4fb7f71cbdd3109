/// Output encoding of diagnostic logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggerFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
    /// Native systemd journal fields (linux + `journald` feature).
    Journald,
}

impl LoggerFormat {
    /// Format for a stderr that is (or is not) an interactive terminal.
    ///
    /// Terminals get text. Otherwise the journal when built with the `journald`
    /// feature on linux, JSON lines for any other collector.
    pub fn for_stderr(is_terminal: bool) -> Self {
        if is_terminal {
            LoggerFormat::Text
        } else if cfg!(all(target_os = "linux", feature = "journald")) {
            LoggerFormat::Journald
        } else {
            LoggerFormat::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_gets_text() {
        assert_eq!(LoggerFormat::for_stderr(true), LoggerFormat::Text);
    }

    #[cfg(not(all(target_os = "linux", feature = "journald")))]
    #[test]
    fn pipe_gets_json() {
        assert_eq!(LoggerFormat::for_stderr(false), LoggerFormat::Json);
    }

    #[cfg(all(target_os = "linux", feature = "journald"))]
    #[test]
    fn pipe_gets_journal_when_built_in() {
        assert_eq!(LoggerFormat::for_stderr(false), LoggerFormat::Journald);
    }
}
