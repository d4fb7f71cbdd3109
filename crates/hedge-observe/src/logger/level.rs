use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Validated `EnvFilter` directive string, e.g. `"info"` or `"warn,hedge.core=debug"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(directives: impl Into<String>) -> Result<Self, LoggerError> {
        let directives = directives.into();
        EnvFilter::try_new(&directives).map_err(|_| LoggerError::InvalidLevel(directives.clone()))?;
        Ok(Self(directives))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.0).map_err(|_| LoggerError::InvalidLevel(self.0.clone()))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_targeted_directives() {
        assert_eq!(LoggerLevel::new("debug").unwrap().as_str(), "debug");
        assert!(LoggerLevel::new("warn,hedge.core.race=trace").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            LoggerLevel::new("hedge=loud"),
            Err(LoggerError::InvalidLevel("hedge=loud".into()))
        );
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default().to_string(), "info");
    }
}
