use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Build the layer stack for `cfg.format` and install it as the global default.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let registry = tracing_subscriber::registry().with(cfg.level.to_filter()?);

    let installed = match cfg.format {
        LoggerFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(cfg.use_color)
                    .with_target(cfg.with_targets)
                    .with_timer(local_rfc3339()),
            )
            .try_init(),
        LoggerFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr)
                    .with_target(cfg.with_targets)
                    .with_timer(local_rfc3339()),
            )
            .try_init(),
        #[cfg(all(target_os = "linux", feature = "journald"))]
        LoggerFormat::Journald => {
            let journald = tracing_journald::layer()
                .map_err(|e| LoggerError::Setup(format!("journald: {e}")))?;
            registry.with(journald).try_init()
        }
        #[cfg(not(all(target_os = "linux", feature = "journald")))]
        LoggerFormat::Journald => return Err(LoggerError::JournaldUnavailable),
    };

    installed.map_err(classify)
}

fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn classify(e: TryInitError) -> LoggerError {
    let msg = e.to_string();
    // Either the tracing dispatcher or the `log` bridge was already set.
    if msg.contains("already") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::Setup(msg)
    }
}
