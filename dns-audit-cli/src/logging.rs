//! Log sinks: console (stderr) and an append-only file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AuditError;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "dns-audit.log";

/// Open `<dir>/dns-audit.log` for appending, creating `dir` if needed.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, AuditError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AuditError::Logging(format!("cannot create {}: {e}", dir.display())))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .map_err(|e| AuditError::Logging(e.to_string()))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file sink on drop and must live until exit.
/// `log` records from the provider crate are forwarded to the same sinks.
pub fn init() -> Result<WorkerGuard, AuditError> {
    let appender = file_appender(Path::new(LOG_DIR))?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|e| AuditError::Logging(e.to_string()))?;

    Ok(guard)
}
