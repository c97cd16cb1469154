//! Structured telemetry initialisation for the daemon.
//!
//! Events are written to stderr and appended to the configured log file.
//! When the log file cannot be opened the daemon keeps running with stderr
//! only and records a warning.

use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use camino::Utf8Path;
use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use launchpad_config::{Config, LogFormat};

const TELEMETRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::telemetry");

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: only the first invocation installs the
/// global subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an invalid filter expression and
/// [`TelemetryError::Subscriber`] when another subscriber is already
/// installed.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| ())
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let (writer, ansi, file_error) = match open_log_file(config.log_file()) {
        Ok(file) => (
            BoxMakeWriter::new(io::stderr.and(Mutex::new(file))),
            false,
            None,
        ),
        Err(error) => (
            BoxMakeWriter::new(io::stderr),
            io::stderr().is_terminal(),
            Some(error),
        ),
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer)
        // Colour codes only when stderr is the sole sink and a terminal.
        .with_ansi(ansi)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)?;

    if let Some(error) = file_error {
        tracing::warn!(
            target: TELEMETRY_TARGET,
            path = %config.log_file(),
            error = %error,
            "log file unavailable, logging to stderr only"
        );
    }
    Ok(())
}

/// Opens the log file for appending, creating missing parent directories.
fn open_log_file(path: &Utf8Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
