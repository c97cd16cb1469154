//! Process entry point: bootstrap, serve one companion, report the exit code.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use launchpad_config::Config;

use crate::StructuredHealthReporter;
use crate::bootstrap::{BootstrapError, ConfigLoader, SystemConfigLoader, bootstrap_with};
use crate::dispatch::{CommandRegistry, Dispatcher, RegistryError};
use crate::health::HealthReporter;
use crate::lifecycle::Lifecycle;
use crate::providers::{ProcessLaunchProvider, UnconfiguredAuthProvider, UnconfiguredUpdateProvider};
use crate::session::Providers;
use crate::transport::{ListenerError, SocketListener};

const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");

/// Errors that stop the daemon before or while waiting for the companion.
///
/// Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("failed to build command registry: {0}")]
    Registry(#[from] RegistryError),
    #[error("failed to listen for the companion: {0}")]
    Listener(#[from] ListenerError),
}

/// Runs the daemon using the production collaborators and returns the
/// process exit code.
///
/// # Errors
///
/// Returns a [`StartupError`] when the daemon cannot start listening or no
/// connection can be accepted.
pub fn run_daemon() -> Result<u8, StartupError> {
    let reporter: Arc<dyn HealthReporter> = Arc::new(StructuredHealthReporter::new());
    run_daemon_with(&SystemConfigLoader, reporter)
}

/// Runs the daemon with an injected configuration loader and reporter.
///
/// Authentication and update use the unconfigured providers; launching runs
/// the configured launcher program.
///
/// # Errors
///
/// Returns a [`StartupError`] when bootstrap, binding or accepting fails.
pub fn run_daemon_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<u8, StartupError> {
    let daemon = bootstrap_with(loader, reporter)?;
    let config = daemon.config();
    let auth = UnconfiguredAuthProvider;
    let launch = ProcessLaunchProvider::new(config.launcher_program());
    let update = UnconfiguredUpdateProvider;
    let providers = Providers {
        auth: &auth,
        launch: &launch,
        update: &update,
    };
    serve_companion(config, providers, daemon.reporter())
}

/// Binds the configured endpoint and serves a single companion connection
/// with the supplied providers.
///
/// # Errors
///
/// Returns a [`StartupError`] when the registry cannot be built or the
/// listener cannot bind or accept.
pub fn serve_companion(
    config: &Config,
    providers: Providers<'_>,
    reporter: &dyn HealthReporter,
) -> Result<u8, StartupError> {
    let dispatcher = Dispatcher::new(CommandRegistry::with_builtins()?);
    let listener = SocketListener::bind(config.listen())?;
    let endpoint = listener.local_addr().map_or_else(
        || config.listen().to_string(),
        |addr| format!("tcp://{addr}"),
    );
    reporter.listening(&endpoint);

    let mut lifecycle = Lifecycle::new(&dispatcher, providers, reporter, config.framing());
    let cause = lifecycle.run(listener)?;
    let exit_code = cause.exit_code();
    info!(
        target: PROCESS_TARGET,
        cause = cause.label(),
        exit_code,
        "daemon exiting"
    );
    Ok(exit_code)
}
