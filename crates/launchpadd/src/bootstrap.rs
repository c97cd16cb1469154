//! Daemon bootstrap orchestration.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use launchpad_config::{Config, EndpointError};

use crate::health::HealthReporter;
use crate::telemetry::{self, TelemetryError};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the daemon configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader error when no valid configuration can be built.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`], merging defaults, the config
/// file, `LAUNCHPAD_*` environment variables and command-line flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// The listen endpoint is not local or its directory cannot be made.
    #[error("failed to prepare daemon socket: {source}")]
    Socket {
        /// Endpoint check or directory preparation failure.
        #[source]
        source: EndpointError,
    },
}

/// Result of a successful bootstrap invocation.
pub struct Daemon {
    config: Config,
    reporter: Arc<dyn HealthReporter>,
}

impl Daemon {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Reporter that receives lifecycle events.
    #[must_use]
    pub fn reporter(&self) -> &dyn HealthReporter {
        &*self.reporter
    }
}

/// Bootstraps the daemon: loads configuration, installs telemetry, checks
/// the listen endpoint is local and prepares its socket directory.
///
/// # Errors
///
/// Returns a [`BootstrapError`] for the first stage that fails. The failure
/// is also reported to `reporter`.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Daemon, BootstrapError> {
    reporter.bootstrap_starting();

    let config = match loader.load() {
        Ok(config) => config,
        Err(source) => {
            let error = BootstrapError::Configuration { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };

    if let Err(source) = telemetry::initialise(&config) {
        let error = BootstrapError::Telemetry { source };
        reporter.bootstrap_failed(&error);
        return Err(error);
    }

    let listen = config.listen();
    if let Err(source) = listen
        .ensure_local()
        .and_then(|()| listen.prepare_socket_directory())
    {
        let error = BootstrapError::Socket { source };
        reporter.bootstrap_failed(&error);
        return Err(error);
    }

    reporter.bootstrap_succeeded(&config);

    Ok(Daemon { config, reporter })
}
