//! Structured health reporting for daemon lifecycle events.

use std::sync::Arc;

use launchpad_config::Config;

use crate::bootstrap::BootstrapError;
use crate::transport::CloseCause;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the listener is bound and waiting for the companion.
    fn listening(&self, endpoint: &str);

    /// Invoked when the companion connection is accepted.
    fn connected(&self, peer: &str);

    /// Invoked once when the companion connection ends.
    fn connection_closed(&self, cause: &CloseCause);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn listening(&self, endpoint: &str) {
        (**self).listening(endpoint);
    }

    fn connected(&self, peer: &str) {
        (**self).connected(peer);
    }

    fn connection_closed(&self, cause: &CloseCause) {
        (**self).connection_closed(cause);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting daemon bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            listen = %config.listen(),
            framing = %config.framing(),
            log_file = %config.log_file(),
            log_filter = %config.log_filter(),
            log_format = ?config.log_format(),
            "daemon bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "daemon bootstrap failed"
        );
    }

    fn listening(&self, endpoint: &str) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "listening",
            endpoint,
            "waiting for companion connection"
        );
    }

    fn connected(&self, peer: &str) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "connected",
            peer,
            "companion connected"
        );
    }

    fn connection_closed(&self, cause: &CloseCause) {
        let exit_code = cause.exit_code();
        if exit_code == 0 {
            tracing::info!(
                target: HEALTH_TARGET,
                event = "connection_closed",
                cause = cause.label(),
                exit_code,
                "companion connection closed"
            );
        } else {
            tracing::error!(
                target: HEALTH_TARGET,
                event = "connection_closed",
                cause = cause.label(),
                detail = %cause,
                exit_code,
                "companion connection closed abnormally"
            );
        }
    }
}
