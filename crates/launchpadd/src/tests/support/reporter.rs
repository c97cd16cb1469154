//! Test double for [`HealthReporter`] that records structured events for
//! assertions.

use std::sync::Mutex;

use launchpad_config::Config;

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;
use crate::transport::CloseCause;

/// Structured health events tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    BootstrapStarting,
    BootstrapSucceeded,
    BootstrapFailed(String),
    Listening(String),
    Connected,
    ConnectionClosed { cause: &'static str, exit_code: u8 },
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    pub fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn listening(&self, endpoint: &str) {
        self.record(HealthEvent::Listening(endpoint.to_owned()));
    }

    fn connected(&self, _peer: &str) {
        self.record(HealthEvent::Connected);
    }

    fn connection_closed(&self, cause: &CloseCause) {
        self.record(HealthEvent::ConnectionClosed {
            cause: cause.label(),
            exit_code: cause.exit_code(),
        });
    }
}
