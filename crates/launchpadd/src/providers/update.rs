//! Update provider contract.

use serde_json::{Map, Value};
use thiserror::Error;

use super::PROVIDER_TARGET;

/// Errors reported by an update routine.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no update routine is configured")]
    Unconfigured,
    #[error("update failed: {message}")]
    Failed { message: String },
}

/// Runs the launcher's update routine.
pub trait UpdateProvider {
    /// Performs an update using the request parameters as opaque input.
    ///
    /// # Errors
    ///
    /// Returns an [`UpdateError`] when the update cannot be completed.
    fn update(&self, params: &Map<String, Value>) -> Result<(), UpdateError>;
}

/// Provider used when no update routine has been wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredUpdateProvider;

impl UpdateProvider for UnconfiguredUpdateProvider {
    fn update(&self, params: &Map<String, Value>) -> Result<(), UpdateError> {
        tracing::warn!(
            target: PROVIDER_TARGET,
            provider = "update",
            param_count = params.len(),
            "update requested but no routine is configured"
        );
        Err(UpdateError::Unconfigured)
    }
}
