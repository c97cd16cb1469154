//! Normalised description of how to start the companion application.

use serde::{Deserialize, Serialize};

/// Parameters forwarded to a launch provider.
///
/// Every sequence keeps the order supplied by the client: argument vectors
/// are order-sensitive for the launched process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    name: String,
    version: String,
    game_params: Vec<String>,
    vm_params: Vec<String>,
    tweaks: Vec<String>,
}

impl LaunchConfig {
    /// Builds a configuration from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        game_params: Vec<String>,
        vm_params: Vec<String>,
        tweaks: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            game_params,
            vm_params,
            tweaks,
        }
    }

    /// Instance name, used as window title and directory name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Companion application version to start.
    #[must_use]
    pub const fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Arguments appended to the application command line.
    #[must_use]
    pub const fn game_params(&self) -> &[String] {
        self.game_params.as_slice()
    }

    /// Arguments passed to the hosting virtual machine.
    #[must_use]
    pub const fn vm_params(&self) -> &[String] {
        self.vm_params.as_slice()
    }

    /// Tweaks to load, in load order.
    #[must_use]
    pub const fn tweaks(&self) -> &[String] {
        self.tweaks.as_slice()
    }
}
