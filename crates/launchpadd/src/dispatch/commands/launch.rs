//! `launch`: start the game for the authenticated identity.

use launchpad_types::{LaunchConfig, Response};
use serde_json::{Map, Value};

use crate::dispatch::errors::CommandError;
use crate::dispatch::params::{required_str, required_string_list};
use crate::dispatch::registry::Command;
use crate::session::Session;

/// Builds a [`LaunchConfig`] from `name`, `version`, `params`, `vmParams`
/// and `tweaks`, then asks the launch provider to start the game.
///
/// Authentication is checked before any parameter is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchCommand;

impl Command for LaunchCommand {
    fn identifier(&self) -> &'static str {
        "launch"
    }

    fn call(
        &self,
        session: &mut Session<'_>,
        params: &Map<String, Value>,
    ) -> Result<Value, CommandError> {
        let Some(auth) = session.auth_result() else {
            return Err(CommandError::NotAuthenticated);
        };
        let config = LaunchConfig::new(
            required_str(params, "name")?,
            required_str(params, "version")?,
            required_string_list(params, "params")?,
            required_string_list(params, "vmParams")?,
            required_string_list(params, "tweaks")?,
        );
        session.launch_provider().launch(&config, auth)?;
        Ok(Response::success_marker())
    }
}
