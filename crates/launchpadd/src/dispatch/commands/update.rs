//! `update`: run the launcher's update routine.

use launchpad_types::Response;
use serde_json::{Map, Value};

use crate::dispatch::errors::CommandError;
use crate::dispatch::registry::Command;
use crate::session::Session;

/// Passes the request parameters to the update provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateCommand;

impl Command for UpdateCommand {
    fn identifier(&self) -> &'static str {
        "update"
    }

    fn call(
        &self,
        session: &mut Session<'_>,
        params: &Map<String, Value>,
    ) -> Result<Value, CommandError> {
        session.update_provider().update(params)?;
        Ok(Response::success_marker())
    }
}
