//! `authenticate`: exchange credentials for an identity.

use launchpad_types::AuthResult;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::dispatch::DISPATCH_TARGET;
use crate::dispatch::errors::CommandError;
use crate::dispatch::params::required_str;
use crate::dispatch::registry::Command;
use crate::session::Session;

/// Authenticates with `username`, `password` and `clientToken`, stores the
/// resulting identity on the session and returns it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticateCommand;

impl Command for AuthenticateCommand {
    fn identifier(&self) -> &'static str {
        "authenticate"
    }

    fn call(
        &self,
        session: &mut Session<'_>,
        params: &Map<String, Value>,
    ) -> Result<Value, CommandError> {
        let username = required_str(params, "username")?;
        let password = required_str(params, "password")?;
        let client_token = required_str(params, "clientToken")?;

        let result = session
            .auth_provider()
            .authenticate(username, password, client_token)?;
        let payload = auth_payload(&result);
        let replaced = session.replace_auth_result(result).is_some();
        debug!(
            target: DISPATCH_TARGET,
            username,
            replaced,
            "stored authenticated identity"
        );
        Ok(payload)
    }
}

fn auth_payload(result: &AuthResult) -> Value {
    json!({
        "username": result.username(),
        "uuid": result.uuid(),
        "accessToken": result.access_token(),
        "clientToken": result.client_token(),
    })
}
