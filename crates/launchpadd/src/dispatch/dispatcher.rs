//! Request routing from frame to response.

use launchpad_types::Response;
use tracing::{debug, warn};

use super::DISPATCH_TARGET;
use super::errors::CommandError;
use super::registry::CommandRegistry;
use super::request::parse_request;
use crate::session::Session;

/// Encoded response used if serialising a response ever fails.
const ENCODE_FAILURE_RESPONSE: &str =
    r#"{"errorKind":"ProtocolError","message":"failed to encode response"}"#;

/// Routes frames to registered commands.
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Handles one frame and produces exactly one response.
    ///
    /// Failures never escape: malformed frames, unknown commands and
    /// provider errors all become error responses.
    pub fn dispatch(&self, session: &mut Session<'_>, frame: impl AsRef<[u8]>) -> Response {
        match self.try_dispatch(session, frame.as_ref()) {
            Ok(payload) => Response::Success(payload),
            Err(error) => {
                warn!(
                    target: DISPATCH_TARGET,
                    error_kind = %error.kind(),
                    error = %error,
                    "command failed"
                );
                error.to_response()
            }
        }
    }

    /// Handles one frame and returns the encoded response.
    pub fn dispatch_frame(&self, session: &mut Session<'_>, frame: impl AsRef<[u8]>) -> String {
        encode_response(&self.dispatch(session, frame))
    }

    fn try_dispatch(
        &self,
        session: &mut Session<'_>,
        frame: &[u8],
    ) -> Result<serde_json::Value, CommandError> {
        let request = parse_request(frame)?;
        let command = self
            .registry
            .lookup(&request.command)
            .ok_or_else(|| CommandError::unknown_command(&request.command))?;
        debug!(
            target: DISPATCH_TARGET,
            command = command.identifier(),
            "dispatching command"
        );
        command.call(session, &request.params)
    }
}

/// Serialises a response for the wire.
#[must_use]
pub fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|error| {
        warn!(
            target: DISPATCH_TARGET,
            error = %error,
            "failed to encode response"
        );
        String::from(ENCODE_FAILURE_RESPONSE)
    })
}
