//! Request parsing for inbound frames.

use launchpad_types::Request;

use super::errors::CommandError;

/// Parses one raw frame into a request.
///
/// An empty or unregistered `command` string is still a well-formed request;
/// the registry lookup decides what to do with it.
///
/// # Errors
///
/// Returns [`CommandError::Protocol`] when the frame is not valid UTF-8 or
/// not a JSON object with a string `command` and an object `params`.
pub(crate) fn parse_request(frame: &[u8]) -> Result<Request, CommandError> {
    let trimmed = frame.trim_ascii();
    if trimmed.is_empty() {
        return Err(CommandError::protocol("empty request frame"));
    }
    serde_json::from_slice(trimmed)
        .map_err(|error| CommandError::protocol(format!("malformed request: {error}")))
}
